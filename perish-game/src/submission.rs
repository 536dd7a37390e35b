//! Journal submission and peer review: desk screening, referee verdicts,
//! revision and rebuttal flows, and the reward/penalty settlement.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ACCEPT_LAB_FUNDING, ACCEPT_PRESSURE_RELIEF, ACCEPT_REL_BONUS, ACCEPT_SANITY_BONUS,
    ACCEPT_STRESS_RELIEF, ACCEPT_SUPERVISOR_REP, DISPLAY_CHANCE_CEILING, DISPLAY_CHANCE_FLOOR,
    DISPLAY_CHANCE_MISFIT, DISPLAY_CHANCE_SURE, LOG_PAPER_ACCEPTED, LOG_PAPER_REJECTED,
    LOG_REBUTTAL_SENT, LOG_REVISION_STARTED, LOG_SUBMIT_NO_FUNDS, LOG_SUBMIT_PREFIX,
    MAJOR_REVISION_SCORE, MINOR_REVISION_SCORE, PREDATORY_REP_PENALTY, REBUT_BASE_CHANCE,
    REBUT_ENERGY, REBUT_LUCKY_BONUS, REBUT_LUCKY_CHANCE, REBUT_MINOR_CHANCE, REBUT_STRESS,
    REJECT_RESILIENCE, REJECT_SANITY, REJECT_STRESS, REJECT_WRITING_GAIN, REVISION_REQ_MAJOR,
    REVISION_REQ_MINOR, REVISION_REQ_RESUBMIT, SUBMISSION_REP_BONUS,
};
use crate::journals::Journal;
use crate::research::manuscript_quality;
use crate::session::CommandError;
use crate::state::{GameState, Paper, PendingReview, ProjectStage, ReviewKind};
use crate::stats::{Career, Physiological, Skills, StatDelta, Talents, apply_delta};

/// How the editor answered a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionVerdict {
    DeskReject,
    PeerReview(ReviewKind),
    Accepted,
    Rejected,
}

/// The player's answer to a referee verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Revise,
    Rebut,
    GiveUp,
}

fn supervisor_reputation(state: &GameState) -> f64 {
    state.supervisor.map_or(0.0, |s| s.reputation)
}

/// Pre-commit acceptance odds shown for a finished manuscript, in percent.
/// Purely informational; the real resolution happens in [`submit_to_journal`].
#[must_use]
pub fn acceptance_percent(state: &GameState, journal: &Journal) -> f64 {
    let Some(project) = state.active_project.as_ref() else {
        return 0.0;
    };
    let quality = manuscript_quality(state, project);
    if quality < journal.minimum_quality {
        return 0.0;
    }
    let idea = &project.idea;
    if !journal.requirements.satisfied_by(
        idea.novelty,
        idea.feasibility,
        idea.resources,
        idea.attraction,
    ) {
        return DISPLAY_CHANCE_MISFIT;
    }
    if quality >= journal.accept_quality {
        return DISPLAY_CHANCE_SURE;
    }
    let normalized =
        (quality - journal.minimum_quality) / (journal.accept_quality - journal.minimum_quality);
    let percent = normalized * 100.0 + supervisor_reputation(state) * SUBMISSION_REP_BONUS * 100.0;
    percent.clamp(DISPLAY_CHANCE_FLOOR, DISPLAY_CHANCE_CEILING)
}

/// Send the finished manuscript to a journal.
///
/// A project still in revision resubmits to the journal that asked for the
/// revision; the odds scale with how much of the requested rework got done.
/// A fresh submission pays any open-access fee out of lab funding, then is
/// desk rejected, sent to referees, or accepted outright on quality alone.
///
/// # Errors
///
/// Rejects without a finished project, while a referee verdict is still
/// unanswered, or when the lab cannot cover the submission fee.
pub fn submit_to_journal(
    state: &mut GameState,
    journal: &Journal,
) -> Result<SubmissionVerdict, CommandError> {
    let Some(project) = state.active_project.as_ref() else {
        return Err(CommandError::NoActiveProject);
    };
    if state.pending_review.is_some() {
        return Err(CommandError::ReviewPending);
    }
    if !project.is_complete() {
        return Err(CommandError::ProjectUnfinished);
    }
    let quality = manuscript_quality(state, project);

    if let ProjectStage::Revision { requirement, .. } = project.stage.clone() {
        return resubmit(state, journal, requirement, quality);
    }

    if journal.submission_fee > 0 {
        let funding = state.supervisor.as_ref().map_or(0, |s| s.funding);
        if funding < journal.submission_fee {
            state.push_log(LOG_SUBMIT_NO_FUNDS);
            return Err(CommandError::InsufficientLabFunding);
        }
        if let Some(sup) = state.supervisor.as_mut() {
            sup.funding -= journal.submission_fee;
        }
    }

    let verdict = if quality < journal.minimum_quality {
        finalize_submission(state, journal, quality, false);
        SubmissionVerdict::DeskReject
    } else if quality >= journal.accept_quality {
        finalize_submission(state, journal, quality, true);
        SubmissionVerdict::Accepted
    } else {
        let normalized = (quality - journal.minimum_quality)
            / (journal.accept_quality - journal.minimum_quality);
        let score = normalized + supervisor_reputation(state) * SUBMISSION_REP_BONUS;
        let review = if score > MINOR_REVISION_SCORE {
            ReviewKind::Minor
        } else if score > MAJOR_REVISION_SCORE {
            ReviewKind::Major
        } else {
            ReviewKind::Resubmit
        };
        state.pending_review = Some(PendingReview {
            journal_id: journal.id.clone(),
            quality,
            review,
        });
        SubmissionVerdict::PeerReview(review)
    };

    state.push_log(&format!("{LOG_SUBMIT_PREFIX}{}", verdict_key(verdict)));
    Ok(verdict)
}

fn verdict_key(verdict: SubmissionVerdict) -> &'static str {
    match verdict {
        SubmissionVerdict::DeskReject => "desk-reject",
        SubmissionVerdict::PeerReview(ReviewKind::Minor) => "minor-revision",
        SubmissionVerdict::PeerReview(ReviewKind::Major) => "major-revision",
        SubmissionVerdict::PeerReview(ReviewKind::Resubmit) => "resubmit",
        SubmissionVerdict::Accepted => "accepted",
        SubmissionVerdict::Rejected => "rejected",
    }
}

fn resubmit(
    state: &mut GameState,
    journal: &Journal,
    requirement: f64,
    quality: f64,
) -> Result<SubmissionVerdict, CommandError> {
    let progress = state.active_project.as_ref().map_or(0.0, |p| p.progress);
    let chance = progress / requirement.max(1.0) * 100.0;
    let accepted = state.roll_range(0.0, 100.0) < chance;
    finalize_submission(state, journal, quality, accepted);
    let verdict = if accepted {
        SubmissionVerdict::Accepted
    } else {
        SubmissionVerdict::Rejected
    };
    state.push_log(&format!("{LOG_SUBMIT_PREFIX}{}", verdict_key(verdict)));
    Ok(verdict)
}

/// Answer an outstanding referee verdict.
///
/// Revising re-opens the project against a severity-scaled rework target.
/// Rebutting argues the decision on the spot: cheap, stressful, and usually
/// doomed unless the verdict was already close. Giving up eats the rejection.
///
/// # Errors
///
/// Rejects when no verdict is outstanding, the verdict's journal vanished
/// from the catalog, or a rebuttal exceeds remaining energy.
pub fn review_action(
    state: &mut GameState,
    decision: ReviewDecision,
    journal: &Journal,
) -> Result<SubmissionVerdict, CommandError> {
    let Some(pending) = state.pending_review.clone() else {
        return Err(CommandError::NoPendingReview);
    };

    match decision {
        ReviewDecision::Revise => {
            let requirement = match pending.review {
                ReviewKind::Minor => REVISION_REQ_MINOR,
                ReviewKind::Major => REVISION_REQ_MAJOR,
                ReviewKind::Resubmit => REVISION_REQ_RESUBMIT,
            };
            if let Some(project) = state.active_project.as_mut() {
                project.progress = 0.0;
                project.stage = ProjectStage::Revision {
                    requirement,
                    journal_id: pending.journal_id,
                };
            }
            state.pending_review = None;
            state.push_log(LOG_REVISION_STARTED);
            Ok(SubmissionVerdict::PeerReview(pending.review))
        }
        ReviewDecision::Rebut => {
            if state.stats.energy < REBUT_ENERGY {
                return Err(CommandError::InsufficientEnergy);
            }
            let caps = state.caps;
            apply_delta(
                &mut state.stats,
                &caps,
                &StatDelta {
                    energy: -REBUT_ENERGY,
                    physiological: Physiological {
                        stress: REBUT_STRESS,
                        ..Physiological::default()
                    },
                    ..StatDelta::default()
                },
            );
            let mut chance = if pending.review == ReviewKind::Minor {
                REBUT_MINOR_CHANCE
            } else {
                REBUT_BASE_CHANCE
            };
            // A sympathetic editor, once in a while.
            if state.roll_unit() > 1.0 - REBUT_LUCKY_CHANCE {
                chance += REBUT_LUCKY_BONUS;
            }
            let accepted = state.roll_range(0.0, 100.0) < chance;
            state.push_log(LOG_REBUTTAL_SENT);
            state.pending_review = None;
            finalize_submission(state, journal, pending.quality, accepted);
            Ok(if accepted {
                SubmissionVerdict::Accepted
            } else {
                SubmissionVerdict::Rejected
            })
        }
        ReviewDecision::GiveUp => {
            state.pending_review = None;
            finalize_submission(state, journal, pending.quality, false);
            Ok(SubmissionVerdict::Rejected)
        }
    }
}

/// Settle a resolved submission: pay out or punish, append the paper record,
/// and retire the project either way.
fn finalize_submission(state: &mut GameState, journal: &Journal, quality: f64, accepted: bool) {
    let caps = state.caps;
    let title = state
        .active_project
        .as_ref()
        .map_or_else(|| "Untitled manuscript".to_string(), |p| p.idea.title.clone());
    if accepted {
        apply_delta(
            &mut state.stats,
            &caps,
            &StatDelta {
                physiological: Physiological {
                    stress: -ACCEPT_STRESS_RELIEF,
                    sanity: ACCEPT_SANITY_BONUS,
                    ..Physiological::default()
                },
                career: Career {
                    reputation: journal.reputation_reward,
                    supervisor_rel: ACCEPT_REL_BONUS,
                    meeting_expectation: -ACCEPT_PRESSURE_RELIEF,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
        );
        if let Some(sup) = state.supervisor.as_mut() {
            sup.funding += ACCEPT_LAB_FUNDING;
            sup.reputation += ACCEPT_SUPERVISOR_REP;
        }
        state.push_log(LOG_PAPER_ACCEPTED);
    } else {
        let reputation = if journal.reputation_reward < 0.0 {
            PREDATORY_REP_PENALTY
        } else {
            0.0
        };
        apply_delta(
            &mut state.stats,
            &caps,
            &StatDelta {
                physiological: Physiological {
                    stress: REJECT_STRESS,
                    sanity: REJECT_SANITY,
                    ..Physiological::default()
                },
                talents: Talents {
                    resilience: REJECT_RESILIENCE,
                    ..Talents::default()
                },
                skills: Skills {
                    writing: REJECT_WRITING_GAIN,
                    ..Skills::default()
                },
                career: Career {
                    reputation,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
        );
        state.push_log(LOG_PAPER_REJECTED);
    }
    // Every resolved submission leaves a record; only accepted ones count
    // toward citations and the win check.
    state.papers.push(Paper {
        title,
        journal_id: journal.id.clone(),
        quality,
        accepted,
        citations: 0.0,
        citation_factor: journal.citation_factor,
    });
    state.active_project = None;
    state.check_game_over();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journals::JournalList;
    use crate::state::{ResearchIdea, ResearchProject};

    fn finished_project(potential: f64, novelty: f64) -> ResearchProject {
        ResearchProject {
            idea: ResearchIdea {
                id: 1,
                title: "Test Manuscript".to_string(),
                description: String::new(),
                novelty,
                feasibility: 50.0,
                potential,
                resources: 40.0,
                attraction: 60.0,
                difficulty: 50.0,
            },
            progress: 100.0,
            failure_count: 0.0,
            stage: ProjectStage::Research,
        }
    }

    /// quality = potential*0.6 + novelty*0.2 + writing*0.2, writing zeroed.
    fn ready_state(potential: f64, novelty: f64) -> GameState {
        let mut state = GameState::test_run();
        state.stats.skills.writing = 0.0;
        if let Some(sup) = state.supervisor.as_mut() {
            sup.reputation = 0.0;
        }
        state.active_project = Some(finished_project(potential, novelty));
        state
    }

    fn journal(id: &str) -> Journal {
        JournalList::builtin().get_by_id(id).unwrap().clone()
    }

    #[test]
    fn low_quality_is_desk_rejected_regardless_of_fit() {
        // quality = 80*0.6 + 60*0.2 = 60, well under the flagship's 85 bar.
        let mut state = ready_state(80.0, 60.0);
        let resilience_before = state.stats.talents.resilience;
        let verdict = submit_to_journal(&mut state, &journal("nature")).unwrap();
        assert_eq!(verdict, SubmissionVerdict::DeskReject);
        assert!(state.active_project.is_none());
        // The rejection still goes on the record, just not into print.
        assert_eq!(state.papers.len(), 1);
        assert!(!state.papers[0].accepted);
        assert_eq!(state.published_count(), 0);
        // Rejection penalties still land.
        assert!(state.stats.talents.resilience > resilience_before);
    }

    #[test]
    fn quality_at_accept_bar_is_taken_outright() {
        // quality = 90*0.6 + 55*0.2 = 65 = phys_b's accept bar.
        let mut state = ready_state(90.0, 55.0);
        let funding_before = state.supervisor.unwrap().funding;
        let verdict = submit_to_journal(&mut state, &journal("phys_b")).unwrap();
        assert_eq!(verdict, SubmissionVerdict::Accepted);
        assert_eq!(state.papers.len(), 1);
        assert!(state.papers[0].accepted);
        assert_eq!(state.papers[0].title, "Test Manuscript");
        assert!((state.papers[0].citations).abs() < f64::EPSILON);
        assert_eq!(
            state.supervisor.unwrap().funding,
            funding_before + ACCEPT_LAB_FUNDING
        );
    }

    #[test]
    fn middle_band_buckets_by_normalized_score() {
        // phys_b spans 40..65. quality 60 → 0.8 → minor revision.
        let mut state = ready_state(90.0, 30.0);
        let verdict = submit_to_journal(&mut state, &journal("phys_b")).unwrap();
        assert_eq!(verdict, SubmissionVerdict::PeerReview(ReviewKind::Minor));
        assert_eq!(
            state.pending_review.as_ref().map(|p| p.review),
            Some(ReviewKind::Minor)
        );

        // quality 55 → 0.6 → major revision.
        let mut state = ready_state(75.0, 50.0);
        let verdict = submit_to_journal(&mut state, &journal("phys_b")).unwrap();
        assert_eq!(verdict, SubmissionVerdict::PeerReview(ReviewKind::Major));

        // quality 50 → 0.4 exactly, strict comparison lands on resubmit.
        let mut state = ready_state(70.0, 40.0);
        let verdict = submit_to_journal(&mut state, &journal("phys_b")).unwrap();
        assert_eq!(verdict, SubmissionVerdict::PeerReview(ReviewKind::Resubmit));
    }

    #[test]
    fn open_access_fee_comes_out_of_lab_funding() {
        let mut state = ready_state(90.0, 55.0);
        if let Some(sup) = state.supervisor.as_mut() {
            sup.funding = 1_000;
        }
        let oa = journal("open_access_mega");
        assert_eq!(
            submit_to_journal(&mut state, &oa),
            Err(CommandError::InsufficientLabFunding)
        );
        assert!(state.active_project.is_some());
        assert_eq!(state.logs.last().map(String::as_str), Some(LOG_SUBMIT_NO_FUNDS));

        if let Some(sup) = state.supervisor.as_mut() {
            sup.funding = 2_000;
        }
        submit_to_journal(&mut state, &oa).unwrap();
        // Fee deducted, then the acceptance payout on top.
        assert_eq!(
            state.supervisor.unwrap().funding,
            2_000 - oa.submission_fee + ACCEPT_LAB_FUNDING
        );
    }

    #[test]
    fn submitting_twice_waits_for_the_referees() {
        let mut state = ready_state(90.0, 30.0);
        let phys_b = journal("phys_b");
        submit_to_journal(&mut state, &phys_b).unwrap();
        assert_eq!(
            submit_to_journal(&mut state, &phys_b),
            Err(CommandError::ReviewPending)
        );
    }

    #[test]
    fn revise_reopens_the_project_against_a_scaled_target() {
        let mut state = ready_state(75.0, 50.0);
        let phys_b = journal("phys_b");
        submit_to_journal(&mut state, &phys_b).unwrap();
        review_action(&mut state, ReviewDecision::Revise, &phys_b).unwrap();

        assert!(state.pending_review.is_none());
        let project = state.active_project.as_ref().unwrap();
        assert!((project.progress).abs() < f64::EPSILON);
        assert_eq!(
            project.stage,
            ProjectStage::Revision {
                requirement: REVISION_REQ_MAJOR,
                journal_id: "phys_b".to_string(),
            }
        );
    }

    #[test]
    fn resubmission_odds_scale_with_rework_done() {
        let mut state = ready_state(75.0, 50.0);
        let phys_b = journal("phys_b");
        submit_to_journal(&mut state, &phys_b).unwrap();
        review_action(&mut state, ReviewDecision::Revise, &phys_b).unwrap();

        // Full rework and a zeroed RNG: the roll reads 0, under a 100% chance.
        state.rng = None;
        if let Some(project) = state.active_project.as_mut() {
            project.progress = REVISION_REQ_MAJOR;
        }
        let verdict = submit_to_journal(&mut state, &phys_b).unwrap();
        assert_eq!(verdict, SubmissionVerdict::Accepted);
        assert_eq!(state.papers.len(), 1);
        assert!(state.active_project.is_none());
    }

    #[test]
    fn rebuttal_costs_energy_and_resolves_immediately() {
        let mut state = ready_state(90.0, 30.0);
        let phys_b = journal("phys_b");
        submit_to_journal(&mut state, &phys_b).unwrap();

        // Zeroed RNG: no lucky bonus, but the 0 roll beats the 60% minor
        // chance, so the rebuttal lands.
        state.rng = None;
        let energy_before = state.stats.energy;
        let verdict = review_action(&mut state, ReviewDecision::Rebut, &phys_b).unwrap();
        assert_eq!(verdict, SubmissionVerdict::Accepted);
        assert!((state.stats.energy - (energy_before - REBUT_ENERGY)).abs() < f64::EPSILON);
        assert!(state.pending_review.is_none());
        assert_eq!(state.papers.len(), 1);
    }

    #[test]
    fn giving_up_finalizes_as_rejection() {
        let mut state = ready_state(75.0, 50.0);
        let phys_b = journal("phys_b");
        submit_to_journal(&mut state, &phys_b).unwrap();
        let stress_before = state.stats.physiological.stress;
        let verdict = review_action(&mut state, ReviewDecision::GiveUp, &phys_b).unwrap();
        assert_eq!(verdict, SubmissionVerdict::Rejected);
        assert_eq!(state.papers.len(), 1);
        assert!(!state.papers[0].accepted);
        assert_eq!(state.published_count(), 0);
        assert!(state.active_project.is_none());
        assert!(state.stats.physiological.stress > stress_before);
    }

    #[test]
    fn predatory_acceptance_is_a_reputation_trap() {
        // Any manuscript clears the spam journal's bar; the "reward" is
        // negative.
        let mut state = ready_state(70.0, 40.0);
        state.stats.career.reputation = 100.0;
        if let Some(sup) = state.supervisor.as_mut() {
            sup.funding = 10_000;
        }
        let predatory = journal("predatory");
        let verdict = submit_to_journal(&mut state, &predatory).unwrap();
        assert_eq!(verdict, SubmissionVerdict::Accepted);
        assert!(
            (state.stats.career.reputation - (100.0 + predatory.reputation_reward)).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn negative_reward_venues_also_punish_rejection() {
        // A wide-band venue with a negative reward, as a data-driven catalog
        // could ship.
        let mut shady = journal("phys_b");
        shady.reputation_reward = -10.0;
        let mut state = ready_state(75.0, 50.0);
        state.stats.career.reputation = 100.0;
        submit_to_journal(&mut state, &shady).unwrap();
        review_action(&mut state, ReviewDecision::GiveUp, &shady).unwrap();
        assert!(
            (state.stats.career.reputation - (100.0 + PREDATORY_REP_PENALTY)).abs() < f64::EPSILON
        );
    }

    #[test]
    fn displayed_odds_are_monotone_in_quality() {
        let phys_b = journal("phys_b");
        let mut last = -1.0;
        for potential in [40.0, 55.0, 70.0, 85.0, 100.0] {
            let state = ready_state(potential, 50.0);
            let percent = acceptance_percent(&state, &phys_b);
            assert!(percent >= last);
            last = percent;
        }
    }

    #[test]
    fn displayed_odds_hit_the_documented_pins() {
        // Under the desk-reject bar: flat zero.
        let state = ready_state(40.0, 30.0);
        assert!((acceptance_percent(&state, &journal("phys_b"))).abs() < f64::EPSILON);

        // At or over the accept bar: near-certain, never 100.
        let state = ready_state(100.0, 100.0);
        assert!(
            (acceptance_percent(&state, &journal("phys_b")) - DISPLAY_CHANCE_SURE).abs()
                < f64::EPSILON
        );

        // Fit requirements unmet: flat long-shot odds.
        let state = ready_state(100.0, 40.0);
        assert!(
            (acceptance_percent(&state, &journal("j_novel_mat")) - DISPLAY_CHANCE_MISFIT).abs()
                < f64::EPSILON
        );
    }
}
