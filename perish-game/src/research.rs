//! The research pipeline: sparking ideas, developing one into a project, and
//! the weekly grind of experiments.

use crate::constants::{
    DEVELOP_IDEA_ENERGY, DEVELOP_IDEA_STRESS, HIGH_RESOURCE_FUNDING_FLOOR,
    HIGH_RESOURCE_THRESHOLD, IDEA_BACKLOG_CAP, LOG_IDEA_BACKLOG_FULL, LOG_IDEA_SPARK,
    LOG_PROJECT_BUSY, LOG_PROJECT_DENIED_FUNDING, LOG_PROJECT_STARTED, LOG_RESEARCH_PROGRESS,
    LOG_RESEARCH_SETBACK, LOG_RESEARCH_THROTTLED, MILESTONE_THROTTLED_PROGRESS, PROGRESS_PREP_BASE,
    PROGRESS_SKILL_GAIN, PROGRESS_STRESS, QUALITY_CEILING, QUALITY_FLOOR, RESEARCH_BASE_ENERGY,
    RESEARCH_BASE_PROGRESS, RESEARCH_FAILURE_CEILING, RESEARCH_FAILURE_FLOOR,
    RESEARCH_MIN_ENERGY, RESEARCH_RESOURCE_COST_SCALE, RESEARCH_TIME_MGMT_DISCOUNT,
    REVISION_PROGRESS_BOOST, REVISION_RISK_FACTOR, SETBACK_RESILIENCE, SETBACK_SANITY,
    SETBACK_STRESS,
};
use crate::flavor::{FlavorProvider, topic_or_fallback};
use crate::session::CommandError;
use crate::state::{GameState, ProjectStage, ResearchIdea, ResearchProject};
use crate::stats::{Career, Physiological, Skills, StatDelta, Talents, apply_delta};

/// Draw from `[ceiling - span, ceiling)`; the stat-derived value is the best
/// case, not the midpoint.
fn attribute(ceiling: f64, span: f64, state: &mut GameState) -> f64 {
    let lo = (ceiling - span).max(1.0);
    state
        .roll_range(lo, ceiling.max(lo))
        .clamp(1.0, 100.0)
        .floor()
}

/// Roll a fresh idea from the player's current talents and the advisor's
/// standing, with flavor text from the provider.
pub fn generate_idea<F: FlavorProvider>(state: &mut GameState, flavor: &F) -> ResearchIdea {
    let creativity = state.stats.talents.creativity;
    let focus = state.stats.talents.focus;
    let logic = state.stats.talents.logic;
    let presentation = state.stats.skills.presentation;
    let sup_rep = state.supervisor.map_or(0.0, |s| s.reputation);

    let novelty = attribute(25.0 + creativity * 0.75, 20.0, state);
    let feasibility = attribute(30.0 + focus * 0.6, 20.0, state);
    let potential = attribute(20.0 + logic * 0.8 + sup_rep * 0.1, 25.0, state);
    let attraction = attribute(50.0 + presentation * 0.5, 20.0, state);
    let resources = state.roll_range(10.0, 90.0).floor();
    let difficulty = (novelty * 0.4 + resources * 0.3 + (100.0 - feasibility) * 0.3)
        .clamp(1.0, 100.0)
        .floor();

    let id = state.next_idea_id;
    state.next_idea_id += 1;
    let topic = topic_or_fallback(flavor, "condensed matter", "weekly inspiration");

    ResearchIdea {
        id,
        title: topic.title,
        description: topic.description,
        novelty,
        feasibility,
        potential,
        resources,
        attraction,
        difficulty,
    }
}

/// Chance-gated idea spark used by actions and events. A full backlog eats
/// the spark.
pub fn maybe_spark_idea<F: FlavorProvider>(state: &mut GameState, flavor: &F, chance: f64) {
    if state.roll_unit() >= chance {
        return;
    }
    if state.ideas.len() >= IDEA_BACKLOG_CAP {
        state.push_log(LOG_IDEA_BACKLOG_FULL);
        return;
    }
    let idea = generate_idea(state, flavor);
    state.push_log(&format!("{LOG_IDEA_SPARK}:{}", idea.title));
    state.ideas.push(idea);
}

/// Commit to a backlog idea, turning it into the active project.
///
/// # Errors
///
/// Rejects when a project is already running, the idea is unknown, energy is
/// short, or an expensive idea exceeds the lab's means.
pub fn develop_idea(state: &mut GameState, idea_id: u32) -> Result<(), CommandError> {
    if state.active_project.is_some() {
        state.push_log(LOG_PROJECT_BUSY);
        return Err(CommandError::ProjectInProgress);
    }
    let Some(index) = state.ideas.iter().position(|i| i.id == idea_id) else {
        return Err(CommandError::UnknownId(idea_id.to_string()));
    };
    if state.stats.energy < DEVELOP_IDEA_ENERGY {
        return Err(CommandError::InsufficientEnergy);
    }

    let funding = state.supervisor.as_ref().map_or(0, |s| s.funding);
    if state.ideas[index].resources > HIGH_RESOURCE_THRESHOLD
        && funding < HIGH_RESOURCE_FUNDING_FLOOR
    {
        state.push_log(LOG_PROJECT_DENIED_FUNDING);
        return Err(CommandError::InsufficientLabFunding);
    }

    let idea = state.ideas.remove(index);
    let caps = state.caps;
    let toll = StatDelta {
        energy: -DEVELOP_IDEA_ENERGY,
        physiological: Physiological {
            stress: DEVELOP_IDEA_STRESS,
            ..Physiological::default()
        },
        ..StatDelta::default()
    };
    apply_delta(&mut state.stats, &caps, &toll);

    state.push_log(&format!("{LOG_PROJECT_STARTED}:{}", idea.title));
    state.active_project = Some(ResearchProject {
        idea,
        progress: 0.0,
        failure_count: 0.0,
        stage: ProjectStage::Research,
    });
    state.check_game_over();
    Ok(())
}

fn research_energy_cost(state: &GameState, resources: f64) -> f64 {
    let time_management = state.stats.skills.time_management;
    (RESEARCH_BASE_ENERGY + resources * RESEARCH_RESOURCE_COST_SCALE
        - time_management * RESEARCH_TIME_MGMT_DISCOUNT)
        .floor()
        .max(RESEARCH_MIN_ENERGY)
}

/// One week of experiments on the active project. May fail outright; risk
/// falls with feasibility and analysis skill, and revisions run at half risk
/// but yield faster progress.
///
/// # Errors
///
/// Rejects without an active project or with insufficient energy.
pub fn conduct_research(state: &mut GameState) -> Result<(), CommandError> {
    let Some(project) = state.active_project.as_ref() else {
        state.push_log(LOG_PROJECT_BUSY);
        return Err(CommandError::NoActiveProject);
    };
    let idea = project.idea.clone();
    let revising = matches!(project.stage, ProjectStage::Revision { .. });

    let energy_cost = research_energy_cost(state, idea.resources);
    if state.stats.energy < energy_cost {
        return Err(CommandError::InsufficientEnergy);
    }
    let caps = state.caps;
    apply_delta(
        &mut state.stats,
        &caps,
        &StatDelta {
            energy: -energy_cost,
            ..StatDelta::default()
        },
    );

    if state.funding_crisis {
        state.add_project_progress(MILESTONE_THROTTLED_PROGRESS);
        apply_delta(
            &mut state.stats,
            &caps,
            &StatDelta {
                physiological: Physiological {
                    stress: PROGRESS_STRESS,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        );
        state.push_log(LOG_RESEARCH_THROTTLED);
        state.check_game_over();
        return Ok(());
    }

    let analysis = state.stats.skills.analysis;
    let mut risk = (idea.novelty * 0.5 + idea.difficulty * 0.2
        - idea.feasibility * 0.3
        - analysis * 0.2)
        .clamp(RESEARCH_FAILURE_FLOOR, RESEARCH_FAILURE_CEILING);
    if revising {
        risk *= REVISION_RISK_FACTOR;
    }

    if state.roll_range(0.0, 100.0) < risk {
        if let Some(project) = state.active_project.as_mut() {
            project.failure_count += 1.0;
        }
        apply_delta(
            &mut state.stats,
            &caps,
            &StatDelta {
                physiological: Physiological {
                    stress: SETBACK_STRESS,
                    sanity: SETBACK_SANITY,
                    ..Physiological::default()
                },
                talents: Talents {
                    resilience: SETBACK_RESILIENCE,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
        );
        state.push_log(LOG_RESEARCH_SETBACK);
    } else {
        let experiment = state.stats.skills.experiment;
        let logic = state.stats.talents.logic;
        let focus = state.stats.talents.focus;
        let skill_term = (experiment * 0.4 + logic * 0.3 + focus * 0.3) * 10.0
            / (idea.difficulty + idea.novelty * 0.5).max(10.0);
        let mut gained = RESEARCH_BASE_PROGRESS + skill_term + state.roll_range(0.0, 5.0);
        if revising {
            gained *= REVISION_PROGRESS_BOOST;
        }
        state.add_project_progress(gained);
        apply_delta(
            &mut state.stats,
            &caps,
            &StatDelta {
                physiological: Physiological {
                    stress: PROGRESS_STRESS,
                    ..Physiological::default()
                },
                skills: Skills {
                    experiment: PROGRESS_SKILL_GAIN,
                    analysis: PROGRESS_SKILL_GAIN,
                    ..Skills::default()
                },
                career: Career {
                    meeting_preparation: PROGRESS_PREP_BASE + focus / 10.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
        );
        state.push_log(LOG_RESEARCH_PROGRESS);
    }

    state.check_game_over();
    Ok(())
}

/// Manuscript quality when the project wraps: mostly the idea's potential,
/// sharpened by novelty and the player's writing, dulled by failed weeks.
#[must_use]
pub fn manuscript_quality(state: &GameState, project: &ResearchProject) -> f64 {
    let writing = state.stats.skills.writing;
    (project.idea.potential * 0.6 + project.idea.novelty * 0.2 + writing * 0.2
        - project.failure_count)
        .clamp(QUALITY_FLOOR, QUALITY_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::LocalFlavor;

    fn state_with_idea() -> (GameState, u32) {
        let mut state = GameState::test_run();
        let mut idea = generate_idea(&mut state, &LocalFlavor);
        idea.resources = 30.0;
        let id = idea.id;
        state.ideas.push(idea);
        (state, id)
    }

    #[test]
    fn generated_attributes_stay_in_range() {
        let mut state = GameState::test_run();
        for _ in 0..32 {
            let idea = generate_idea(&mut state, &LocalFlavor);
            for value in [
                idea.novelty,
                idea.feasibility,
                idea.potential,
                idea.attraction,
                idea.difficulty,
            ] {
                assert!((1.0..=100.0).contains(&value));
                assert!((value - value.floor()).abs() < f64::EPSILON);
            }
            assert!((10.0..90.0).contains(&idea.resources));
        }
    }

    #[test]
    fn backlog_cap_swallows_sparks() {
        let mut state = GameState::test_run();
        for _ in 0..IDEA_BACKLOG_CAP {
            let idea = generate_idea(&mut state, &LocalFlavor);
            state.ideas.push(idea);
        }
        maybe_spark_idea(&mut state, &LocalFlavor, 1.01);
        assert_eq!(state.ideas.len(), IDEA_BACKLOG_CAP);
        assert_eq!(state.logs.last().map(String::as_str), Some(LOG_IDEA_BACKLOG_FULL));
    }

    #[test]
    fn develop_requires_free_hands_and_energy() {
        let (mut state, id) = state_with_idea();
        develop_idea(&mut state, id).unwrap();
        assert!(state.active_project.is_some());
        assert!(state.ideas.is_empty());

        let spare = generate_idea(&mut state, &LocalFlavor);
        let spare_id = spare.id;
        state.ideas.push(spare);
        assert_eq!(
            develop_idea(&mut state, spare_id),
            Err(CommandError::ProjectInProgress)
        );
    }

    #[test]
    fn expensive_ideas_need_lab_funding() {
        let (mut state, id) = state_with_idea();
        if let Some(idea) = state.ideas.iter_mut().find(|i| i.id == id) {
            idea.resources = 90.0;
        }
        if let Some(sup) = state.supervisor.as_mut() {
            sup.funding = 4_999;
        }
        assert_eq!(
            develop_idea(&mut state, id),
            Err(CommandError::InsufficientLabFunding)
        );

        if let Some(sup) = state.supervisor.as_mut() {
            sup.funding = 5_000;
        }
        develop_idea(&mut state, id).unwrap();
    }

    #[test]
    fn funding_crisis_throttles_research() {
        let (mut state, id) = state_with_idea();
        develop_idea(&mut state, id).unwrap();
        state.funding_crisis = true;
        state.stats.energy = 100.0;

        conduct_research(&mut state).unwrap();
        assert!(
            (state.active_project.as_ref().unwrap().progress - 1.0).abs() < f64::EPSILON
        );
    }

    #[test]
    fn research_moves_progress_or_burns_a_failure() {
        let (mut state, id) = state_with_idea();
        develop_idea(&mut state, id).unwrap();

        for _ in 0..20 {
            state.stats.energy = 100.0;
            state.stats.physiological.stress = 10.0;
            conduct_research(&mut state).unwrap();
        }
        let project = state.active_project.as_ref().unwrap();
        assert!(project.progress > 0.0 || project.failure_count > 0.0);
        assert!(project.progress <= 100.0);
    }

    #[test]
    fn quality_rewards_potential_and_punishes_failures() {
        let (mut state, id) = state_with_idea();
        develop_idea(&mut state, id).unwrap();
        let mut project = state.active_project.clone().unwrap();
        project.idea.potential = 80.0;
        project.idea.novelty = 60.0;
        state.stats.skills.writing = 50.0;

        let clean = manuscript_quality(&state, &project);
        project.failure_count = 10.0;
        let battered = manuscript_quality(&state, &project);
        assert!((clean - battered - 10.0).abs() < f64::EPSILON);
        assert!(battered >= QUALITY_FLOOR);
    }
}
