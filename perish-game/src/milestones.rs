//! Mandatory program milestones: the confirmation document, the mid-candidature
//! review, and the committee that rules on them.

use serde::{Deserialize, Serialize};

use crate::constants::{
    COMMITTEE_BASE_SCORE, COMMITTEE_CITATION_WEIGHT, COMMITTEE_PASS_SCORE, COMMITTEE_REL_WEIGHT,
    COMMITTEE_REP_WEIGHT, LOG_MILESTONE_FAILED, LOG_MILESTONE_PASSED, LOG_MILESTONE_THROTTLED,
    LOG_MILESTONE_WORK, MILESTONE_BASE_RATE, MILESTONE_COMPLETE_RATIO, MILESTONE_PASS_REPUTATION,
    MILESTONE_PASS_STRESS_RELIEF, MILESTONE_PREP_GAIN, MILESTONE_STRESS,
    MILESTONE_THROTTLED_PROGRESS, MILESTONE_WRITING_GAIN,
};
use crate::session::CommandError;
use crate::state::{GamePhase, GameState};
use crate::stats::{Career, Physiological, Skills, StatDelta, apply_delta};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandatoryTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub progress: f64,
    pub total_effort: f64,
    /// Week at which the committee convenes whether or not the work is done.
    pub deadline: u32,
}

impl MandatoryTask {
    #[must_use]
    pub fn confirmation() -> Self {
        Self {
            id: "confirmation".to_string(),
            title: "Confirmation Document".to_string(),
            description: "Prove to the committee that your project deserves to exist.".to_string(),
            progress: 0.0,
            total_effort: 300.0,
            deadline: 52,
        }
    }

    #[must_use]
    pub fn second_year_review() -> Self {
        Self {
            id: "year_2_review".to_string(),
            title: "2nd Year Review".to_string(),
            description: "Mid-candidature review. Ensure your research is on track.".to_string(),
            progress: 0.0,
            total_effort: 200.0,
            deadline: 104,
        }
    }

    #[must_use]
    pub fn is_effectively_complete(&self) -> bool {
        self.progress >= self.total_effort * MILESTONE_COMPLETE_RATIO
    }

    fn next(&self) -> Option<Self> {
        if self.id == "confirmation" {
            Some(Self::second_year_review())
        } else {
            None
        }
    }
}

/// Pour all remaining energy into milestone writing. Writing and focus
/// multiply the yield; a lab funding crisis throttles the week to a token
/// amount.
///
/// # Errors
///
/// Returns [`CommandError::NoMilestone`] when no task is pending.
pub fn work_on_milestone(state: &mut GameState) -> Result<(), CommandError> {
    if state.milestone.is_none() {
        return Err(CommandError::NoMilestone);
    }
    // Nothing to pour in: no progress, no side effects, no log line.
    if state.stats.energy <= 0.0 {
        return Ok(());
    }

    let energy = state.stats.energy;
    let writing = state.stats.skills.writing;
    let focus = state.stats.talents.focus;
    let gained = if state.funding_crisis {
        state.push_log(LOG_MILESTONE_THROTTLED);
        MILESTONE_THROTTLED_PROGRESS
    } else {
        energy * MILESTONE_BASE_RATE * (1.0 + writing / 100.0) * (1.0 + focus / 100.0)
    };

    if let Some(task) = state.milestone.as_mut() {
        task.progress = (task.progress + gained).min(task.total_effort);
    }
    state.stats.energy = 0.0;

    let caps = state.caps;
    let toll = StatDelta {
        physiological: Physiological {
            stress: MILESTONE_STRESS,
            ..Physiological::default()
        },
        skills: Skills {
            writing: MILESTONE_WRITING_GAIN,
            ..Skills::default()
        },
        career: Career {
            meeting_preparation: MILESTONE_PREP_GAIN,
            ..Career::default()
        },
        ..StatDelta::default()
    };
    apply_delta(&mut state.stats, &caps, &toll);
    state.push_log(LOG_MILESTONE_WORK);
    state.check_game_over();
    Ok(())
}

/// The committee's score for the pending milestone.
#[must_use]
pub fn committee_score(state: &GameState) -> f64 {
    COMMITTEE_BASE_SCORE
        + state.stats.career.supervisor_rel * COMMITTEE_REL_WEIGHT
        + state.stats.career.reputation * COMMITTEE_REP_WEIGHT
        + state.metrics().total_citations * COMMITTEE_CITATION_WEIGHT
}

/// Resolve the committee hearing reached at the milestone deadline. Passing
/// advances to the next milestone (or clears the slate); failing expels.
///
/// # Errors
///
/// Returns [`CommandError::NoMilestone`] outside a review, or
/// [`CommandError::WrongPhase`] before the deadline hearing.
pub fn resolve_review(state: &mut GameState) -> Result<bool, CommandError> {
    if state.phase != GamePhase::ConfirmationReview {
        return Err(CommandError::WrongPhase);
    }
    let Some(task) = state.milestone.clone() else {
        return Err(CommandError::NoMilestone);
    };

    let passed = task.is_effectively_complete() && committee_score(state) >= COMMITTEE_PASS_SCORE;
    if passed {
        let caps = state.caps;
        let reward = StatDelta {
            physiological: Physiological {
                stress: -MILESTONE_PASS_STRESS_RELIEF,
                ..Physiological::default()
            },
            career: Career {
                reputation: MILESTONE_PASS_REPUTATION,
                ..Career::default()
            },
            ..StatDelta::default()
        };
        apply_delta(&mut state.stats, &caps, &reward);
        state.milestone = task.next();
        state.phase = GamePhase::Playing;
        state.push_log(LOG_MILESTONE_PASSED);
    } else {
        state.push_log(LOG_MILESTONE_FAILED);
        state.expel();
    }
    Ok(passed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Ending;

    #[test]
    fn milestone_work_scales_with_writing_and_focus() {
        let mut state = GameState::test_run();
        state.stats.energy = 100.0;
        state.stats.skills.writing = 50.0;
        state.stats.talents.focus = 20.0;

        work_on_milestone(&mut state).unwrap();
        let task = state.milestone.as_ref().unwrap();
        // 100 * 0.1 * 1.5 * 1.2 = 18.
        assert!((task.progress - 18.0).abs() < f64::EPSILON);
        assert!(state.stats.energy.abs() < f64::EPSILON);
    }

    #[test]
    fn running_on_empty_does_nothing_at_all() {
        let mut state = GameState::test_run();
        state.stats.energy = 0.0;
        let stats_before = state.stats;
        let logs_before = state.logs.len();

        work_on_milestone(&mut state).unwrap();
        assert_eq!(state.stats, stats_before);
        assert_eq!(state.logs.len(), logs_before);
        assert!(state.milestone.as_ref().unwrap().progress.abs() < f64::EPSILON);

        // The throttled path is gated the same way.
        state.funding_crisis = true;
        work_on_milestone(&mut state).unwrap();
        assert!(state.milestone.as_ref().unwrap().progress.abs() < f64::EPSILON);
    }

    #[test]
    fn funding_crisis_throttles_milestone_work() {
        let mut state = GameState::test_run();
        state.funding_crisis = true;
        state.stats.energy = 100.0;

        work_on_milestone(&mut state).unwrap();
        assert!(
            (state.milestone.as_ref().unwrap().progress - MILESTONE_THROTTLED_PROGRESS).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn committee_passes_on_finished_work_and_standing() {
        let mut state = GameState::test_run();
        state.phase = GamePhase::ConfirmationReview;
        if let Some(task) = state.milestone.as_mut() {
            task.progress = task.total_effort;
        }
        state.stats.career.supervisor_rel = 60.0;
        state.stats.career.reputation = 50.0;
        // score = 40 + 30 + 10 = 80 >= 75.
        assert!(resolve_review(&mut state).unwrap());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.milestone.as_ref().unwrap().id, "year_2_review");
        assert!((state.stats.career.reputation - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unfinished_document_means_expulsion() {
        let mut state = GameState::test_run();
        state.phase = GamePhase::ConfirmationReview;
        state.stats.career.supervisor_rel = 100.0;
        state.stats.career.reputation = 100.0;

        assert!(!resolve_review(&mut state).unwrap());
        assert_eq!(state.ending, Some(Ending::Expelled));
    }

    #[test]
    fn final_milestone_clears_the_slate() {
        let mut state = GameState::test_run();
        state.milestone = Some(MandatoryTask::second_year_review());
        state.phase = GamePhase::ConfirmationReview;
        if let Some(task) = state.milestone.as_mut() {
            task.progress = task.total_effort;
        }
        state.stats.career.supervisor_rel = 80.0;
        state.stats.career.reputation = 100.0;

        assert!(resolve_review(&mut state).unwrap());
        assert!(state.milestone.is_none());
    }
}
