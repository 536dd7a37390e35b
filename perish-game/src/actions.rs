//! Discrete player actions: the generic catalog, archetype-exclusive entries,
//! and the resolver that validates and applies a chosen action.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    BUY_RESULTS_COST, BUY_RESULTS_PROGRESS, FABRICATION_PROGRESS, LOAN_PRINCIPAL, LOAN_TERM_WEEKS,
    LOG_ACTION_PREFIX, LOG_ACTION_TOO_BROKE, LOG_ACTION_TOO_TIRED, LOG_DATA_MASSAGED,
    LOG_GRANT_BUSY, LOG_GRANT_STARTED, LOG_LOAN_REPAID, LOG_LOAN_TAKEN, LOG_MEETING_HELD,
    LOG_MEETING_UNPREPARED,
    LOG_PROJECT_BUSY, LOG_RESULTS_BOUGHT, MEETING_PREP_REQUIRED_RATIO, MEETING_REL_BONUS, PATRON_REL_GAIN,
    PUSH_FUNDING_BASE_SANITY, PUSH_FUNDING_BASE_STRESS, PUSH_FUNDING_MIN_COST,
    PUSH_FUNDING_SKILL_DIVISOR, SCALED_ACTION_BASE_ENERGY, SCALED_ACTION_DIVISOR,
    SCALED_ACTION_MIN_ENERGY,
};
use crate::flavor::FlavorProvider;
use crate::research;
use crate::session::CommandError;
use crate::state::GameState;
use crate::stats::{Career, Physiological, Skills, StatDelta, Talents, apply_delta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    #[default]
    Life,
    Academics,
    Social,
    SelfImprovement,
}

impl ActionCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Life => "life",
            Self::Academics => "academics",
            Self::Social => "social",
            Self::SelfImprovement => "self_improvement",
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Up-front price of an action. Stress here is a cost (it goes *up*).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ActionCost {
    #[serde(default)]
    pub energy: f64,
    #[serde(default)]
    pub funds: i64,
    #[serde(default)]
    pub stress: f64,
}

/// Non-generic action semantics: cost transforms and side effects that a
/// plain cost/effect pair cannot express. Tagged so the resolver never
/// branches on action id strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActionSpecial {
    #[default]
    None,
    /// Start a grant application; presentation softens the cost, and a
    /// wealthy patron supervisor flips the relationship hit into a gain.
    FundingPush,
    /// Borrow a fixed principal, or repay the outstanding debt in full when
    /// one exists. Same desk, branch on current debt.
    LoanDesk,
    /// Formal supervisor meeting; gated on preparation, resets the pressure
    /// gauges on success.
    SupervisorMeeting,
    /// Emergency sync whose energy cost shrinks with resilience and
    /// presentation.
    CrisisSync,
    /// Fabricate results: energy cost shrinks with creativity and logic,
    /// active project gains progress.
    FabricateData,
    /// Pay lab money for outsourced data; active project gains progress.
    PurchasedResults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameAction {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: ActionCategory,
    #[serde(default)]
    pub cost: ActionCost,
    #[serde(default)]
    pub effect: StatDelta,
    /// Probability that performing this action sparks a research idea.
    #[serde(default)]
    pub idea_chance: f64,
    #[serde(default)]
    pub special: ActionSpecial,
}

impl GameAction {
    fn plain(
        id: &str,
        label: &str,
        description: &str,
        category: ActionCategory,
        cost: ActionCost,
        effect: StatDelta,
    ) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            category,
            cost,
            effect,
            idea_chance: 0.0,
            special: ActionSpecial::None,
        }
    }
}

/// Container for a loadable action table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ActionList {
    pub actions: Vec<GameAction>,
}

impl ActionList {
    /// Parse an action table from JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when the payload is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_ACTIONS.clone()
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&GameAction> {
        self.actions.iter().find(|a| a.id == id)
    }
}

static BUILTIN_ACTIONS: Lazy<ActionList> = Lazy::new(|| ActionList {
    actions: vec![
        GameAction::plain(
            "sleep_in",
            "Sleep In",
            "Catch up on sleep.",
            ActionCategory::Life,
            ActionCost::default(),
            StatDelta {
                energy: 30.0,
                physiological: Physiological {
                    stress: -10.0,
                    health: 2.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        GameAction::plain(
            "exercise",
            "Gym / Run",
            "Sweat out the anxiety.",
            ActionCategory::Life,
            ActionCost {
                energy: 15.0,
                ..ActionCost::default()
            },
            StatDelta {
                physiological: Physiological {
                    stress: -20.0,
                    sanity: 5.0,
                    health: 5.0,
                },
                talents: Talents {
                    focus: 2.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
        ),
        GameAction::plain(
            "good_meal",
            "Fancy Dinner",
            "Eat something that is not instant noodles.",
            ActionCategory::Life,
            ActionCost {
                funds: 40,
                ..ActionCost::default()
            },
            StatDelta {
                energy: 10.0,
                physiological: Physiological {
                    stress: -15.0,
                    health: 1.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        GameAction::plain(
            "deep_clean",
            "Deep Clean",
            "Organize your chaos.",
            ActionCategory::Life,
            ActionCost {
                energy: 10.0,
                ..ActionCost::default()
            },
            StatDelta {
                physiological: Physiological {
                    sanity: 10.0,
                    stress: -5.0,
                    ..Physiological::default()
                },
                skills: Skills {
                    time_management: 2.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
        ),
        GameAction {
            id: "loan_desk".to_string(),
            label: "Student Loan".to_string(),
            description: "Borrow to survive, or repay what you owe.".to_string(),
            category: ActionCategory::Life,
            cost: ActionCost {
                energy: 10.0,
                ..ActionCost::default()
            },
            effect: StatDelta::default(),
            idea_chance: 0.0,
            special: ActionSpecial::LoanDesk,
        },
        GameAction::plain(
            "video_games",
            "Video Games",
            "Escapism at its finest.",
            ActionCategory::Life,
            ActionCost {
                energy: 5.0,
                ..ActionCost::default()
            },
            StatDelta {
                physiological: Physiological {
                    stress: -15.0,
                    sanity: 5.0,
                    ..Physiological::default()
                },
                talents: Talents {
                    logic: 1.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
        ),
        GameAction::plain(
            "space_out",
            "Space Out",
            "Stare at the wall.",
            ActionCategory::Life,
            ActionCost::default(),
            StatDelta {
                energy: 5.0,
                physiological: Physiological {
                    stress: -5.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        GameAction {
            id: "push_funding".to_string(),
            label: "Demand Funding".to_string(),
            description: "Force your advisor to write a grant.".to_string(),
            category: ActionCategory::Academics,
            cost: ActionCost {
                energy: 30.0,
                stress: PUSH_FUNDING_BASE_STRESS,
                ..ActionCost::default()
            },
            effect: StatDelta {
                physiological: Physiological {
                    sanity: -PUSH_FUNDING_BASE_SANITY,
                    ..Physiological::default()
                },
                career: Career {
                    supervisor_rel: -5.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            idea_chance: 0.0,
            special: ActionSpecial::FundingPush,
        },
        GameAction::plain(
            "ta_job",
            "TA Job",
            "Teach undergrads for cash.",
            ActionCategory::Academics,
            ActionCost {
                energy: 20.0,
                stress: 5.0,
                ..ActionCost::default()
            },
            StatDelta {
                funds: 300,
                physiological: Physiological {
                    stress: 5.0,
                    ..Physiological::default()
                },
                skills: Skills {
                    presentation: 3.0,
                    time_management: 1.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
        ),
        GameAction {
            idea_chance: 0.35,
            ..GameAction::plain(
                "read_papers",
                "Read Literature",
                "Keep up with the state of the art.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 10.0,
                    stress: 2.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    skills: Skills {
                        reading: 5.0,
                        analysis: 2.0,
                        ..Skills::default()
                    },
                    talents: Talents {
                        logic: 1.0,
                        ..Talents::default()
                    },
                    career: Career {
                        meeting_preparation: 5.0,
                        ..Career::default()
                    },
                    ..StatDelta::default()
                },
            )
        },
        GameAction {
            idea_chance: 0.50,
            ..GameAction::plain(
                "dept_seminar",
                "Dept Seminar",
                "Free pizza and networking.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 5.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    energy: 5.0,
                    skills: Skills {
                        analysis: 2.0,
                        ..Skills::default()
                    },
                    career: Career {
                        reputation: 1.0,
                        meeting_preparation: 2.0,
                        ..Career::default()
                    },
                    ..StatDelta::default()
                },
            )
        },
        GameAction {
            id: "meet_supervisor".to_string(),
            label: "Meet Advisor".to_string(),
            description: "Initiate a meeting. Requires preparation.".to_string(),
            category: ActionCategory::Academics,
            cost: ActionCost {
                energy: 15.0,
                stress: 10.0,
                ..ActionCost::default()
            },
            effect: StatDelta {
                physiological: Physiological {
                    stress: 10.0,
                    ..Physiological::default()
                },
                skills: Skills {
                    time_management: 2.0,
                    ..Skills::default()
                },
                career: Career {
                    supervisor_rel: 10.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            idea_chance: 0.30,
            special: ActionSpecial::SupervisorMeeting,
        },
        GameAction::plain(
            "touch_grass",
            "Touch Grass",
            "Go outside. Remember nature?",
            ActionCategory::Social,
            ActionCost {
                energy: 5.0,
                ..ActionCost::default()
            },
            StatDelta {
                physiological: Physiological {
                    sanity: 15.0,
                    stress: -5.0,
                    health: 2.0,
                },
                ..StatDelta::default()
            },
        ),
        GameAction::plain(
            "lab_drinks",
            "Lab Drinks",
            "Complain about reviewers together.",
            ActionCategory::Social,
            ActionCost {
                energy: 10.0,
                funds: 50,
                ..ActionCost::default()
            },
            StatDelta {
                physiological: Physiological {
                    stress: -20.0,
                    health: -5.0,
                    ..Physiological::default()
                },
                career: Career {
                    supervisor_rel: 5.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
        ),
        GameAction::plain(
            "call_parents",
            "Call Parents",
            "Assure them you are eating.",
            ActionCategory::Social,
            ActionCost {
                energy: 5.0,
                ..ActionCost::default()
            },
            StatDelta {
                funds: 50,
                physiological: Physiological {
                    sanity: 5.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        GameAction::plain(
            "therapy",
            "Therapy",
            "Professional help is expensive but good.",
            ActionCategory::SelfImprovement,
            ActionCost {
                funds: 120,
                ..ActionCost::default()
            },
            StatDelta {
                physiological: Physiological {
                    sanity: 25.0,
                    stress: -10.0,
                    ..Physiological::default()
                },
                talents: Talents {
                    resilience: 5.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
        ),
        GameAction {
            idea_chance: 0.20,
            ..GameAction::plain(
                "upskill",
                "Upskill",
                "Learn a tool to procrastinate on research.",
                ActionCategory::SelfImprovement,
                ActionCost {
                    energy: 15.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    skills: Skills {
                        experiment: 4.0,
                        writing: 4.0,
                        ..Skills::default()
                    },
                    talents: Talents {
                        creativity: 2.0,
                        ..Talents::default()
                    },
                    ..StatDelta::default()
                },
            )
        },
        GameAction::plain(
            "hobby_night",
            "Hobby",
            "Do something you actually love.",
            ActionCategory::SelfImprovement,
            ActionCost {
                energy: 10.0,
                funds: 20,
                ..ActionCost::default()
            },
            StatDelta {
                physiological: Physiological {
                    sanity: 10.0,
                    stress: -10.0,
                    ..Physiological::default()
                },
                talents: Talents {
                    creativity: 3.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
        ),
    ],
});

fn scaled_energy_cost(a: f64, b: f64) -> f64 {
    let reduction = ((a + b) / SCALED_ACTION_DIVISOR).floor();
    (SCALED_ACTION_BASE_ENERGY - reduction).max(SCALED_ACTION_MIN_ENERGY)
}

/// Validate and apply a chosen action. Rejections leave the state untouched
/// apart from a user-visible log line.
///
/// # Errors
///
/// Returns a [`CommandError`] when a gate fails or a cost exceeds the
/// available resources.
pub fn perform_action<F: FlavorProvider>(
    state: &mut GameState,
    action: &GameAction,
    flavor: &F,
) -> Result<(), CommandError> {
    // Gates that must hold before any mutation.
    match action.special {
        ActionSpecial::SupervisorMeeting => {
            let required =
                state.caps.career.meeting_preparation * MEETING_PREP_REQUIRED_RATIO;
            if state.stats.career.meeting_preparation < required {
                state.push_log(LOG_MEETING_UNPREPARED);
                return Err(CommandError::Underprepared);
            }
        }
        ActionSpecial::PurchasedResults => {
            if state.active_project.is_none() {
                state.push_log(LOG_PROJECT_BUSY);
                return Err(CommandError::NoActiveProject);
            }
            let funding = state.supervisor.as_ref().map_or(0, |s| s.funding);
            if funding < BUY_RESULTS_COST {
                state.push_log(LOG_ACTION_TOO_BROKE);
                return Err(CommandError::InsufficientLabFunding);
            }
        }
        ActionSpecial::FabricateData => {
            if state.active_project.is_none() {
                state.push_log(LOG_PROJECT_BUSY);
                return Err(CommandError::NoActiveProject);
            }
        }
        ActionSpecial::FundingPush => {
            let in_flight = state
                .supervisor
                .as_ref()
                .is_some_and(|s| s.grant_progress.is_some());
            if in_flight {
                state.push_log(LOG_GRANT_BUSY);
                return Err(CommandError::GrantInFlight);
            }
        }
        _ => {}
    }

    let mut cost = action.cost;
    let mut effect = action.effect;
    let mut repaying_loan = false;

    match action.special {
        ActionSpecial::FundingPush => {
            if state.wealthy_patron() {
                cost.energy /= 2.0;
                effect.career.supervisor_rel = PATRON_REL_GAIN;
            } else {
                let reduction =
                    (state.stats.skills.presentation / PUSH_FUNDING_SKILL_DIVISOR).floor();
                cost.stress = (PUSH_FUNDING_BASE_STRESS - reduction).max(PUSH_FUNDING_MIN_COST);
                effect.physiological.sanity =
                    -((PUSH_FUNDING_BASE_SANITY - reduction).max(PUSH_FUNDING_MIN_COST));
            }
        }
        ActionSpecial::LoanDesk => {
            if state.player_debt > 0 {
                repaying_loan = true;
                cost = ActionCost {
                    energy: 10.0,
                    funds: state.player_debt,
                    stress: 0.0,
                };
                effect = StatDelta {
                    physiological: Physiological {
                        stress: -15.0,
                        sanity: 15.0,
                        ..Physiological::default()
                    },
                    ..StatDelta::default()
                };
            } else {
                cost = ActionCost {
                    energy: 10.0,
                    funds: 0,
                    stress: 20.0,
                };
                effect = StatDelta {
                    funds: LOAN_PRINCIPAL,
                    physiological: Physiological {
                        sanity: -20.0,
                        ..Physiological::default()
                    },
                    ..StatDelta::default()
                };
            }
        }
        ActionSpecial::CrisisSync => {
            cost.energy = scaled_energy_cost(
                state.stats.talents.resilience,
                state.stats.skills.presentation,
            );
        }
        ActionSpecial::FabricateData => {
            cost.energy =
                scaled_energy_cost(state.stats.talents.creativity, state.stats.talents.logic);
        }
        _ => {}
    }

    if state.stats.energy < cost.energy {
        state.push_log(LOG_ACTION_TOO_TIRED);
        return Err(CommandError::InsufficientEnergy);
    }
    if state.stats.funds < cost.funds {
        state.push_log(LOG_ACTION_TOO_BROKE);
        return Err(CommandError::InsufficientFunds);
    }

    let debit = StatDelta {
        energy: -cost.energy,
        funds: -cost.funds,
        physiological: Physiological {
            stress: cost.stress,
            ..Physiological::default()
        },
        ..StatDelta::default()
    };
    let caps = state.caps;
    apply_delta(&mut state.stats, &caps, &debit);
    apply_delta(&mut state.stats, &caps, &effect);

    match action.special {
        ActionSpecial::SupervisorMeeting => {
            state.stats.career.meeting_expectation = 0.0;
            state.stats.career.meeting_preparation = 0.0;
            let bonus = StatDelta {
                career: Career {
                    supervisor_rel: MEETING_REL_BONUS,
                    ..Career::default()
                },
                ..StatDelta::default()
            };
            apply_delta(&mut state.stats, &caps, &bonus);
            state.push_log(LOG_MEETING_HELD);
        }
        ActionSpecial::FundingPush => {
            if let Some(sup) = state.supervisor.as_mut() {
                sup.grant_progress = Some(0.0);
            }
            state.push_log(LOG_GRANT_STARTED);
        }
        ActionSpecial::LoanDesk => {
            if repaying_loan {
                state.player_debt = 0;
                state.loan_deadline = None;
                state.push_log(LOG_LOAN_REPAID);
            } else {
                state.player_debt = LOAN_PRINCIPAL;
                state.loan_deadline = Some(state.turn + LOAN_TERM_WEEKS);
                state.push_log(LOG_LOAN_TAKEN);
            }
        }
        ActionSpecial::PurchasedResults => {
            if let Some(sup) = state.supervisor.as_mut() {
                sup.funding -= BUY_RESULTS_COST;
            }
            state.add_project_progress(BUY_RESULTS_PROGRESS);
            state.push_log(LOG_RESULTS_BOUGHT);
        }
        ActionSpecial::FabricateData => {
            state.add_project_progress(FABRICATION_PROGRESS);
            state.push_log(LOG_DATA_MASSAGED);
        }
        ActionSpecial::None | ActionSpecial::CrisisSync => {
            state.push_log(&format!("{LOG_ACTION_PREFIX}{}", action.id));
        }
    }

    if action.idea_chance > 0.0 {
        research::maybe_spark_idea(state, flavor, action.idea_chance);
    }

    state.check_game_over();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::LocalFlavor;
    use crate::state::GameState;

    fn playing_state() -> GameState {
        GameState::test_run()
    }

    #[test]
    fn builtin_catalog_has_unique_ids() {
        let list = ActionList::builtin();
        assert!(!list.actions.is_empty());
        for (i, a) in list.actions.iter().enumerate() {
            assert!(
                !list.actions[i + 1..].iter().any(|b| b.id == a.id),
                "duplicate action id {}",
                a.id
            );
        }
    }

    #[test]
    fn insufficient_energy_is_a_clean_noop() {
        let mut state = playing_state();
        state.stats.energy = 1.0;
        let before_stats = state.stats;
        let before_logs = state.logs.len();

        let action = ActionList::builtin().get_by_id("exercise").cloned().unwrap();
        let err = perform_action(&mut state, &action, &LocalFlavor).unwrap_err();
        assert_eq!(err, CommandError::InsufficientEnergy);
        assert_eq!(state.stats, before_stats);
        assert_eq!(state.logs.len(), before_logs + 1);
    }

    #[test]
    fn loan_desk_borrows_then_repays() {
        let mut state = playing_state();
        let action = ActionList::builtin().get_by_id("loan_desk").cloned().unwrap();

        let funds_before = state.stats.funds;
        perform_action(&mut state, &action, &LocalFlavor).unwrap();
        assert_eq!(state.player_debt, LOAN_PRINCIPAL);
        assert_eq!(state.loan_deadline, Some(state.turn + LOAN_TERM_WEEKS));
        assert_eq!(state.stats.funds, funds_before + LOAN_PRINCIPAL);

        // Second invocation repays in full instead of stacking a second loan.
        let funds_with_loan = state.stats.funds;
        perform_action(&mut state, &action, &LocalFlavor).unwrap();
        assert_eq!(state.player_debt, 0);
        assert_eq!(state.loan_deadline, None);
        assert_eq!(state.stats.funds, funds_with_loan - LOAN_PRINCIPAL);
    }

    #[test]
    fn meeting_requires_preparation() {
        let mut state = playing_state();
        state.stats.career.meeting_preparation = 0.0;
        let action = ActionList::builtin()
            .get_by_id("meet_supervisor")
            .cloned()
            .unwrap();
        let err = perform_action(&mut state, &action, &LocalFlavor).unwrap_err();
        assert_eq!(err, CommandError::Underprepared);
    }

    #[test]
    fn meeting_resets_pressure_gauges() {
        let mut state = playing_state();
        state.stats.career.meeting_preparation = state.caps.career.meeting_preparation;
        state.stats.career.meeting_expectation = 60.0;
        let rel_before = state.stats.career.supervisor_rel;

        let action = ActionList::builtin()
            .get_by_id("meet_supervisor")
            .cloned()
            .unwrap();
        perform_action(&mut state, &action, &LocalFlavor).unwrap();
        assert!(state.stats.career.meeting_expectation.abs() < f64::EPSILON);
        assert!(state.stats.career.meeting_preparation.abs() < f64::EPSILON);
        // +10 from the action effect plus the +10 meeting bonus.
        assert!(state.stats.career.supervisor_rel > rel_before);
    }

    #[test]
    fn funding_push_scales_with_presentation() {
        let mut state = playing_state();
        state.stats.skills.presentation = 50.0;
        let action = ActionList::builtin().get_by_id("push_funding").cloned().unwrap();
        let stress_before = state.stats.physiological.stress;

        perform_action(&mut state, &action, &LocalFlavor).unwrap();
        // reduction = floor(50/5) = 10, so stress cost is max(5, 20-10) = 10.
        assert!((state.stats.physiological.stress - (stress_before + 10.0)).abs() < f64::EPSILON);
        assert_eq!(
            state.supervisor.as_ref().unwrap().grant_progress,
            Some(0.0)
        );
    }

    #[test]
    fn patron_halves_push_cost_and_flips_relationship() {
        let mut state = playing_state();
        state.make_patron_supervisor();
        let rel_before = state.stats.career.supervisor_rel;
        let energy_before = state.stats.energy;

        let action = ActionList::builtin().get_by_id("push_funding").cloned().unwrap();
        perform_action(&mut state, &action, &LocalFlavor).unwrap();

        assert!((energy_before - state.stats.energy - 15.0).abs() < f64::EPSILON);
        assert!(state.stats.career.supervisor_rel > rel_before);
    }

    #[test]
    fn actions_round_trip_through_json() {
        let list = ActionList::builtin();
        let json = serde_json::to_string(&list).unwrap();
        let back = ActionList::from_json(&json).unwrap();
        assert_eq!(list, back);
    }
}
