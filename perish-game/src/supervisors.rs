//! Supervisor catalog: per-advisor meeting regime, starting lab economy,
//! passive weekly effects and the capability hooks that replace one-off
//! per-advisor branching in the simulation.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::actions::{ActionCategory, ActionCost, ActionSpecial, GameAction};
use crate::backgrounds::Personality;
use crate::stats::{Career, Physiological, Skills, StatDelta, Talents};

/// How this advisor runs their one-on-ones. `expectation_cap` and
/// `preparation_cap` overwrite the matching stat caps at run start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeetingConfig {
    pub expectation_growth: f64,
    pub expectation_cap: f64,
    pub preparation_cap: f64,
    /// How much slack the advisor cuts for unpreparedness; display data,
    /// the forced-meeting trigger itself is deterministic.
    pub patience: f64,
}

impl Default for MeetingConfig {
    fn default() -> Self {
        Self {
            expectation_growth: 5.0,
            expectation_cap: 100.0,
            preparation_cap: 100.0,
            patience: 1.0,
        }
    }
}

/// Declarative advisor quirks. The weekly tick and the action resolver read
/// these instead of matching on advisor ids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SupervisorHooks {
    /// Lab funding injected every week.
    #[serde(default)]
    pub weekly_stipend: Option<i64>,
    /// Hush money paid to the player every week.
    #[serde(default)]
    pub embezzlement: Option<i64>,
    /// Weekly probability that the scheme blows up into a scandal.
    #[serde(default)]
    pub scandal_chance: f64,
    /// Half-width of a uniform weekly relationship swing.
    #[serde(default)]
    pub relationship_swing: Option<f64>,
    /// Personal wealth softens grant-push costs.
    #[serde(default)]
    pub wealthy_patron: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupervisorProfile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub institution: String,
    pub description: String,
    #[serde(default)]
    pub citations: u32,
    #[serde(default)]
    pub h_index: u32,
    pub reputation: f64,
    pub initial_funding: i64,
    pub personality: Personality,
    #[serde(default)]
    pub initial_modifiers: StatDelta,
    #[serde(default)]
    pub weekly_effect: StatDelta,
    #[serde(default)]
    pub weekly_description: String,
    #[serde(default)]
    pub cap_modifiers: StatDelta,
    #[serde(default)]
    pub meeting: MeetingConfig,
    #[serde(default)]
    pub hooks: SupervisorHooks,
    #[serde(default)]
    pub exclusive_actions: Vec<GameAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SupervisorList {
    pub supervisors: Vec<SupervisorProfile>,
}

impl SupervisorList {
    /// Parse a supervisor table from JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when the payload is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_SUPERVISORS.clone()
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&SupervisorProfile> {
        self.supervisors.iter().find(|s| s.id == id)
    }
}

#[allow(clippy::too_many_arguments)]
fn exclusive(
    id: &str,
    label: &str,
    description: &str,
    category: ActionCategory,
    cost: ActionCost,
    effect: StatDelta,
    idea_chance: f64,
    special: ActionSpecial,
) -> GameAction {
    GameAction {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        category,
        cost,
        effect,
        idea_chance,
        special,
    }
}

static BUILTIN_SUPERVISORS: Lazy<SupervisorList> = Lazy::new(|| SupervisorList {
    supervisors: vec![
        SupervisorProfile {
            id: "push".to_string(),
            name: "Prof. Richard \"Dick\" Push".to_string(),
            title: "Distinguished Professor".to_string(),
            institution: "Institute of High Energy Stress".to_string(),
            description: "World famous. Demands perfection. You will be famous, if you survive."
                .to_string(),
            citations: 45_200,
            h_index: 85,
            reputation: 95.0,
            initial_funding: 500_000,
            personality: Personality {
                work_style: 10.0,
                motivation: 20.0,
            },
            initial_modifiers: StatDelta {
                career: Career {
                    reputation: 100.0,
                    supervisor_rel: 5.0,
                    ..Career::default()
                },
                physiological: Physiological {
                    stress: 20.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                physiological: Physiological {
                    stress: 5.0,
                    ..Physiological::default()
                },
                career: Career {
                    reputation: 2.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "A 'kind reminder' arrived at 3 AM.".to_string(),
            cap_modifiers: StatDelta {
                physiological: Physiological {
                    stress: 20.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 15.0,
                expectation_cap: 100.0,
                preparation_cap: 100.0,
                patience: 0.2,
            },
            hooks: SupervisorHooks::default(),
            exclusive_actions: vec![exclusive(
                "crunch_time",
                "Crunch Time",
                "Work until you drop.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 80.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    physiological: Physiological {
                        stress: 20.0,
                        ..Physiological::default()
                    },
                    skills: Skills {
                        experiment: 15.0,
                        analysis: 15.0,
                        ..Skills::default()
                    },
                    ..StatDelta::default()
                },
                0.0,
                ActionSpecial::None,
            )],
        },
        SupervisorProfile {
            id: "ghost".to_string(),
            name: "Dr. Invisibilis".to_string(),
            title: "Professor Emeritus".to_string(),
            institution: "Center for Absentee Studies".to_string(),
            description: "Tenured and tired. You won't see them, but they won't bother you."
                .to_string(),
            citations: 12_000,
            h_index: 45,
            reputation: 60.0,
            initial_funding: 50_000,
            personality: Personality {
                work_style: 90.0,
                motivation: 10.0,
            },
            initial_modifiers: StatDelta {
                physiological: Physiological {
                    sanity: 10.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                physiological: Physiological {
                    stress: -2.0,
                    ..Physiological::default()
                },
                career: Career {
                    reputation: -1.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "No meetings this week (again).".to_string(),
            cap_modifiers: StatDelta {
                career: Career {
                    supervisor_rel: -20.0,
                    reputation: -20.0,
                    ..Career::default()
                },
                skills: Skills {
                    analysis: 10.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 2.0,
                expectation_cap: 100.0,
                preparation_cap: 50.0,
                patience: 1.0,
            },
            hooks: SupervisorHooks::default(),
            exclusive_actions: vec![exclusive(
                "self_guided",
                "Self-Study",
                "Figure it out yourself.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 20.0,
                    stress: 5.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    talents: Talents {
                        logic: 5.0,
                        resilience: 2.0,
                        ..Talents::default()
                    },
                    ..StatDelta::default()
                },
                0.30,
                ActionSpecial::None,
            )],
        },
        SupervisorProfile {
            id: "newbie".to_string(),
            name: "Dr. Sarah Fresh".to_string(),
            title: "Assistant Professor".to_string(),
            institution: "Department of Desperation".to_string(),
            description: "Needs tenure BADLY. Has grant money, but will micromanage your soul."
                .to_string(),
            citations: 450,
            h_index: 8,
            reputation: 20.0,
            initial_funding: 80_000,
            personality: Personality {
                work_style: 15.0,
                motivation: 30.0,
            },
            initial_modifiers: StatDelta {
                funds: 1_000,
                career: Career {
                    supervisor_rel: 15.0,
                    reputation: -10.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                funds: 50,
                physiological: Physiological {
                    stress: 3.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Dr. Fresh hovered over your desk.".to_string(),
            cap_modifiers: StatDelta {
                energy: -10.0,
                funds: 10_000,
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 20.0,
                expectation_cap: 80.0,
                preparation_cap: 100.0,
                patience: 0.5,
            },
            hooks: SupervisorHooks::default(),
            exclusive_actions: vec![exclusive(
                "grant_writing",
                "Write Grant",
                "Help her get tenure.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 40.0,
                    stress: 10.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    funds: 1_500,
                    career: Career {
                        supervisor_rel: 15.0,
                        ..Career::default()
                    },
                    ..StatDelta::default()
                },
                0.0,
                ActionSpecial::None,
            )],
        },
        SupervisorProfile {
            id: "lab_mom".to_string(),
            name: "Prof. Linda Care".to_string(),
            title: "Associate Professor".to_string(),
            institution: "Wellness University".to_string(),
            description: "Treats the lab like a family. Good for sanity, bad for deadlines."
                .to_string(),
            citations: 5_200,
            h_index: 28,
            reputation: 50.0,
            initial_funding: 100_000,
            personality: Personality {
                work_style: 60.0,
                motivation: 80.0,
            },
            initial_modifiers: StatDelta {
                career: Career {
                    supervisor_rel: 10.0,
                    ..Career::default()
                },
                physiological: Physiological {
                    sanity: 20.0,
                    stress: -10.0,
                    ..Physiological::default()
                },
                talents: Talents {
                    resilience: 10.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                energy: -5.0,
                physiological: Physiological {
                    sanity: 3.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Team building lunch!".to_string(),
            cap_modifiers: StatDelta {
                physiological: Physiological {
                    sanity: 20.0,
                    stress: -20.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 5.0,
                expectation_cap: 100.0,
                preparation_cap: 80.0,
                patience: 1.0,
            },
            hooks: SupervisorHooks::default(),
            exclusive_actions: vec![exclusive(
                "vent_session",
                "Cry in Office",
                "Safe space.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 5.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    physiological: Physiological {
                        sanity: 30.0,
                        stress: -20.0,
                        ..Physiological::default()
                    },
                    career: Career {
                        supervisor_rel: 5.0,
                        ..Career::default()
                    },
                    ..StatDelta::default()
                },
                0.0,
                ActionSpecial::None,
            )],
        },
        SupervisorProfile {
            id: "visionary".to_string(),
            name: "Prof. Zephyr Vance".to_string(),
            title: "Director of Future Studies".to_string(),
            institution: "Institute of Nebulous Concepts".to_string(),
            description: "Has ideas that will change the world. Has no idea how to implement them."
                .to_string(),
            citations: 15_000,
            h_index: 55,
            reputation: 75.0,
            initial_funding: 200_000,
            personality: Personality {
                work_style: 100.0,
                motivation: 100.0,
            },
            initial_modifiers: StatDelta {
                talents: Talents {
                    creativity: 30.0,
                    focus: -10.0,
                    ..Talents::default()
                },
                career: Career {
                    reputation: 30.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                talents: Talents {
                    creativity: 2.0,
                    focus: -3.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "The project scope changed again.".to_string(),
            cap_modifiers: StatDelta {
                talents: Talents {
                    creativity: 30.0,
                    focus: -30.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 10.0,
                expectation_cap: 100.0,
                preparation_cap: 120.0,
                patience: 0.8,
            },
            hooks: SupervisorHooks::default(),
            exclusive_actions: vec![exclusive(
                "brainstorm_sesh",
                "Wild Idea",
                "Pivot the project.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 30.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    talents: Talents {
                        creativity: 15.0,
                        ..Talents::default()
                    },
                    ..StatDelta::default()
                },
                1.0,
                ActionSpecial::None,
            )],
        },
        SupervisorProfile {
            id: "old_guard".to_string(),
            name: "Prof. Arthur Oldman".to_string(),
            title: "Senior Fellow".to_string(),
            institution: "Traditional University".to_string(),
            description: "Still uses overhead projectors. Thinks Python is a snake.".to_string(),
            citations: 8_000,
            h_index: 35,
            reputation: 65.0,
            initial_funding: 80_000,
            personality: Personality {
                work_style: 5.0,
                motivation: 10.0,
            },
            initial_modifiers: StatDelta {
                skills: Skills {
                    writing: 20.0,
                    experiment: -10.0,
                    ..Skills::default()
                },
                career: Career {
                    supervisor_rel: 5.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                physiological: Physiological {
                    sanity: -2.0,
                    ..Physiological::default()
                },
                skills: Skills {
                    writing: 1.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "A long lecture about the good old days.".to_string(),
            cap_modifiers: StatDelta {
                skills: Skills {
                    writing: 20.0,
                    presentation: -20.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 8.0,
                expectation_cap: 100.0,
                preparation_cap: 80.0,
                patience: 0.4,
            },
            hooks: SupervisorHooks::default(),
            exclusive_actions: vec![exclusive(
                "archive_dig",
                "Library Dig",
                "Read physical books.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 15.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    talents: Talents {
                        focus: 5.0,
                        ..Talents::default()
                    },
                    skills: Skills {
                        reading: 8.0,
                        ..Skills::default()
                    },
                    ..StatDelta::default()
                },
                0.40,
                ActionSpecial::None,
            )],
        },
        SupervisorProfile {
            id: "politician".to_string(),
            name: "Dr. Gregory Handshake".to_string(),
            title: "Department Chair".to_string(),
            institution: "Ivy League Inc.".to_string(),
            description: "Knows everyone. Is never in the lab, because he is at a conference in Hawaii."
                .to_string(),
            citations: 25_000,
            h_index: 60,
            reputation: 85.0,
            initial_funding: 300_000,
            personality: Personality {
                work_style: 80.0,
                motivation: 5.0,
            },
            initial_modifiers: StatDelta {
                funds: 3_000,
                career: Career {
                    reputation: 50.0,
                    supervisor_rel: -10.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                energy: -10.0,
                career: Career {
                    reputation: 5.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Introduced you to a Nobel laureate.".to_string(),
            cap_modifiers: StatDelta {
                career: Career {
                    reputation: 200.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 5.0,
                expectation_cap: 150.0,
                preparation_cap: 90.0,
                patience: 0.8,
            },
            hooks: SupervisorHooks::default(),
            exclusive_actions: vec![exclusive(
                "schmooze",
                "Networking",
                "Attend gala dinner.",
                ActionCategory::Social,
                ActionCost {
                    funds: 200,
                    energy: 20.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    career: Career {
                        reputation: 25.0,
                        supervisor_rel: 5.0,
                        ..Career::default()
                    },
                    ..StatDelta::default()
                },
                0.0,
                ActionSpecial::None,
            )],
        },
        SupervisorProfile {
            id: "diy_guy".to_string(),
            name: "Dr. Aris \"Shoestring\" Thorne".to_string(),
            title: "Lab Manager / Lecturer".to_string(),
            institution: "Basement Science Annex".to_string(),
            description: "Your centrifuge is a salad spinner taped to a drill.".to_string(),
            citations: 1_200,
            h_index: 12,
            reputation: 40.0,
            initial_funding: 25_000,
            personality: Personality {
                work_style: 80.0,
                motivation: 90.0,
            },
            initial_modifiers: StatDelta {
                funds: -500,
                talents: Talents {
                    creativity: 25.0,
                    resilience: 30.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                energy: -5.0,
                skills: Skills {
                    experiment: 1.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Repaired the autoclave yourself.".to_string(),
            cap_modifiers: StatDelta {
                talents: Talents {
                    resilience: 20.0,
                    ..Talents::default()
                },
                career: Career {
                    reputation: -10.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 5.0,
                expectation_cap: 100.0,
                preparation_cap: 60.0,
                patience: 0.9,
            },
            hooks: SupervisorHooks::default(),
            exclusive_actions: vec![exclusive(
                "scavenge",
                "Dumpster Dive",
                "Find spare parts.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 10.0,
                    stress: 2.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    funds: 100,
                    ..StatDelta::default()
                },
                0.0,
                ActionSpecial::None,
            )],
        },
        SupervisorProfile {
            id: "theorist".to_string(),
            name: "Prof. Beatrice \"Budget\" Moore".to_string(),
            title: "Senior Theoretician".to_string(),
            institution: "Institute of Pure Thought".to_string(),
            description: "Has not applied for a grant since 1998. Why do you need money? You have a brain."
                .to_string(),
            citations: 9_000,
            h_index: 40,
            reputation: 65.0,
            initial_funding: 8_000,
            personality: Personality {
                work_style: 10.0,
                motivation: 50.0,
            },
            initial_modifiers: StatDelta {
                funds: -1_000,
                talents: Talents {
                    logic: 40.0,
                    creativity: -10.0,
                    ..Talents::default()
                },
                skills: Skills {
                    experiment: -30.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                talents: Talents {
                    logic: 2.0,
                    ..Talents::default()
                },
                skills: Skills {
                    experiment: -1.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Do the math by hand.".to_string(),
            cap_modifiers: StatDelta {
                funds: -10_000,
                talents: Talents {
                    logic: 30.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 10.0,
                expectation_cap: 100.0,
                preparation_cap: 90.0,
                patience: 0.3,
            },
            hooks: SupervisorHooks::default(),
            exclusive_actions: vec![exclusive(
                "thought_exp",
                "Pen & Paper",
                "Cheap and effective.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 5.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    talents: Talents {
                        logic: 5.0,
                        ..Talents::default()
                    },
                    skills: Skills {
                        analysis: 5.0,
                        ..Skills::default()
                    },
                    physiological: Physiological {
                        stress: -5.0,
                        ..Physiological::default()
                    },
                    ..StatDelta::default()
                },
                0.0,
                ActionSpecial::None,
            )],
        },
        SupervisorProfile {
            id: "kensington".to_string(),
            name: "Prof. Lionel R. Kensington".to_string(),
            title: "Distinguished Chair".to_string(),
            institution: "Global Institute of Wealth".to_string(),
            description: "Runs the lab like a hedge fund. Results or resignation.".to_string(),
            citations: 65_000,
            h_index: 110,
            reputation: 90.0,
            initial_funding: 1_000_000,
            personality: Personality {
                work_style: 10.0,
                motivation: 0.0,
            },
            initial_modifiers: StatDelta {
                physiological: Physiological {
                    stress: 15.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                physiological: Physiological {
                    sanity: -10.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Reviewing budgets.".to_string(),
            cap_modifiers: StatDelta {
                physiological: Physiological {
                    stress: -10.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 1.0,
                expectation_cap: 200.0,
                preparation_cap: 100.0,
                patience: 0.1,
            },
            hooks: SupervisorHooks {
                weekly_stipend: Some(2_000),
                wealthy_patron: true,
                ..SupervisorHooks::default()
            },
            exclusive_actions: vec![exclusive(
                "buy_results",
                "Outsource Experiments",
                "Spend lab money to buy data.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 10.0,
                    stress: 5.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    career: Career {
                        supervisor_rel: -5.0,
                        ..Career::default()
                    },
                    ..StatDelta::default()
                },
                0.0,
                ActionSpecial::PurchasedResults,
            )],
        },
        SupervisorProfile {
            id: "amber".to_string(),
            name: "Assoc. Prof. Amber Wang".to_string(),
            title: "Associate Professor".to_string(),
            institution: "City Tech".to_string(),
            description: "Rising star with high anxiety. Why aren't you working?".to_string(),
            citations: 3_200,
            h_index: 18,
            reputation: 45.0,
            initial_funding: 60_000,
            personality: Personality {
                work_style: 20.0,
                motivation: 80.0,
            },
            initial_modifiers: StatDelta {
                physiological: Physiological {
                    stress: 10.0,
                    ..Physiological::default()
                },
                career: Career {
                    supervisor_rel: 10.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta::default(),
            weekly_description: "Her mood swings wildly.".to_string(),
            cap_modifiers: StatDelta {
                physiological: Physiological {
                    stress: -10.0,
                    sanity: -20.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 20.0,
                expectation_cap: 60.0,
                preparation_cap: 120.0,
                patience: 0.5,
            },
            hooks: SupervisorHooks {
                relationship_swing: Some(10.0),
                ..SupervisorHooks::default()
            },
            exclusive_actions: vec![exclusive(
                "crisis_meeting",
                "Crisis Meeting",
                "Emergency sync.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 20.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    career: Career {
                        supervisor_rel: 15.0,
                        ..Career::default()
                    },
                    physiological: Physiological {
                        sanity: -10.0,
                        ..Physiological::default()
                    },
                    ..StatDelta::default()
                },
                0.20,
                ActionSpecial::CrisisSync,
            )],
        },
        SupervisorProfile {
            id: "vane".to_string(),
            name: "Dr. Silas Vane".to_string(),
            title: "Associate Professor".to_string(),
            institution: "Dark River University".to_string(),
            description: "Known for creative data interpretation. Generous with funds, if you don't ask questions."
                .to_string(),
            citations: 2_100,
            h_index: 15,
            reputation: 35.0,
            initial_funding: 120_000,
            personality: Personality {
                work_style: 90.0,
                motivation: 10.0,
            },
            initial_modifiers: StatDelta {
                funds: 2_000,
                ..StatDelta::default()
            },
            weekly_effect: StatDelta::default(),
            weekly_description: "Embezzlement scheme active.".to_string(),
            cap_modifiers: StatDelta {
                career: Career {
                    reputation: -20.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
            meeting: MeetingConfig {
                expectation_growth: 2.0,
                expectation_cap: 150.0,
                preparation_cap: 20.0,
                patience: 1.0,
            },
            hooks: SupervisorHooks {
                embezzlement: Some(1_000),
                scandal_chance: 0.025,
                ..SupervisorHooks::default()
            },
            exclusive_actions: vec![exclusive(
                "data_manipulation",
                "Massage Data",
                "Fix the outliers.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 20.0,
                    stress: 10.0,
                    ..ActionCost::default()
                },
                StatDelta::default(),
                0.0,
                ActionSpecial::FabricateData,
            )],
        },
    ],
});
