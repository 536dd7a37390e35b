//! Student archetype catalog. Each archetype reshapes the starting stats,
//! the per-field caps, and the weekly passive, and may unlock exclusive
//! actions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::actions::{ActionCategory, ActionCost, GameAction};
use crate::stats::{Career, Physiological, Skills, StatDelta, Talents};

/// Two-axis temperament used for the supervisor compatibility bonus.
/// `work_style` runs structured (0) to chaotic (100); `motivation` runs
/// careerist (0) to idealist (100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Personality {
    #[serde(default)]
    pub work_style: f64,
    #[serde(default)]
    pub motivation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundOption {
    pub id: String,
    pub name: String,
    pub education: String,
    pub description: String,
    pub personality: Personality,
    /// Starting loan balance, due a fixed number of weeks into the run.
    #[serde(default)]
    pub initial_debt: Option<i64>,
    #[serde(default)]
    pub initial_modifiers: StatDelta,
    #[serde(default)]
    pub weekly_effect: StatDelta,
    #[serde(default)]
    pub weekly_description: String,
    #[serde(default)]
    pub cap_modifiers: StatDelta,
    #[serde(default)]
    pub exclusive_actions: Vec<GameAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BackgroundList {
    pub backgrounds: Vec<BackgroundOption>,
}

impl BackgroundList {
    /// Parse an archetype table from JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when the payload is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_BACKGROUNDS.clone()
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&BackgroundOption> {
        self.backgrounds.iter().find(|b| b.id == id)
    }
}

fn exclusive(
    id: &str,
    label: &str,
    description: &str,
    category: ActionCategory,
    cost: ActionCost,
    effect: StatDelta,
    idea_chance: f64,
) -> GameAction {
    GameAction {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        category,
        cost,
        effect,
        idea_chance,
        special: crate::actions::ActionSpecial::None,
    }
}

static BUILTIN_BACKGROUNDS: Lazy<BackgroundList> = Lazy::new(|| BackgroundList {
    backgrounds: vec![
        BackgroundOption {
            id: "rich_kid".to_string(),
            name: "Preston Sterling III".to_string(),
            education: "BA Art History, Ivy League (Legacy)".to_string(),
            description: "Never washed a dish in his life. Treating the PhD as a gap decade."
                .to_string(),
            personality: Personality {
                work_style: 80.0,
                motivation: 20.0,
            },
            initial_debt: None,
            initial_modifiers: StatDelta {
                funds: 8_500,
                energy: -15.0,
                physiological: Physiological {
                    stress: -12.0,
                    sanity: 5.0,
                    ..Physiological::default()
                },
                skills: Skills {
                    time_management: -8.0,
                    experiment: -14.0,
                    presentation: 12.0,
                    writing: -5.0,
                    ..Skills::default()
                },
                talents: Talents {
                    resilience: -12.0,
                    creativity: 8.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                funds: 500,
                ..StatDelta::default()
            },
            weekly_description: "Allowance from Dad arrived.".to_string(),
            cap_modifiers: StatDelta {
                energy: -20.0,
                physiological: Physiological {
                    stress: 30.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            exclusive_actions: vec![exclusive(
                "retail_therapy",
                "Retail Therapy",
                "Buy happiness.",
                ActionCategory::Life,
                ActionCost {
                    funds: 800,
                    energy: 5.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    physiological: Physiological {
                        stress: -50.0,
                        sanity: 20.0,
                        ..Physiological::default()
                    },
                    ..StatDelta::default()
                },
                0.0,
            )],
        },
        BackgroundOption {
            id: "influencer".to_string(),
            name: "Tiffany Sun-Yang".to_string(),
            education: "BA Marketing, Social Media Influencer".to_string(),
            description: "Majoring in marketing. Actually majoring in Instagram.".to_string(),
            personality: Personality {
                work_style: 70.0,
                motivation: 30.0,
            },
            initial_debt: None,
            initial_modifiers: StatDelta {
                funds: 4_200,
                energy: -12.0,
                physiological: Physiological {
                    health: -10.0,
                    stress: 10.0,
                    sanity: -5.0,
                },
                talents: Talents {
                    creativity: 8.0,
                    focus: -12.0,
                    logic: -8.0,
                    resilience: -2.0,
                },
                skills: Skills {
                    time_management: -12.0,
                    reading: -14.0,
                    writing: -8.0,
                    experiment: -15.0,
                    analysis: -14.0,
                    presentation: 45.0,
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                funds: -200,
                physiological: Physiological {
                    sanity: 5.0,
                    stress: -5.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Retail therapy addiction.".to_string(),
            cap_modifiers: StatDelta {
                energy: -10.0,
                physiological: Physiological {
                    sanity: -20.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            exclusive_actions: vec![exclusive(
                "sponsored_post",
                "Sponsored Content",
                "#Ad #Hustle",
                ActionCategory::Life,
                ActionCost {
                    energy: 20.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    funds: 800,
                    physiological: Physiological {
                        stress: 10.0,
                        ..Physiological::default()
                    },
                    ..StatDelta::default()
                },
                0.0,
            )],
        },
        BackgroundOption {
            id: "genius".to_string(),
            name: "Aarav Patel".to_string(),
            education: "PhD (Math) at age 16, now trying Physics".to_string(),
            description: "Intellectually brilliant, but has the social skills of a brick and high anxiety."
                .to_string(),
            personality: Personality {
                work_style: 70.0,
                motivation: 90.0,
            },
            initial_debt: None,
            initial_modifiers: StatDelta {
                funds: -1_500,
                talents: Talents {
                    logic: 42.0,
                    creativity: 28.0,
                    resilience: -15.0,
                    ..Talents::default()
                },
                skills: Skills {
                    presentation: -18.0,
                    writing: -8.0,
                    analysis: 22.0,
                    reading: 15.0,
                    ..Skills::default()
                },
                physiological: Physiological {
                    sanity: -15.0,
                    stress: 15.0,
                    health: -5.0,
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                physiological: Physiological {
                    stress: 3.0,
                    ..Physiological::default()
                },
                talents: Talents {
                    logic: 1.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Gifted kid burnout kicks in.".to_string(),
            cap_modifiers: StatDelta {
                energy: 20.0,
                physiological: Physiological {
                    sanity: -30.0,
                    stress: -20.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            exclusive_actions: vec![exclusive(
                "eureka",
                "Brain Blast",
                "Go into a trance.",
                ActionCategory::Academics,
                ActionCost {
                    energy: 40.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    talents: Talents {
                        logic: 10.0,
                        creativity: 10.0,
                        ..Talents::default()
                    },
                    physiological: Physiological {
                        stress: 10.0,
                        ..Physiological::default()
                    },
                    ..StatDelta::default()
                },
                1.0,
            )],
        },
        BackgroundOption {
            id: "gambler".to_string(),
            name: "Jax \"All-In\" Mendez".to_string(),
            education: "BSc Statistics, Online Poker Pro".to_string(),
            description: "Lost their tuition money on crypto. Starts with huge debt but high risk tolerance."
                .to_string(),
            personality: Personality {
                work_style: 90.0,
                motivation: 70.0,
            },
            initial_debt: Some(8_000),
            initial_modifiers: StatDelta {
                funds: 2_000,
                talents: Talents {
                    logic: 20.0,
                    focus: -10.0,
                    ..Talents::default()
                },
                physiological: Physiological {
                    stress: -20.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                physiological: Physiological {
                    stress: 5.0,
                    sanity: -2.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Debt anxiety vs thrill.".to_string(),
            cap_modifiers: StatDelta {
                physiological: Physiological {
                    stress: 30.0,
                    sanity: -30.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            exclusive_actions: vec![exclusive(
                "day_trading",
                "Day Trading",
                "High risk, high reward.",
                ActionCategory::Life,
                ActionCost {
                    energy: 10.0,
                    funds: 500,
                    stress: 10.0,
                },
                StatDelta {
                    funds: 1_000,
                    ..StatDelta::default()
                },
                0.0,
            )],
        },
        BackgroundOption {
            id: "career_switcher".to_string(),
            name: "Eleanor Vance".to_string(),
            education: "Former Corporate Lawyer".to_string(),
            description: "Left a high-paying job to pursue passion. Carries lifestyle debt from a previous life."
                .to_string(),
            personality: Personality {
                work_style: 10.0,
                motivation: 90.0,
            },
            initial_debt: Some(5_000),
            initial_modifiers: StatDelta {
                funds: 4_000,
                energy: -20.0,
                skills: Skills {
                    time_management: 30.0,
                    presentation: 20.0,
                    writing: 15.0,
                    ..Skills::default()
                },
                talents: Talents {
                    resilience: 20.0,
                    ..Talents::default()
                },
                physiological: Physiological {
                    health: -15.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                funds: -100,
                talents: Talents {
                    resilience: 1.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Mortgage payments due.".to_string(),
            cap_modifiers: StatDelta {
                energy: -30.0,
                skills: Skills {
                    time_management: 20.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
            exclusive_actions: vec![exclusive(
                "consulting",
                "Freelance Consult",
                "Use your old skills.",
                ActionCategory::Life,
                ActionCost {
                    energy: 30.0,
                    stress: 10.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    funds: 1_200,
                    physiological: Physiological {
                        sanity: -5.0,
                        ..Physiological::default()
                    },
                    ..StatDelta::default()
                },
                0.0,
            )],
        },
        BackgroundOption {
            id: "industry".to_string(),
            name: "Elena Rodriguez".to_string(),
            education: "MBA, Top 10 Business School".to_string(),
            description: "Spent 10 years in Corpo. Uses buzzwords like synergy. Here to disrupt science."
                .to_string(),
            personality: Personality {
                work_style: 10.0,
                motivation: 10.0,
            },
            initial_debt: None,
            initial_modifiers: StatDelta {
                funds: 5_500,
                skills: Skills {
                    presentation: 15.0,
                    time_management: 25.0,
                    reading: -12.0,
                    writing: -5.0,
                    ..Skills::default()
                },
                career: Career {
                    reputation: 15.0,
                    ..Career::default()
                },
                talents: Talents {
                    focus: -8.0,
                    logic: 5.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                funds: 200,
                energy: -10.0,
                ..StatDelta::default()
            },
            weekly_description: "Consulting side-hustle call.".to_string(),
            cap_modifiers: StatDelta {
                energy: 10.0,
                physiological: Physiological {
                    stress: 10.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            exclusive_actions: vec![exclusive(
                "delegate",
                "Outsource",
                "Pay someone else to do it.",
                ActionCategory::Academics,
                ActionCost {
                    funds: 400,
                    ..ActionCost::default()
                },
                StatDelta {
                    skills: Skills {
                        experiment: 5.0,
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
            )],
        },
        BackgroundOption {
            id: "grinder".to_string(),
            name: "Sarah Smith".to_string(),
            education: "BS, State University (Summa Cum Laude)".to_string(),
            description: "Runs entirely on caffeine and spite. Will outlast the cockroaches."
                .to_string(),
            personality: Personality {
                work_style: 20.0,
                motivation: 60.0,
            },
            initial_debt: None,
            initial_modifiers: StatDelta {
                funds: -2_200,
                energy: 25.0,
                talents: Talents {
                    resilience: 35.0,
                    focus: 5.0,
                    ..Talents::default()
                },
                skills: Skills {
                    experiment: 12.0,
                    analysis: 2.0,
                    writing: 2.0,
                    ..Skills::default()
                },
                physiological: Physiological {
                    health: -10.0,
                    stress: 15.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                energy: 10.0,
                physiological: Physiological {
                    health: -2.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Powered through the pain.".to_string(),
            cap_modifiers: StatDelta {
                energy: 50.0,
                physiological: Physiological {
                    health: -30.0,
                    stress: 40.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            exclusive_actions: vec![],
        },
        BackgroundOption {
            id: "international".to_string(),
            name: "Wei Chen".to_string(),
            education: "MSc, Top University in Home Country".to_string(),
            description: "Brilliant researcher, but half the brain power goes to immigration paperwork."
                .to_string(),
            personality: Personality {
                work_style: 30.0,
                motivation: 80.0,
            },
            initial_debt: None,
            initial_modifiers: StatDelta {
                funds: 2_000,
                talents: Talents {
                    creativity: -12.0,
                    focus: 13.0,
                    logic: 18.0,
                    resilience: -22.0,
                },
                skills: Skills {
                    time_management: -11.0,
                    reading: 12.0,
                    writing: -8.0,
                    experiment: 12.0,
                    analysis: 21.0,
                    presentation: -17.0,
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                physiological: Physiological {
                    stress: 5.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Visa anxiety.".to_string(),
            cap_modifiers: StatDelta {
                energy: 20.0,
                physiological: Physiological {
                    stress: 50.0,
                    sanity: -20.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            exclusive_actions: vec![
                exclusive(
                    "call_home",
                    "Call Home",
                    "Family support.",
                    ActionCategory::Life,
                    ActionCost {
                        energy: 10.0,
                        ..ActionCost::default()
                    },
                    StatDelta {
                        funds: 100,
                        physiological: Physiological {
                            stress: -15.0,
                            sanity: 10.0,
                            ..Physiological::default()
                        },
                        ..StatDelta::default()
                    },
                    0.0,
                ),
                exclusive(
                    "weekend_overtime",
                    "Weekend Overtime",
                    "Work while others sleep.",
                    ActionCategory::Academics,
                    ActionCost::default(),
                    StatDelta {
                        physiological: Physiological {
                            stress: 25.0,
                            health: -10.0,
                            sanity: -10.0,
                        },
                        ..StatDelta::default()
                    },
                    0.0,
                ),
            ],
        },
        BackgroundOption {
            id: "idealist".to_string(),
            name: "Zara Al-Fayed".to_string(),
            education: "BA, Liberal Arts College".to_string(),
            description: "Passionate about changing the world. Often distracted by department politics."
                .to_string(),
            personality: Personality {
                work_style: 80.0,
                motivation: 100.0,
            },
            initial_debt: None,
            initial_modifiers: StatDelta {
                funds: -1_200,
                physiological: Physiological {
                    sanity: 15.0,
                    stress: -5.0,
                    ..Physiological::default()
                },
                talents: Talents {
                    creativity: 18.0,
                    focus: -14.0,
                    resilience: 10.0,
                    ..Talents::default()
                },
                career: Career {
                    supervisor_rel: -10.0,
                    ..Career::default()
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
            weekly_description: "Organized a student union meeting.".to_string(),
            cap_modifiers: StatDelta {
                energy: -10.0,
                physiological: Physiological {
                    sanity: 30.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            exclusive_actions: vec![exclusive(
                "protest",
                "Organize Protest",
                "Fight the power.",
                ActionCategory::Social,
                ActionCost {
                    energy: 30.0,
                    ..ActionCost::default()
                },
                StatDelta {
                    physiological: Physiological {
                        sanity: 20.0,
                        ..Physiological::default()
                    },
                    career: Career {
                        reputation: -5.0,
                        ..Career::default()
                    },
                    ..StatDelta::default()
                },
                0.0,
            )],
        },
        BackgroundOption {
            id: "parent".to_string(),
            name: "David Okafor".to_string(),
            education: "Returning student after 5 years".to_string(),
            description: "Has two toddlers at home. Time management is god-tier, but sleep is a myth."
                .to_string(),
            personality: Personality {
                work_style: 0.0,
                motivation: 50.0,
            },
            initial_debt: None,
            initial_modifiers: StatDelta {
                funds: -1_500,
                energy: -40.0,
                skills: Skills {
                    time_management: 55.0,
                    analysis: -5.0,
                    ..Skills::default()
                },
                physiological: Physiological {
                    health: -14.0,
                    stress: 15.0,
                    ..Physiological::default()
                },
                talents: Talents {
                    resilience: 12.0,
                    focus: -5.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                energy: -10.0,
                skills: Skills {
                    time_management: 1.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Kids woke up at 4AM.".to_string(),
            cap_modifiers: StatDelta {
                energy: -40.0,
                talents: Talents {
                    resilience: 30.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
            exclusive_actions: vec![exclusive(
                "power_nap",
                "Power Nap",
                "Mastery of sleep.",
                ActionCategory::Life,
                ActionCost::default(),
                StatDelta {
                    energy: 25.0,
                    physiological: Physiological {
                        stress: -5.0,
                        ..Physiological::default()
                    },
                    ..StatDelta::default()
                },
                0.0,
            )],
        },
        BackgroundOption {
            id: "late_bloomer".to_string(),
            name: "Kenji Sato".to_string(),
            education: "Retired Engineer, 65 years old".to_string(),
            description: "Doing this for fun. Has infinite patience and life experience, but lower stamina."
                .to_string(),
            personality: Personality {
                work_style: 60.0,
                motivation: 90.0,
            },
            initial_debt: None,
            initial_modifiers: StatDelta {
                funds: 15_000,
                energy: -25.0,
                physiological: Physiological {
                    sanity: 25.0,
                    health: -25.0,
                    ..Physiological::default()
                },
                talents: Talents {
                    resilience: 15.0,
                    logic: 5.0,
                    ..Talents::default()
                },
                skills: Skills {
                    writing: 12.0,
                    experiment: 8.0,
                    presentation: -5.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
            weekly_effect: StatDelta {
                energy: -5.0,
                physiological: Physiological {
                    sanity: 2.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            weekly_description: "Wisdom of age.".to_string(),
            cap_modifiers: StatDelta {
                energy: -30.0,
                physiological: Physiological {
                    health: -40.0,
                    sanity: 40.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
            exclusive_actions: vec![],
        },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_pool_has_all_archetypes() {
        let list = BackgroundList::builtin();
        assert_eq!(list.backgrounds.len(), 11);
        for (i, b) in list.backgrounds.iter().enumerate() {
            assert!(
                !list.backgrounds[i + 1..].iter().any(|o| o.id == b.id),
                "duplicate background id {}",
                b.id
            );
        }
    }

    #[test]
    fn debt_backgrounds_carry_a_balance() {
        let list = BackgroundList::builtin();
        assert_eq!(
            list.get_by_id("gambler").unwrap().initial_debt,
            Some(8_000)
        );
        assert_eq!(
            list.get_by_id("career_switcher").unwrap().initial_debt,
            Some(5_000)
        );
        assert_eq!(list.get_by_id("rich_kid").unwrap().initial_debt, None);
    }

    #[test]
    fn exclusive_action_ids_do_not_collide_with_generic_catalog() {
        let generic = crate::actions::ActionList::builtin();
        for bg in &BackgroundList::builtin().backgrounds {
            for action in &bg.exclusive_actions {
                assert!(generic.get_by_id(&action.id).is_none(), "{}", action.id);
            }
        }
    }

    #[test]
    fn pool_round_trips_through_json() {
        let list = BackgroundList::builtin();
        let json = serde_json::to_string(&list).unwrap();
        let back = BackgroundList::from_json(&json).unwrap();
        assert_eq!(list, back);
    }
}
