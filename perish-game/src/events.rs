//! Random weekly events: the weighted pool and the integer-weight draw.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stats::{Career, Physiological, Skills, StatDelta, Talents};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Good,
    Bad,
    #[default]
    Neutral,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// World mutations that are not stat deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct EventSpecial {
    /// Permanent change to the weekly rent.
    #[serde(default)]
    pub rent_change: i64,
    /// One-off change to the lab's funding pool.
    #[serde(default)]
    pub lab_funding_change: i64,
    /// Free progress on the active milestone.
    #[serde(default)]
    pub mandatory_progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub kind: EventKind,
    /// Integer draw weight; higher is more common.
    pub weight: u32,
    #[serde(default)]
    pub effect: StatDelta,
    #[serde(default)]
    pub special: EventSpecial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EventList {
    pub events: Vec<RandomEvent>,
}

impl EventList {
    /// Parse an event table from JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when the payload is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_EVENTS.clone()
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&RandomEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.events.iter().map(|e| e.weight).sum()
    }

    /// Strictly weight-proportional draw. `roll` must lie in
    /// `[0, total_weight())`; the subtract-walk lands on exactly one entry,
    /// so the leading fallback only fires for an empty pool's caller bug.
    #[must_use]
    pub fn choose_weighted(&self, roll: u32) -> Option<&RandomEvent> {
        let mut remaining = roll;
        for event in &self.events {
            if remaining < event.weight {
                return Some(event);
            }
            remaining -= event.weight;
        }
        self.events.first()
    }
}

fn event(
    id: &str,
    title: &str,
    description: &str,
    kind: EventKind,
    weight: u32,
    effect: StatDelta,
) -> RandomEvent {
    RandomEvent {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        weight,
        effect,
        special: EventSpecial::default(),
    }
}

static BUILTIN_EVENTS: Lazy<EventList> = Lazy::new(|| EventList {
    events: vec![
        RandomEvent {
            special: EventSpecial {
                rent_change: 50,
                ..EventSpecial::default()
            },
            ..event(
                "rent_hike",
                "Landlord Greed",
                "Your landlord claims market adjustments require a rent increase.",
                EventKind::Bad,
                2,
                StatDelta {
                    physiological: Physiological {
                        stress: 15.0,
                        ..Physiological::default()
                    },
                    ..StatDelta::default()
                },
            )
        },
        event(
            "laptop_break",
            "Blue Screen of Death",
            "Your laptop died. You had to pay for emergency repairs.",
            EventKind::Bad,
            3,
            StatDelta {
                funds: -300,
                physiological: Physiological {
                    stress: 20.0,
                    sanity: -5.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "conference_fee",
            "Hidden Fees",
            "You forgot to pay your society membership dues.",
            EventKind::Bad,
            4,
            StatDelta {
                funds: -150,
                ..StatDelta::default()
            },
        ),
        event(
            "tax_refund",
            "Tax Refund",
            "The government actually gave you money back. A miracle.",
            EventKind::Good,
            2,
            StatDelta {
                funds: 400,
                physiological: Physiological {
                    stress: -5.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "free_food",
            "Leftover Catering",
            "You found a stack of untouched sandwiches in the hallway.",
            EventKind::Good,
            5,
            StatDelta {
                funds: 20,
                energy: 10.0,
                physiological: Physiological {
                    health: 2.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "flu",
            "The Flu",
            "You caught the seasonal flu circulating the lab.",
            EventKind::Bad,
            3,
            StatDelta {
                energy: -40.0,
                physiological: Physiological {
                    health: -15.0,
                    stress: 5.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "insomnia",
            "Insomnia",
            "You stared at the ceiling until 5 AM thinking about your thesis.",
            EventKind::Bad,
            4,
            StatDelta {
                energy: -30.0,
                physiological: Physiological {
                    sanity: -5.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "good_sleep",
            "Perfect Sleep",
            "You woke up feeling strangely refreshed and powerful.",
            EventKind::Good,
            3,
            StatDelta {
                energy: 30.0,
                physiological: Physiological {
                    sanity: 5.0,
                    health: 2.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "care_package",
            "Care Package",
            "Your parents sent a box of snacks and vitamins.",
            EventKind::Good,
            3,
            StatDelta {
                physiological: Physiological {
                    sanity: 10.0,
                    health: 5.0,
                    stress: -5.0,
                },
                ..StatDelta::default()
            },
        ),
        event(
            "lab_accident",
            "Equipment Failure",
            "You broke a very expensive beaker. The technician is glaring at you.",
            EventKind::Bad,
            3,
            StatDelta {
                physiological: Physiological {
                    stress: 15.0,
                    ..Physiological::default()
                },
                career: Career {
                    supervisor_rel: -5.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "scooped",
            "Almost Scooped",
            "A similar paper was published. You need to pivot slightly.",
            EventKind::Bad,
            2,
            StatDelta {
                physiological: Physiological {
                    stress: 25.0,
                    sanity: -10.0,
                    ..Physiological::default()
                },
                talents: Talents {
                    resilience: 2.0,
                    ..Talents::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "citation_alert",
            "New Citation",
            "Someone cited your work! (It wasn't just you citing yourself.)",
            EventKind::Good,
            3,
            StatDelta {
                career: Career {
                    reputation: 10.0,
                    ..Career::default()
                },
                physiological: Physiological {
                    stress: -5.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "shower_thought",
            "Shower Thought",
            "You solved a minor bug while shampooing.",
            EventKind::Good,
            4,
            StatDelta {
                talents: Talents {
                    logic: 2.0,
                    ..Talents::default()
                },
                skills: Skills {
                    analysis: 2.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "poster_accepted",
            "Poster Accepted",
            "Your abstract was accepted for a poster presentation.",
            EventKind::Good,
            2,
            StatDelta {
                career: Career {
                    reputation: 15.0,
                    ..Career::default()
                },
                skills: Skills {
                    presentation: 5.0,
                    ..Skills::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "supervisor_ghosted",
            "Supervisor Ghosted",
            "Your supervisor cancelled the meeting. You are free!",
            EventKind::Good,
            4,
            StatDelta {
                energy: 10.0,
                physiological: Physiological {
                    stress: -10.0,
                    ..Physiological::default()
                },
                ..StatDelta::default()
            },
        ),
        event(
            "sudden_deadline",
            "Sudden Deadline",
            "Your supervisor needs a slide deck by tomorrow morning.",
            EventKind::Bad,
            3,
            StatDelta {
                energy: -20.0,
                physiological: Physiological {
                    stress: 15.0,
                    ..Physiological::default()
                },
                career: Career {
                    supervisor_rel: 5.0,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
        ),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_pool_is_complete() {
        let list = EventList::builtin();
        assert_eq!(list.events.len(), 16);
        assert_eq!(list.total_weight(), 50);
    }

    #[test]
    fn weighted_draw_is_strictly_proportional() {
        let list = EventList::builtin();
        // First event has weight 2: rolls 0 and 1 land on it, roll 2 does not.
        assert_eq!(list.choose_weighted(0).unwrap().id, "rent_hike");
        assert_eq!(list.choose_weighted(1).unwrap().id, "rent_hike");
        assert_eq!(list.choose_weighted(2).unwrap().id, "laptop_break");
        // The final roll lands on the last entry.
        let last = list.choose_weighted(list.total_weight() - 1).unwrap();
        assert_eq!(last.id, "sudden_deadline");
    }

    #[test]
    fn every_roll_lands_on_a_weighted_entry() {
        let list = EventList::builtin();
        let mut tally = vec![0u32; list.events.len()];
        for roll in 0..list.total_weight() {
            let picked = list.choose_weighted(roll).unwrap();
            let idx = list.events.iter().position(|e| e.id == picked.id).unwrap();
            tally[idx] += 1;
        }
        for (event, count) in list.events.iter().zip(tally) {
            assert_eq!(count, event.weight, "{}", event.id);
        }
    }

    #[test]
    fn rent_hike_carries_a_special_effect() {
        let list = EventList::builtin();
        assert_eq!(list.get_by_id("rent_hike").unwrap().special.rent_change, 50);
        assert_eq!(
            list.get_by_id("flu").unwrap().special,
            EventSpecial::default()
        );
    }

    #[test]
    fn pool_round_trips_through_json() {
        let list = EventList::builtin();
        let json = serde_json::to_string(&list).unwrap();
        let back = EventList::from_json(&json).unwrap();
        assert_eq!(list, back);
    }
}
