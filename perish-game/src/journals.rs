//! Journal catalog for the submission pipeline.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Per-journal fit thresholds against the underlying idea's attributes.
/// A missing entry means the journal does not screen on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct JournalRequirements {
    #[serde(default)]
    pub novelty: Option<f64>,
    #[serde(default)]
    pub feasibility: Option<f64>,
    #[serde(default)]
    pub resources: Option<f64>,
    #[serde(default)]
    pub attraction: Option<f64>,
}

impl JournalRequirements {
    /// An idea fits when every screened attribute reaches its threshold.
    #[must_use]
    pub fn satisfied_by(
        &self,
        novelty: f64,
        feasibility: f64,
        resources: f64,
        attraction: f64,
    ) -> bool {
        self.novelty.is_none_or(|req| novelty >= req)
            && self.feasibility.is_none_or(|req| feasibility >= req)
            && self.resources.is_none_or(|req| resources >= req)
            && self.attraction.is_none_or(|req| attraction >= req)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    pub id: String,
    pub name: String,
    pub description: String,
    pub impact_factor: f64,
    /// Quality below this is desk rejected unread.
    pub minimum_quality: f64,
    /// Quality at or above this is accepted outright.
    pub accept_quality: f64,
    #[serde(default)]
    pub requirements: JournalRequirements,
    /// Reputation on acceptance; negative for predatory venues.
    pub reputation_reward: f64,
    /// Weekly citation accrual multiplier for published papers.
    pub citation_factor: f64,
    /// Open-access fee charged at submission time.
    #[serde(default)]
    pub submission_fee: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JournalList {
    pub journals: Vec<Journal>,
}

impl JournalList {
    /// Parse a journal table from JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when the payload is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_JOURNALS.clone()
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Journal> {
        self.journals.iter().find(|j| j.id == id)
    }
}

#[allow(clippy::too_many_arguments)]
fn journal(
    id: &str,
    name: &str,
    description: &str,
    impact_factor: f64,
    minimum_quality: f64,
    accept_quality: f64,
    requirements: JournalRequirements,
    reputation_reward: f64,
    citation_factor: f64,
    submission_fee: i64,
) -> Journal {
    Journal {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        impact_factor,
        minimum_quality,
        accept_quality,
        requirements,
        reputation_reward,
        citation_factor,
        submission_fee,
    }
}

static BUILTIN_JOURNALS: Lazy<JournalList> = Lazy::new(|| JournalList {
    journals: vec![
        journal(
            "nature",
            "Nature",
            "The holy grail. Rejects 92% of papers. Reviewer #3 is a Nobel laureate.",
            64.8,
            85.0,
            98.0,
            JournalRequirements {
                novelty: Some(90.0),
                attraction: Some(80.0),
                ..JournalRequirements::default()
            },
            150.0,
            5.0,
            0,
        ),
        journal(
            "science",
            "Science",
            "If it's not on the cover, did it even happen?",
            63.7,
            85.0,
            98.0,
            JournalRequirements {
                novelty: Some(90.0),
                attraction: Some(80.0),
                ..JournalRequirements::default()
            },
            150.0,
            5.0,
            0,
        ),
        journal(
            "prl",
            "Phys. Rev. Letters",
            "Prestigious, dense, and full of equations.",
            8.8,
            70.0,
            90.0,
            JournalRequirements {
                feasibility: Some(70.0),
                novelty: Some(70.0),
                ..JournalRequirements::default()
            },
            80.0,
            2.5,
            0,
        ),
        journal(
            "jacs",
            "J. Am. Chem. Soc.",
            "Top chemistry journal. They love pretty molecules.",
            14.4,
            70.0,
            90.0,
            JournalRequirements {
                resources: Some(60.0),
                attraction: Some(60.0),
                ..JournalRequirements::default()
            },
            80.0,
            2.8,
            0,
        ),
        journal(
            "j_appl_phys",
            "J. Applied Physics",
            "Solid workhorse journal. Reliable, if unexciting.",
            2.8,
            50.0,
            75.0,
            JournalRequirements {
                feasibility: Some(60.0),
                ..JournalRequirements::default()
            },
            30.0,
            1.0,
            0,
        ),
        journal(
            "phys_b",
            "Physica B",
            "Where decent condensed matter papers go to rest.",
            2.1,
            40.0,
            65.0,
            JournalRequirements::default(),
            20.0,
            0.8,
            0,
        ),
        journal(
            "j_novel_mat",
            "J. Novel Materials",
            "Obsessed with new things, even if they are useless.",
            4.5,
            55.0,
            80.0,
            JournalRequirements {
                novelty: Some(80.0),
                ..JournalRequirements::default()
            },
            40.0,
            1.5,
            0,
        ),
        journal(
            "theory_only",
            "J. Pure Speculation",
            "For papers with zero resources but high logic.",
            3.2,
            60.0,
            85.0,
            JournalRequirements {
                resources: Some(20.0),
                ..JournalRequirements::default()
            },
            35.0,
            1.2,
            0,
        ),
        journal(
            "conf_proc",
            "Proceedings of INT-CONF",
            "Conference proceedings. Basically a guaranteed accept if you register.",
            0.5,
            20.0,
            40.0,
            JournalRequirements::default(),
            10.0,
            0.2,
            0,
        ),
        journal(
            "open_access_mega",
            "Sci-Repository Plus",
            "Pay to play. If it is technically English, it prints.",
            1.2,
            10.0,
            20.0,
            JournalRequirements::default(),
            5.0,
            0.5,
            1_500,
        ),
        journal(
            "predatory",
            "Intl. J. of Advanced Science & Astrology",
            "Spam email journal. Accepts anything for a fee.",
            0.1,
            0.0,
            5.0,
            JournalRequirements::default(),
            -10.0,
            0.0,
            500,
        ),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_complete() {
        let list = JournalList::builtin();
        assert_eq!(list.journals.len(), 11);
        for j in &list.journals {
            assert!(j.accept_quality >= j.minimum_quality, "{}", j.id);
        }
    }

    #[test]
    fn requirements_screen_only_named_axes() {
        let list = JournalList::builtin();
        let nature = &list.get_by_id("nature").unwrap().requirements;
        assert!(nature.satisfied_by(95.0, 0.0, 0.0, 85.0));
        assert!(!nature.satisfied_by(89.0, 100.0, 100.0, 85.0));

        let phys_b = &list.get_by_id("phys_b").unwrap().requirements;
        assert!(phys_b.satisfied_by(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn predatory_venue_costs_reputation() {
        let list = JournalList::builtin();
        let predatory = list.get_by_id("predatory").unwrap();
        assert!(predatory.reputation_reward < 0.0);
        assert!(predatory.submission_fee > 0);
        assert!((predatory.citation_factor).abs() < f64::EPSILON);
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let list = JournalList::builtin();
        let json = serde_json::to_string(&list).unwrap();
        let back = JournalList::from_json(&json).unwrap();
        assert_eq!(list, back);
    }
}
