//! Player stat model: nested numeric record, per-field dynamic caps, and the
//! sparse typed delta that every mutation in the game flows through.

use serde::{Deserialize, Serialize};

use crate::constants::{
    FUNDS_CEILING, INITIAL_FUNDS, RECOVERY_BASE, RECOVERY_HEALTH_PIVOT, RECOVERY_HEALTH_WEIGHT,
    RECOVERY_MAX_PCT, RECOVERY_MIN_PCT, RECOVERY_SANITY_PIVOT, RECOVERY_SANITY_WEIGHT,
    RECOVERY_STRESS_PIVOT, RECOVERY_STRESS_WEIGHT, REPUTATION_CEILING,
};

/// Health, stress and sanity. Stress is the only stat where *high* is bad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Physiological {
    #[serde(default)]
    pub health: f64,
    #[serde(default)]
    pub stress: f64,
    #[serde(default)]
    pub sanity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Talents {
    #[serde(default)]
    pub creativity: f64,
    #[serde(default)]
    pub focus: f64,
    #[serde(default)]
    pub logic: f64,
    #[serde(default)]
    pub resilience: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Skills {
    #[serde(default)]
    pub time_management: f64,
    #[serde(default)]
    pub reading: f64,
    #[serde(default)]
    pub writing: f64,
    #[serde(default)]
    pub experiment: f64,
    #[serde(default)]
    pub analysis: f64,
    #[serde(default)]
    pub presentation: f64,
}

/// Career bookkeeping. `reputation` is exempt from the zero floor and only
/// bounded by a very large ceiling; the meeting fields are gauges whose caps
/// come from the supervisor's meeting config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Career {
    #[serde(default)]
    pub supervisor_rel: f64,
    #[serde(default)]
    pub reputation: f64,
    #[serde(default)]
    pub meeting_expectation: f64,
    #[serde(default)]
    pub meeting_preparation: f64,
}

/// The full mutable stat record of one run. The same shape doubles as the
/// per-field cap table (see [`PlayerStats::caps_baseline`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerStats {
    #[serde(default)]
    pub energy: f64,
    #[serde(default)]
    pub funds: i64,
    #[serde(default)]
    pub physiological: Physiological,
    #[serde(default)]
    pub talents: Talents,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub career: Career,
}

impl PlayerStats {
    /// The fixed baseline every run starts from, before archetype modifiers.
    #[must_use]
    pub fn baseline() -> Self {
        Self {
            energy: 100.0,
            funds: INITIAL_FUNDS,
            physiological: Physiological {
                health: 100.0,
                stress: 10.0,
                sanity: 100.0,
            },
            talents: Talents {
                creativity: 30.0,
                focus: 30.0,
                logic: 30.0,
                resilience: 30.0,
            },
            skills: Skills {
                time_management: 20.0,
                reading: 20.0,
                writing: 20.0,
                experiment: 20.0,
                analysis: 20.0,
                presentation: 20.0,
            },
            career: Career {
                supervisor_rel: 25.0,
                reputation: 0.0,
                meeting_expectation: 20.0,
                meeting_preparation: 0.0,
            },
        }
    }

    /// The default cap table, before archetype cap modifiers and the
    /// supervisor's meeting config overwrite individual entries.
    #[must_use]
    pub fn caps_baseline() -> Self {
        Self {
            energy: 100.0,
            funds: FUNDS_CEILING,
            physiological: Physiological {
                health: 100.0,
                stress: 100.0,
                sanity: 100.0,
            },
            talents: Talents {
                creativity: 100.0,
                focus: 100.0,
                logic: 100.0,
                resilience: 100.0,
            },
            skills: Skills {
                time_management: 100.0,
                reading: 100.0,
                writing: 100.0,
                experiment: 100.0,
                analysis: 100.0,
                presentation: 100.0,
            },
            career: Career {
                supervisor_rel: 100.0,
                reputation: REPUTATION_CEILING,
                meeting_expectation: 100.0,
                meeting_preparation: 100.0,
            },
        }
    }
}

/// Sparse stat mutation. Every field defaults to zero, so catalog entries and
/// call sites only spell out the leaves they touch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct StatDelta {
    #[serde(default)]
    pub energy: f64,
    #[serde(default)]
    pub funds: i64,
    #[serde(default)]
    pub physiological: Physiological,
    #[serde(default)]
    pub talents: Talents,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub career: Career,
}

fn bump(value: &mut f64, delta: f64, cap: f64) {
    if delta != 0.0 {
        *value = (*value + delta).clamp(0.0, cap);
    }
}

/// Adds `delta` to `stats` leaf by leaf, clamping each touched field to
/// `[0, caps.<field>]`. `funds` has no bounds at all and `career.reputation`
/// only honors its ceiling; both may go negative.
pub fn apply_delta(stats: &mut PlayerStats, caps: &PlayerStats, delta: &StatDelta) {
    if delta.energy != 0.0 {
        stats.energy = (stats.energy + delta.energy).clamp(0.0, caps.energy);
    }
    stats.funds += delta.funds;

    bump(
        &mut stats.physiological.health,
        delta.physiological.health,
        caps.physiological.health,
    );
    bump(
        &mut stats.physiological.stress,
        delta.physiological.stress,
        caps.physiological.stress,
    );
    bump(
        &mut stats.physiological.sanity,
        delta.physiological.sanity,
        caps.physiological.sanity,
    );

    bump(
        &mut stats.talents.creativity,
        delta.talents.creativity,
        caps.talents.creativity,
    );
    bump(&mut stats.talents.focus, delta.talents.focus, caps.talents.focus);
    bump(&mut stats.talents.logic, delta.talents.logic, caps.talents.logic);
    bump(
        &mut stats.talents.resilience,
        delta.talents.resilience,
        caps.talents.resilience,
    );

    bump(
        &mut stats.skills.time_management,
        delta.skills.time_management,
        caps.skills.time_management,
    );
    bump(&mut stats.skills.reading, delta.skills.reading, caps.skills.reading);
    bump(&mut stats.skills.writing, delta.skills.writing, caps.skills.writing);
    bump(
        &mut stats.skills.experiment,
        delta.skills.experiment,
        caps.skills.experiment,
    );
    bump(&mut stats.skills.analysis, delta.skills.analysis, caps.skills.analysis);
    bump(
        &mut stats.skills.presentation,
        delta.skills.presentation,
        caps.skills.presentation,
    );

    bump(
        &mut stats.career.supervisor_rel,
        delta.career.supervisor_rel,
        caps.career.supervisor_rel,
    );
    if delta.career.reputation != 0.0 {
        stats.career.reputation =
            (stats.career.reputation + delta.career.reputation).min(caps.career.reputation);
    }
    bump(
        &mut stats.career.meeting_expectation,
        delta.career.meeting_expectation,
        caps.career.meeting_expectation,
    );
    bump(
        &mut stats.career.meeting_preparation,
        delta.career.meeting_preparation,
        caps.career.meeting_preparation,
    );
}

/// Weekly energy recovery from post-decay physiology. Healthy, sane and calm
/// students regenerate close to a full bar; wrecked ones barely recover.
#[must_use]
pub fn energy_recovery(stats: &PlayerStats, caps: &PlayerStats) -> f64 {
    let health_ratio = stats.physiological.health / caps.physiological.health;
    let sanity_ratio = stats.physiological.sanity / caps.physiological.sanity;
    let stress_ratio = stats.physiological.stress / caps.physiological.stress;

    let mut pct = RECOVERY_BASE;
    pct += (health_ratio - RECOVERY_HEALTH_PIVOT) * RECOVERY_HEALTH_WEIGHT;
    pct += (sanity_ratio - RECOVERY_SANITY_PIVOT) * RECOVERY_SANITY_WEIGHT;
    pct += (RECOVERY_STRESS_PIVOT - stress_ratio) * RECOVERY_STRESS_WEIGHT;
    pct = pct.clamp(RECOVERY_MIN_PCT, RECOVERY_MAX_PCT);

    (caps.energy * pct).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(stress: f64, sanity: f64) -> StatDelta {
        StatDelta {
            physiological: Physiological {
                stress,
                sanity,
                ..Physiological::default()
            },
            ..StatDelta::default()
        }
    }

    #[test]
    fn delta_clamps_to_caps() {
        let caps = PlayerStats::caps_baseline();
        let mut stats = PlayerStats::baseline();

        apply_delta(&mut stats, &caps, &delta(500.0, -500.0));
        assert!((stats.physiological.stress - caps.physiological.stress).abs() < f64::EPSILON);
        assert!(stats.physiological.sanity.abs() < f64::EPSILON);
    }

    #[test]
    fn funds_may_go_negative() {
        let caps = PlayerStats::caps_baseline();
        let mut stats = PlayerStats::baseline();
        let d = StatDelta {
            funds: -10_000,
            ..StatDelta::default()
        };
        apply_delta(&mut stats, &caps, &d);
        assert_eq!(stats.funds, INITIAL_FUNDS - 10_000);
    }

    #[test]
    fn reputation_skips_floor_but_honors_ceiling() {
        let caps = PlayerStats::caps_baseline();
        let mut stats = PlayerStats::baseline();

        let down = StatDelta {
            career: Career {
                reputation: -50.0,
                ..Career::default()
            },
            ..StatDelta::default()
        };
        apply_delta(&mut stats, &caps, &down);
        assert!((stats.career.reputation - -50.0).abs() < f64::EPSILON);

        let up = StatDelta {
            career: Career {
                reputation: 2_000_000.0,
                ..Career::default()
            },
            ..StatDelta::default()
        };
        apply_delta(&mut stats, &caps, &up);
        assert!((stats.career.reputation - REPUTATION_CEILING).abs() < f64::EPSILON);
    }

    #[test]
    fn sparse_delta_touches_only_named_fields() {
        let caps = PlayerStats::caps_baseline();
        let mut stats = PlayerStats::baseline();
        let before = stats;

        apply_delta(&mut stats, &caps, &delta(7.0, 0.0));
        assert!((stats.physiological.stress - 17.0).abs() < f64::EPSILON);
        assert!((stats.physiological.sanity - before.physiological.sanity).abs() < f64::EPSILON);
        assert!((stats.talents.logic - before.talents.logic).abs() < f64::EPSILON);
        assert_eq!(stats.funds, before.funds);
    }

    #[test]
    fn recovery_stays_within_bounds() {
        let caps = PlayerStats::caps_baseline();

        let mut wrecked = PlayerStats::baseline();
        wrecked.physiological.health = 0.0;
        wrecked.physiological.sanity = 0.0;
        wrecked.physiological.stress = caps.physiological.stress;
        let floor = energy_recovery(&wrecked, &caps);
        assert!((floor - (caps.energy * RECOVERY_MIN_PCT).round()).abs() < f64::EPSILON);

        let mut pristine = PlayerStats::baseline();
        pristine.physiological.stress = 0.0;
        let ceiling = energy_recovery(&pristine, &caps);
        assert!(ceiling <= caps.energy);
        assert!(ceiling >= floor);
    }

    #[test]
    fn recovery_matches_formula_at_baseline() {
        let caps = PlayerStats::caps_baseline();
        let stats = PlayerStats::baseline();
        // health 100/100, sanity 100/100, stress 10/100
        // 0.5 + 0.3*0.5 + 0.3*0.5 + 0.2*0.6 = 0.92
        assert!((energy_recovery(&stats, &caps) - 92.0).abs() < f64::EPSILON);
    }

    #[test]
    fn delta_round_trips_through_json() {
        let d = delta(3.0, -2.0);
        let text = serde_json::to_string(&d).unwrap();
        let back: StatDelta = serde_json::from_str(&text).unwrap();
        assert_eq!(d, back);
    }
}
