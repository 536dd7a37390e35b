//! The weekly tick: the single state machine step that ages the run by one
//! week. Triggers are picked before the tick from a fixed priority ladder,
//! then the bookkeeping runs in a fixed order so every week reads the same.

use crate::constants::{
    AMBIENT_FLAVOR_CHANCE, CITATION_QUALITY_DIVISOR, CITATION_RANDOM_SPAN, DEBT_ANXIETY_SANITY,
    DEBT_ANXIETY_STRESS, DEBT_OVERDUE_REPUTATION, DEBT_OVERDUE_SANITY, DEBT_OVERDUE_STRESS,
    DEBT_WEEKLY_INTEREST, EMBEZZLE_LAB_DRAIN, FORCED_MEETING_REL, FORCED_MEETING_STRESS,
    FUNDING_CRISIS_REL, FUNDING_CRISIS_SANITY, FUNDING_CRISIS_STRESS, GRANT_HUGE_AWARD,
    GRANT_MODERATE_AWARD, GRANT_REJECT_STRESS, GRANT_REP_WEIGHT, GRANT_SMALL_AWARD,
    GRANT_TIER_HUGE_SCORE, GRANT_TIER_MODERATE_SCORE, GRANT_TIER_SMALL_SCORE,
    GRANT_WEEKLY_PROGRESS, LAB_COST_FLUCTUATION_MIN, LAB_COST_FLUCTUATION_SPAN,
    LAB_COST_REP_LINEAR, LAB_COST_REP_QUADRATIC, LOG_AMBIENT_PREFIX, LOG_DEBT_INTEREST,
    LOG_DEBT_OVERDUE, LOG_EVENT_PREFIX, LOG_FUNDING_CRISIS, LOG_GRANT_TIER_PREFIX,
    LOG_LAB_BANKRUPT, LOG_LAB_EMBEZZLED, LOG_LAB_STIPEND, LOG_MEETING_FORCED, LOG_MOOD_SWING,
    LOG_RENT_PAID, LOG_SCANDAL, LOG_WEEK_END, RANDOM_EVENT_CHANCE, SCANDAL_REPUTATION,
    SCANDAL_SANITY, SCANDAL_STRESS, WEEKLY_HEALTH_DECAY, WEEKLY_LAB_COST, WEEKLY_SANITY_DECAY,
    WEEKLY_STRESS_RELIEF,
};
use crate::events::{EventList, RandomEvent};
use crate::flavor::{FlavorProvider, ambient_or_fallback};
use crate::session::CommandError;
use crate::state::{GamePhase, GameState};
use crate::stats::{Career, Physiological, StatDelta, apply_delta, energy_recovery};

/// The one disruption (at most) that colors a given week.
#[derive(Debug, Clone, PartialEq)]
enum WeeklyTrigger {
    ForcedMeeting,
    FundingCrisis,
    Scandal,
    Event(RandomEvent),
}

fn predicts_forced_meeting(state: &GameState) -> bool {
    let Some(profile) = state.supervisor_profile.as_ref() else {
        return false;
    };
    state.stats.career.meeting_expectation + profile.meeting.expectation_growth
        >= state.caps.career.meeting_expectation
}

fn lab_is_dry(state: &GameState) -> bool {
    state.supervisor.is_some_and(|s| s.funding <= 0)
}

fn scandal_breaks(state: &mut GameState) -> bool {
    let chance = state
        .supervisor_profile
        .as_ref()
        .map_or(0.0, |p| p.hooks.scandal_chance);
    chance > 0.0 && state.roll_unit() < chance
}

fn draw_event(state: &mut GameState, events: &EventList) -> Option<RandomEvent> {
    if state.roll_unit() >= RANDOM_EVENT_CHANCE {
        return None;
    }
    let roll = state.roll_below(events.total_weight());
    events.choose_weighted(roll).cloned()
}

/// Walk the trigger ladder top to bottom and keep the first match. Evaluated
/// against pre-tick state: the forced-meeting check uses this week's
/// predicted expectation, the crisis check the funding the lab woke up with.
fn select_trigger(state: &mut GameState, events: &EventList) -> Option<WeeklyTrigger> {
    if predicts_forced_meeting(state) {
        return Some(WeeklyTrigger::ForcedMeeting);
    }
    if lab_is_dry(state) {
        return Some(WeeklyTrigger::FundingCrisis);
    }
    if scandal_breaks(state) {
        return Some(WeeklyTrigger::Scandal);
    }
    draw_event(state, events).map(WeeklyTrigger::Event)
}

fn grow_citations(state: &mut GameState) {
    for index in 0..state.papers.len() {
        if !state.papers[index].accepted {
            continue;
        }
        let jitter = state.roll_range(0.0, CITATION_RANDOM_SPAN);
        let paper = &mut state.papers[index];
        paper.citations +=
            (paper.citation_factor + paper.quality / CITATION_QUALITY_DIVISOR + jitter).floor();
    }
}

fn service_debt(state: &mut GameState) {
    if state.player_debt <= 0 {
        return;
    }
    let interest = ((state.player_debt as f64) * DEBT_WEEKLY_INTEREST).ceil() as i64;
    state.player_debt += interest;

    let caps = state.caps;
    let overdue = state.loan_deadline.is_some_and(|deadline| state.turn > deadline);
    let toll = if overdue {
        state.push_log(LOG_DEBT_OVERDUE);
        StatDelta {
            physiological: Physiological {
                stress: DEBT_OVERDUE_STRESS,
                sanity: DEBT_OVERDUE_SANITY,
                ..Physiological::default()
            },
            career: Career {
                reputation: DEBT_OVERDUE_REPUTATION,
                ..Career::default()
            },
            ..StatDelta::default()
        }
    } else {
        state.push_log(LOG_DEBT_INTEREST);
        StatDelta {
            physiological: Physiological {
                stress: DEBT_ANXIETY_STRESS,
                sanity: DEBT_ANXIETY_SANITY,
                ..Physiological::default()
            },
            ..StatDelta::default()
        }
    };
    apply_delta(&mut state.stats, &caps, &toll);
}

fn run_lab_economics(state: &mut GameState) {
    let Some(mut sup) = state.supervisor else {
        return;
    };
    let hooks = state
        .supervisor_profile
        .as_ref()
        .map(|p| p.hooks)
        .unwrap_or_default();

    let rep_mod = LAB_COST_REP_QUADRATIC * sup.reputation * sup.reputation
        + LAB_COST_REP_LINEAR * sup.reputation;
    let fluctuation = LAB_COST_FLUCTUATION_MIN + state.roll_unit() * LAB_COST_FLUCTUATION_SPAN;
    let cost = ((WEEKLY_LAB_COST + rep_mod) * fluctuation).floor() as i64;
    sup.funding = (sup.funding - cost).max(0);

    if let Some(stipend) = hooks.weekly_stipend {
        sup.funding += stipend;
        state.push_log(LOG_LAB_STIPEND);
    }
    if let Some(hush_money) = hooks.embezzlement {
        if sup.funding >= EMBEZZLE_LAB_DRAIN {
            sup.funding -= EMBEZZLE_LAB_DRAIN;
            state.stats.funds += hush_money;
            state.push_log(LOG_LAB_EMBEZZLED);
        }
    }

    state.funding_crisis = sup.funding <= 0;
    if state.funding_crisis {
        let caps = state.caps;
        apply_delta(
            &mut state.stats,
            &caps,
            &StatDelta {
                physiological: Physiological {
                    stress: FUNDING_CRISIS_STRESS,
                    sanity: FUNDING_CRISIS_SANITY,
                    ..Physiological::default()
                },
                career: Career {
                    supervisor_rel: FUNDING_CRISIS_REL,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
        );
        state.push_log(LOG_LAB_BANKRUPT);
    }

    if let Some(progress) = sup.grant_progress {
        let progress = progress + GRANT_WEEKLY_PROGRESS;
        if progress >= 100.0 {
            let score = sup.reputation * GRANT_REP_WEIGHT + state.roll_range(0.0, 100.0);
            let (award, tier) = if score < GRANT_TIER_SMALL_SCORE {
                (0, "rejected")
            } else if score < GRANT_TIER_MODERATE_SCORE {
                (GRANT_SMALL_AWARD, "small")
            } else if score < GRANT_TIER_HUGE_SCORE {
                (GRANT_MODERATE_AWARD, "moderate")
            } else {
                (GRANT_HUGE_AWARD, "huge")
            };
            if award == 0 {
                let caps = state.caps;
                apply_delta(
                    &mut state.stats,
                    &caps,
                    &StatDelta {
                        physiological: Physiological {
                            stress: GRANT_REJECT_STRESS,
                            ..Physiological::default()
                        },
                        ..StatDelta::default()
                    },
                );
            }
            sup.funding += award;
            sup.grant_progress = None;
            state.push_log(&format!("{LOG_GRANT_TIER_PREFIX}{tier}"));
        } else {
            sup.grant_progress = Some(progress);
        }
    }

    state.supervisor = Some(sup);
}

fn apply_weekly_modifiers(state: &mut GameState) {
    let caps = state.caps;
    if let Some(effect) = state.supervisor_profile.as_ref().map(|p| p.weekly_effect) {
        apply_delta(&mut state.stats, &caps, &effect);
    }

    // Volatile advisors reroll the relationship every week.
    let swing = state
        .supervisor_profile
        .as_ref()
        .and_then(|p| p.hooks.relationship_swing);
    if let Some(half_width) = swing {
        let change = (state.roll_unit() * (half_width * 2.0 + 1.0)).floor() - half_width;
        apply_delta(
            &mut state.stats,
            &caps,
            &StatDelta {
                career: Career {
                    supervisor_rel: change,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
        );
        if change.abs() >= 5.0 {
            state.push_log(LOG_MOOD_SWING);
        }
    }

    if let Some(effect) = state.background.as_ref().map(|b| b.weekly_effect) {
        apply_delta(&mut state.stats, &caps, &effect);
    }
}

fn settle_meeting_pressure(state: &mut GameState, forced: bool) {
    let caps = state.caps;
    if forced {
        apply_delta(
            &mut state.stats,
            &caps,
            &StatDelta {
                physiological: Physiological {
                    stress: FORCED_MEETING_STRESS,
                    ..Physiological::default()
                },
                career: Career {
                    supervisor_rel: FORCED_MEETING_REL,
                    ..Career::default()
                },
                ..StatDelta::default()
            },
        );
        state.stats.career.meeting_expectation = 0.0;
        state.stats.career.meeting_preparation = 0.0;
        state.push_log(LOG_MEETING_FORCED);
        return;
    }

    let growth = state
        .supervisor_profile
        .as_ref()
        .map_or(0.0, |p| p.meeting.expectation_growth);
    state.stats.career.meeting_expectation = (state.stats.career.meeting_expectation + growth)
        .min(state.caps.career.meeting_expectation);
}

fn apply_trigger_event(state: &mut GameState, trigger: &WeeklyTrigger) {
    let caps = state.caps;
    match trigger {
        WeeklyTrigger::ForcedMeeting => {}
        WeeklyTrigger::FundingCrisis => {
            apply_delta(
                &mut state.stats,
                &caps,
                &StatDelta {
                    physiological: Physiological {
                        stress: FUNDING_CRISIS_STRESS,
                        sanity: FUNDING_CRISIS_SANITY,
                        ..Physiological::default()
                    },
                    career: Career {
                        supervisor_rel: FUNDING_CRISIS_REL,
                        ..Career::default()
                    },
                    ..StatDelta::default()
                },
            );
            state.push_log(LOG_FUNDING_CRISIS);
        }
        WeeklyTrigger::Scandal => {
            apply_delta(
                &mut state.stats,
                &caps,
                &StatDelta {
                    physiological: Physiological {
                        stress: SCANDAL_STRESS,
                        sanity: SCANDAL_SANITY,
                        ..Physiological::default()
                    },
                    career: Career {
                        reputation: SCANDAL_REPUTATION,
                        ..Career::default()
                    },
                    ..StatDelta::default()
                },
            );
            if let Some(sup) = state.supervisor.as_mut() {
                sup.funding = 0;
            }
            state.funding_crisis = true;
            state.push_log(LOG_SCANDAL);
        }
        WeeklyTrigger::Event(event) => {
            apply_delta(&mut state.stats, &caps, &event.effect);
            state.current_rent += event.special.rent_change;
            if event.special.mandatory_progress != 0.0 {
                if let Some(task) = state.milestone.as_mut() {
                    task.progress =
                        (task.progress + event.special.mandatory_progress).min(task.total_effort);
                }
            }
            if event.special.lab_funding_change != 0 {
                if let Some(sup) = state.supervisor.as_mut() {
                    sup.funding = (sup.funding + event.special.lab_funding_change).max(0);
                }
            }
            state.push_log(&format!("{LOG_EVENT_PREFIX}{}", event.id));
        }
    }
}

/// Run one week. The milestone deadline pre-empts everything; otherwise the
/// tick applies decay, economics, pressure, recovery and at most one trigger,
/// then checks for an ending and advances the week counter.
///
/// # Errors
///
/// Returns [`CommandError::WrongPhase`] outside the playing phase.
pub fn advance_week<F: FlavorProvider>(
    state: &mut GameState,
    events: &EventList,
    flavor: &F,
) -> Result<(), CommandError> {
    if state.phase != GamePhase::Playing {
        return Err(CommandError::WrongPhase);
    }

    if let Some(task) = state.milestone.as_ref() {
        if state.turn >= task.deadline {
            state.phase = GamePhase::ConfirmationReview;
            return Ok(());
        }
    }

    let trigger = select_trigger(state, events);

    grow_citations(state);

    state.stats.funds -= state.current_rent;
    state.push_log(LOG_RENT_PAID);

    let caps = state.caps;
    apply_delta(
        &mut state.stats,
        &caps,
        &StatDelta {
            physiological: Physiological {
                stress: -WEEKLY_STRESS_RELIEF,
                sanity: -WEEKLY_SANITY_DECAY,
                health: -WEEKLY_HEALTH_DECAY,
            },
            ..StatDelta::default()
        },
    );

    service_debt(state);
    run_lab_economics(state);
    apply_weekly_modifiers(state);
    settle_meeting_pressure(state, trigger == Some(WeeklyTrigger::ForcedMeeting));

    let recovered = energy_recovery(&state.stats, &state.caps);
    state.stats.energy = (state.stats.energy + recovered).min(state.caps.energy);

    if let Some(trigger) = &trigger {
        apply_trigger_event(state, trigger);
    } else if state.roll_unit() < AMBIENT_FLAVOR_CHANCE {
        let line = ambient_or_fallback(flavor, &state.stats.physiological);
        state.push_log(&format!("{LOG_AMBIENT_PREFIX}{line}"));
    }

    state.check_game_over();
    state.turn += 1;
    state.push_log(LOG_WEEK_END);
    Ok(())
}
