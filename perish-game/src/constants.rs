//! Centralized balance and tuning constants for the Publish or Perish core.
//!
//! These values define the deterministic math for the simulation. Keeping
//! them together ensures gameplay can only be adjusted via code changes
//! reviewed in version control, rather than through external JSON assets.

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_RUN_START: &str = "log.run.start";
pub(crate) const LOG_WEEK_END: &str = "log.week.end";
pub(crate) const LOG_RENT_PAID: &str = "log.rent.paid";
pub(crate) const LOG_DEBT_INTEREST: &str = "log.debt.interest";
pub(crate) const LOG_DEBT_OVERDUE: &str = "log.debt.overdue";
pub(crate) const LOG_LOAN_TAKEN: &str = "log.loan.taken";
pub(crate) const LOG_LOAN_REPAID: &str = "log.loan.repaid";
pub(crate) const LOG_LAB_BANKRUPT: &str = "log.lab.bankrupt";
pub(crate) const LOG_LAB_STIPEND: &str = "log.lab.stipend";
pub(crate) const LOG_LAB_EMBEZZLED: &str = "log.lab.embezzled";
pub(crate) const LOG_GRANT_STARTED: &str = "log.grant.started";
pub(crate) const LOG_GRANT_BUSY: &str = "log.grant.in-flight";
pub(crate) const LOG_GRANT_TIER_PREFIX: &str = "log.grant.tier.";
pub(crate) const LOG_MOOD_SWING: &str = "log.supervisor.mood-swing";
pub(crate) const LOG_MEETING_FORCED: &str = "log.meeting.forced";
pub(crate) const LOG_MEETING_HELD: &str = "log.meeting.held";
pub(crate) const LOG_MEETING_UNPREPARED: &str = "log.meeting.unprepared";
pub(crate) const LOG_EVENT_PREFIX: &str = "log.event.";
pub(crate) const LOG_SCANDAL: &str = "log.event.scandal";
pub(crate) const LOG_FUNDING_CRISIS: &str = "log.event.funding-crisis";
pub(crate) const LOG_AMBIENT_PREFIX: &str = "log.ambient:";
pub(crate) const LOG_ACTION_PREFIX: &str = "log.action.";
pub(crate) const LOG_ACTION_TOO_TIRED: &str = "log.action.too-tired";
pub(crate) const LOG_ACTION_TOO_BROKE: &str = "log.action.too-broke";
pub(crate) const LOG_IDEA_SPARK: &str = "log.idea.spark";
pub(crate) const LOG_IDEA_BACKLOG_FULL: &str = "log.idea.backlog-full";
pub(crate) const LOG_PROJECT_STARTED: &str = "log.project.started";
pub(crate) const LOG_PROJECT_DENIED_FUNDING: &str = "log.project.denied-funding";
pub(crate) const LOG_PROJECT_BUSY: &str = "log.project.busy";
pub(crate) const LOG_RESEARCH_PROGRESS: &str = "log.research.progress";
pub(crate) const LOG_RESEARCH_SETBACK: &str = "log.research.setback";
pub(crate) const LOG_RESEARCH_THROTTLED: &str = "log.research.throttled";
pub(crate) const LOG_RESULTS_BOUGHT: &str = "log.research.results-bought";
pub(crate) const LOG_DATA_MASSAGED: &str = "log.research.data-massaged";
pub(crate) const LOG_SUBMIT_PREFIX: &str = "log.submit.";
pub(crate) const LOG_SUBMIT_NO_FUNDS: &str = "log.submit.no-oa-funds";
pub(crate) const LOG_PAPER_ACCEPTED: &str = "log.paper.accepted";
pub(crate) const LOG_PAPER_REJECTED: &str = "log.paper.rejected";
pub(crate) const LOG_REVISION_STARTED: &str = "log.revision.started";
pub(crate) const LOG_REBUTTAL_SENT: &str = "log.rebuttal.sent";
pub(crate) const LOG_MILESTONE_WORK: &str = "log.milestone.work";
pub(crate) const LOG_MILESTONE_THROTTLED: &str = "log.milestone.throttled";
pub(crate) const LOG_MILESTONE_PASSED: &str = "log.milestone.passed";
pub(crate) const LOG_MILESTONE_FAILED: &str = "log.milestone.failed";
pub(crate) const LOG_GAME_OVER_PREFIX: &str = "log.game-over.";

// Run baseline -------------------------------------------------------------
pub(crate) const WEEKLY_RENT: i64 = 500;
pub(crate) const INITIAL_FUNDS: i64 = 3_000;
pub(crate) const FUNDS_CEILING: i64 = 999_999;
pub(crate) const REPUTATION_CEILING: f64 = 999_999.0;
pub(crate) const BROKE_THRESHOLD: i64 = -1_000;
pub(crate) const WIN_PAPERS: usize = 3;
pub(crate) const WIN_REPUTATION: f64 = 500.0;
pub(crate) const COMPAT_BASE_BONUS: f64 = 20.0;
pub(crate) const COMPAT_DIFF_SCALE: f64 = 5.0;
pub(crate) const STARTING_REL_CAP: f64 = 50.0;
pub(crate) const BACKGROUND_DEBT_DEADLINE_WEEKS: u32 = 24;

// Weekly decay and debt ----------------------------------------------------
pub(crate) const WEEKLY_STRESS_RELIEF: f64 = 5.0;
pub(crate) const WEEKLY_SANITY_DECAY: f64 = 2.0;
pub(crate) const WEEKLY_HEALTH_DECAY: f64 = 1.0;
pub(crate) const DEBT_WEEKLY_INTEREST: f64 = 0.01;
pub(crate) const DEBT_OVERDUE_STRESS: f64 = 20.0;
pub(crate) const DEBT_OVERDUE_REPUTATION: f64 = -5.0;
pub(crate) const DEBT_OVERDUE_SANITY: f64 = -5.0;
pub(crate) const DEBT_ANXIETY_STRESS: f64 = 2.0;
pub(crate) const DEBT_ANXIETY_SANITY: f64 = -1.0;
pub(crate) const LOAN_PRINCIPAL: i64 = 5_000;
pub(crate) const LOAN_TERM_WEEKS: u32 = 20;

// Lab economics ------------------------------------------------------------
pub(crate) const WEEKLY_LAB_COST: f64 = 2_000.0;
pub(crate) const LAB_COST_REP_QUADRATIC: f64 = 0.25;
pub(crate) const LAB_COST_REP_LINEAR: f64 = 25.0;
pub(crate) const LAB_COST_FLUCTUATION_MIN: f64 = 0.8;
pub(crate) const LAB_COST_FLUCTUATION_SPAN: f64 = 0.4;
pub(crate) const FUNDING_CRISIS_STRESS: f64 = 10.0;
pub(crate) const FUNDING_CRISIS_SANITY: f64 = -10.0;
pub(crate) const FUNDING_CRISIS_REL: f64 = -5.0;
pub(crate) const GRANT_WEEKLY_PROGRESS: f64 = 20.0;
pub(crate) const GRANT_REP_WEIGHT: f64 = 0.7;
pub(crate) const GRANT_REJECT_STRESS: f64 = 15.0;
pub(crate) const GRANT_TIER_SMALL_SCORE: f64 = 40.0;
pub(crate) const GRANT_TIER_MODERATE_SCORE: f64 = 90.0;
pub(crate) const GRANT_TIER_HUGE_SCORE: f64 = 140.0;
pub(crate) const GRANT_SMALL_AWARD: i64 = 5_000;
pub(crate) const GRANT_MODERATE_AWARD: i64 = 25_000;
pub(crate) const GRANT_HUGE_AWARD: i64 = 100_000;

pub(crate) const EMBEZZLE_LAB_DRAIN: i64 = 2_000;

// Meetings and weekly triggers ---------------------------------------------
pub(crate) const FORCED_MEETING_STRESS: f64 = 25.0;
pub(crate) const FORCED_MEETING_REL: f64 = -15.0;
pub(crate) const MEETING_PREP_REQUIRED_RATIO: f64 = 0.9;
pub(crate) const MEETING_REL_BONUS: f64 = 10.0;
pub(crate) const SCANDAL_STRESS: f64 = 50.0;
pub(crate) const SCANDAL_SANITY: f64 = -50.0;
pub(crate) const SCANDAL_REPUTATION: f64 = -50.0;
pub(crate) const RANDOM_EVENT_CHANCE: f64 = 0.30;
pub(crate) const AMBIENT_FLAVOR_CHANCE: f64 = 0.05;

// Energy recovery ----------------------------------------------------------
pub(crate) const RECOVERY_BASE: f64 = 0.50;
pub(crate) const RECOVERY_HEALTH_WEIGHT: f64 = 0.5;
pub(crate) const RECOVERY_SANITY_WEIGHT: f64 = 0.5;
pub(crate) const RECOVERY_STRESS_WEIGHT: f64 = 0.6;
pub(crate) const RECOVERY_HEALTH_PIVOT: f64 = 0.7;
pub(crate) const RECOVERY_SANITY_PIVOT: f64 = 0.7;
pub(crate) const RECOVERY_STRESS_PIVOT: f64 = 0.3;
pub(crate) const RECOVERY_MIN_PCT: f64 = 0.05;
pub(crate) const RECOVERY_MAX_PCT: f64 = 1.0;

// Research pipeline --------------------------------------------------------
pub(crate) const IDEA_BACKLOG_CAP: usize = 5;
pub(crate) const DEVELOP_IDEA_ENERGY: f64 = 20.0;
pub(crate) const DEVELOP_IDEA_STRESS: f64 = 10.0;
pub(crate) const HIGH_RESOURCE_THRESHOLD: f64 = 70.0;
pub(crate) const HIGH_RESOURCE_FUNDING_FLOOR: i64 = 5_000;
pub(crate) const RESEARCH_BASE_ENERGY: f64 = 15.0;
pub(crate) const RESEARCH_RESOURCE_COST_SCALE: f64 = 0.15;
pub(crate) const RESEARCH_TIME_MGMT_DISCOUNT: f64 = 0.1;
pub(crate) const RESEARCH_MIN_ENERGY: f64 = 5.0;
pub(crate) const RESEARCH_BASE_PROGRESS: f64 = 8.0;
pub(crate) const RESEARCH_FAILURE_FLOOR: f64 = 5.0;
pub(crate) const RESEARCH_FAILURE_CEILING: f64 = 75.0;
pub(crate) const REVISION_RISK_FACTOR: f64 = 0.5;
pub(crate) const REVISION_PROGRESS_BOOST: f64 = 1.2;
pub(crate) const SETBACK_STRESS: f64 = 15.0;
pub(crate) const SETBACK_SANITY: f64 = -5.0;
pub(crate) const SETBACK_RESILIENCE: f64 = 2.0;
pub(crate) const PROGRESS_STRESS: f64 = 5.0;
pub(crate) const PROGRESS_SKILL_GAIN: f64 = 0.5;
pub(crate) const PROGRESS_PREP_BASE: f64 = 10.0;
pub(crate) const PROJECT_TARGET: f64 = 100.0;
pub(crate) const QUALITY_FLOOR: f64 = 10.0;
pub(crate) const QUALITY_CEILING: f64 = 100.0;

// Submission and review ----------------------------------------------------
pub(crate) const SUBMISSION_REP_BONUS: f64 = 0.005;
pub(crate) const MINOR_REVISION_SCORE: f64 = 0.7;
pub(crate) const MAJOR_REVISION_SCORE: f64 = 0.4;
pub(crate) const REVISION_REQ_MINOR: f64 = 30.0;
pub(crate) const REVISION_REQ_MAJOR: f64 = 60.0;
pub(crate) const REVISION_REQ_RESUBMIT: f64 = 90.0;
pub(crate) const REBUT_ENERGY: f64 = 10.0;
pub(crate) const REBUT_STRESS: f64 = 25.0;
pub(crate) const REBUT_BASE_CHANCE: f64 = 30.0;
pub(crate) const REBUT_MINOR_CHANCE: f64 = 60.0;
pub(crate) const REBUT_LUCKY_CHANCE: f64 = 0.2;
pub(crate) const REBUT_LUCKY_BONUS: f64 = 40.0;
pub(crate) const ACCEPT_STRESS_RELIEF: f64 = 20.0;
pub(crate) const ACCEPT_LAB_FUNDING: i64 = 20_000;
pub(crate) const ACCEPT_SUPERVISOR_REP: f64 = 2.0;
pub(crate) const ACCEPT_REL_BONUS: f64 = 5.0;
pub(crate) const ACCEPT_SANITY_BONUS: f64 = 10.0;
pub(crate) const ACCEPT_PRESSURE_RELIEF: f64 = 50.0;
pub(crate) const REJECT_STRESS: f64 = 15.0;
pub(crate) const REJECT_SANITY: f64 = -10.0;
pub(crate) const REJECT_RESILIENCE: f64 = 2.0;
pub(crate) const REJECT_WRITING_GAIN: f64 = 1.0;
pub(crate) const PREDATORY_REP_PENALTY: f64 = -5.0;
pub(crate) const DISPLAY_CHANCE_FLOOR: f64 = 5.0;
pub(crate) const DISPLAY_CHANCE_CEILING: f64 = 95.0;
pub(crate) const DISPLAY_CHANCE_SURE: f64 = 99.0;
pub(crate) const DISPLAY_CHANCE_MISFIT: f64 = 5.0;

// Milestones ---------------------------------------------------------------
pub(crate) const MILESTONE_BASE_RATE: f64 = 0.1;
pub(crate) const MILESTONE_STRESS: f64 = 10.0;
pub(crate) const MILESTONE_WRITING_GAIN: f64 = 0.5;
pub(crate) const MILESTONE_PREP_GAIN: f64 = 20.0;
pub(crate) const MILESTONE_THROTTLED_PROGRESS: f64 = 1.0;
pub(crate) const MILESTONE_PASS_REPUTATION: f64 = 30.0;
pub(crate) const MILESTONE_PASS_STRESS_RELIEF: f64 = 20.0;
pub(crate) const COMMITTEE_BASE_SCORE: f64 = 40.0;
pub(crate) const COMMITTEE_REL_WEIGHT: f64 = 0.5;
pub(crate) const COMMITTEE_REP_WEIGHT: f64 = 0.2;
pub(crate) const COMMITTEE_CITATION_WEIGHT: f64 = 3.0;
pub(crate) const COMMITTEE_PASS_SCORE: f64 = 75.0;
pub(crate) const MILESTONE_COMPLETE_RATIO: f64 = 0.995;

// Exclusive action tuning --------------------------------------------------
pub(crate) const PUSH_FUNDING_BASE_STRESS: f64 = 20.0;
pub(crate) const PUSH_FUNDING_BASE_SANITY: f64 = 20.0;
pub(crate) const PUSH_FUNDING_MIN_COST: f64 = 5.0;
pub(crate) const PUSH_FUNDING_SKILL_DIVISOR: f64 = 5.0;
pub(crate) const PATRON_REL_GAIN: f64 = 5.0;
pub(crate) const SCALED_ACTION_BASE_ENERGY: f64 = 20.0;
pub(crate) const SCALED_ACTION_MIN_ENERGY: f64 = 5.0;
pub(crate) const SCALED_ACTION_DIVISOR: f64 = 10.0;
pub(crate) const BUY_RESULTS_COST: i64 = 5_000;
pub(crate) const BUY_RESULTS_PROGRESS: f64 = 15.0;
pub(crate) const FABRICATION_PROGRESS: f64 = 10.0;

// Citations ----------------------------------------------------------------
pub(crate) const CITATION_QUALITY_DIVISOR: f64 = 20.0;
pub(crate) const CITATION_RANDOM_SPAN: f64 = 2.0;
