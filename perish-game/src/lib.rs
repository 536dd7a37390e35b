//! Perish Game Engine
//!
//! Platform-agnostic core game logic for Publish or Perish, a turn-based
//! grad-school survival sim. This crate provides all game mechanics without
//! UI or platform-specific dependencies: the weekly tick, the stat and
//! resource model, the research pipeline, the journal and peer-review
//! machinery, and the loadable content catalogs that drive them.

pub mod actions;
pub mod backgrounds;
pub mod constants;
pub mod events;
pub mod flavor;
pub mod journals;
pub mod milestones;
pub mod research;
pub mod session;
pub mod state;
pub mod stats;
pub mod submission;
pub mod supervisors;
pub mod weekly;

// Re-export commonly used types
pub use actions::{ActionCategory, ActionCost, ActionList, ActionSpecial, GameAction};
pub use backgrounds::{BackgroundList, BackgroundOption, Personality};
pub use events::{EventList, EventSpecial, RandomEvent};
pub use flavor::{FlavorError, FlavorProvider, LocalFlavor, TopicFlavor};
pub use journals::{Journal, JournalList, JournalRequirements};
pub use milestones::{MandatoryTask, committee_score};
pub use research::manuscript_quality;
pub use session::{Catalogs, CommandError, FinalizeOutcome, GameEngine, GameSession};
pub use state::{
    Ending, GamePhase, GameState, Paper, PendingReview, ProjectStage, ResearchIdea,
    ResearchProject, ReviewKind, RunMetrics, SupervisorState,
};
pub use stats::{
    Career, PlayerStats, Physiological, Skills, StatDelta, Talents, apply_delta, energy_recovery,
};
pub use submission::{ReviewDecision, SubmissionVerdict, acceptance_percent};
pub use supervisors::{MeetingConfig, SupervisorHooks, SupervisorList, SupervisorProfile};
pub use weekly::advance_week;
