//! The command surface a host drives the simulation through, plus the
//! catalog/engine plumbing that builds sessions.

use anyhow::Context as _;
use thiserror::Error;

use crate::actions::{ActionList, GameAction, perform_action};
use crate::backgrounds::BackgroundList;
use crate::events::EventList;
use crate::flavor::FlavorProvider;
use crate::journals::{Journal, JournalList};
use crate::milestones::{resolve_review, work_on_milestone};
use crate::research::{conduct_research, develop_idea, manuscript_quality};
use crate::state::{GamePhase, GameState, ProjectStage};
use crate::submission::{
    ReviewDecision, SubmissionVerdict, acceptance_percent, review_action, submit_to_journal,
};
use crate::weekly::advance_week;

/// Why a command was refused. Every refusal leaves the run untouched apart
/// from at most one user-visible log line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("not enough energy")]
    InsufficientEnergy,
    #[error("not enough personal funds")]
    InsufficientFunds,
    #[error("lab funding cannot cover this")]
    InsufficientLabFunding,
    #[error("command is not valid in the current phase")]
    WrongPhase,
    #[error("no active research project")]
    NoActiveProject,
    #[error("a project is already underway")]
    ProjectInProgress,
    #[error("the project is not finished")]
    ProjectUnfinished,
    #[error("a referee verdict is still waiting for an answer")]
    ReviewPending,
    #[error("no referee verdict to answer")]
    NoPendingReview,
    #[error("no mandatory task is pending")]
    NoMilestone,
    #[error("not prepared enough to face the supervisor")]
    Underprepared,
    #[error("a grant application is already in flight")]
    GrantInFlight,
    #[error("unknown id `{0}`")]
    UnknownId(String),
}

/// What wrapping up the active project amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FinalizeOutcome {
    /// A fresh manuscript of the given quality, ready for journal selection.
    ReadyToSubmit { quality: f64 },
    /// A finished revision went straight back to its journal.
    Resolved(SubmissionVerdict),
}

/// The full content surface of one game, loadable as a unit.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub backgrounds: BackgroundList,
    pub supervisors: crate::supervisors::SupervisorList,
    pub actions: ActionList,
    pub events: EventList,
    pub journals: JournalList,
}

impl Catalogs {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            backgrounds: BackgroundList::builtin(),
            supervisors: crate::supervisors::SupervisorList::builtin(),
            actions: ActionList::builtin(),
            events: EventList::builtin(),
            journals: JournalList::builtin(),
        }
    }

    /// Load every table from JSON payloads.
    ///
    /// # Errors
    ///
    /// Fails with context naming the offending table when a payload is
    /// malformed.
    pub fn from_json(
        backgrounds: &str,
        supervisors: &str,
        actions: &str,
        events: &str,
        journals: &str,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            backgrounds: BackgroundList::from_json(backgrounds)
                .context("parsing background catalog")?,
            supervisors: crate::supervisors::SupervisorList::from_json(supervisors)
                .context("parsing supervisor catalog")?,
            actions: ActionList::from_json(actions).context("parsing action catalog")?,
            events: EventList::from_json(events).context("parsing event pool")?,
            journals: JournalList::from_json(journals).context("parsing journal catalog")?,
        })
    }
}

/// One player-run: the state plus the content and flavor it is played
/// against. Commands either mutate the state as one unit or refuse cleanly.
#[derive(Debug)]
pub struct GameSession<F: FlavorProvider> {
    state: GameState,
    catalogs: Catalogs,
    flavor: F,
}

impl<F: FlavorProvider> GameSession<F> {
    #[must_use]
    pub fn new(catalogs: Catalogs, flavor: F, seed: u64) -> Self {
        Self {
            state: GameState::default().with_seed(seed),
            catalogs,
            flavor,
        }
    }

    /// Read-only snapshot for the display layer.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    fn require_playing(&self) -> Result<(), CommandError> {
        if self.state.phase == GamePhase::Playing {
            Ok(())
        } else {
            Err(CommandError::WrongPhase)
        }
    }

    fn find_action(&self, id: &str) -> Option<GameAction> {
        self.catalogs
            .actions
            .get_by_id(id)
            .cloned()
            .or_else(|| {
                self.state
                    .background
                    .as_ref()
                    .and_then(|b| b.exclusive_actions.iter().find(|a| a.id == id).cloned())
            })
            .or_else(|| {
                self.state
                    .supervisor_profile
                    .as_ref()
                    .and_then(|p| p.exclusive_actions.iter().find(|a| a.id == id).cloned())
            })
    }

    fn find_journal(&self, id: &str) -> Result<Journal, CommandError> {
        self.catalogs
            .journals
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| CommandError::UnknownId(id.to_string()))
    }

    /// Lock in a character and advisor and begin the run.
    ///
    /// # Errors
    ///
    /// Rejects outside the setup phase or for unknown catalog ids.
    pub fn start_run(
        &mut self,
        background_id: &str,
        supervisor_id: &str,
    ) -> Result<(), CommandError> {
        if self.state.phase != GamePhase::Setup {
            return Err(CommandError::WrongPhase);
        }
        let background = self
            .catalogs
            .backgrounds
            .get_by_id(background_id)
            .cloned()
            .ok_or_else(|| CommandError::UnknownId(background_id.to_string()))?;
        let profile = self
            .catalogs
            .supervisors
            .get_by_id(supervisor_id)
            .cloned()
            .ok_or_else(|| CommandError::UnknownId(supervisor_id.to_string()))?;
        self.state.start_run(&background, &profile);
        Ok(())
    }

    /// Throw the run away and return to setup on a fresh RNG stream.
    pub fn reset_run(&mut self) {
        let next_seed = self.state.seed.wrapping_add(1);
        log::debug!("run reset, reseeding {} -> {next_seed}", self.state.seed);
        self.state = GameState::default().with_seed(next_seed);
    }

    /// Age the run by one week.
    ///
    /// # Errors
    ///
    /// Rejects outside the playing phase.
    pub fn advance_week(&mut self) -> Result<(), CommandError> {
        advance_week(&mut self.state, &self.catalogs.events, &self.flavor)
    }

    /// Perform a catalog or archetype-exclusive action by id.
    ///
    /// # Errors
    ///
    /// Rejects outside the playing phase, for ids visible to no active
    /// archetype, and for any resolver gate or cost failure.
    pub fn perform_action(&mut self, action_id: &str) -> Result<(), CommandError> {
        self.require_playing()?;
        let action = self
            .find_action(action_id)
            .ok_or_else(|| CommandError::UnknownId(action_id.to_string()))?;
        perform_action(&mut self.state, &action, &self.flavor)
    }

    /// Commit to a notebook idea.
    ///
    /// # Errors
    ///
    /// Rejects outside the playing phase and per the research gates.
    pub fn develop_idea(&mut self, idea_id: u32) -> Result<(), CommandError> {
        self.require_playing()?;
        develop_idea(&mut self.state, idea_id)
    }

    /// Run a week of experiments on the active project.
    ///
    /// # Errors
    ///
    /// Rejects outside the playing phase and per the research gates.
    pub fn conduct_research(&mut self) -> Result<(), CommandError> {
        self.require_playing()?;
        conduct_research(&mut self.state)
    }

    /// Wrap up the active project. A fresh manuscript reports its quality
    /// and waits for journal selection; a finished revision resolves its
    /// resubmission on the spot.
    ///
    /// # Errors
    ///
    /// Rejects outside the playing phase, without a finished project, or
    /// when a revision's target journal is gone from the catalog.
    pub fn finalize_project(&mut self) -> Result<FinalizeOutcome, CommandError> {
        self.require_playing()?;
        let Some(project) = self.state.active_project.as_ref() else {
            return Err(CommandError::NoActiveProject);
        };
        if !project.is_complete() {
            return Err(CommandError::ProjectUnfinished);
        }
        match &project.stage {
            ProjectStage::Research => Ok(FinalizeOutcome::ReadyToSubmit {
                quality: manuscript_quality(&self.state, project),
            }),
            ProjectStage::Revision { journal_id, .. } => {
                let journal = self.find_journal(&journal_id.clone())?;
                let verdict = submit_to_journal(&mut self.state, &journal)?;
                Ok(FinalizeOutcome::Resolved(verdict))
            }
        }
    }

    /// Send the finished manuscript to a journal by id.
    ///
    /// # Errors
    ///
    /// Rejects outside the playing phase, for unknown journals, and per the
    /// submission gates.
    pub fn submit_to_journal(
        &mut self,
        journal_id: &str,
    ) -> Result<SubmissionVerdict, CommandError> {
        self.require_playing()?;
        let journal = self.find_journal(journal_id)?;
        submit_to_journal(&mut self.state, &journal)
    }

    /// Pre-commit acceptance odds for the finished manuscript, in percent.
    ///
    /// # Errors
    ///
    /// Rejects for unknown journals.
    pub fn acceptance_percent(&self, journal_id: &str) -> Result<f64, CommandError> {
        let journal = self.find_journal(journal_id)?;
        Ok(acceptance_percent(&self.state, &journal))
    }

    /// Answer the outstanding referee verdict.
    ///
    /// # Errors
    ///
    /// Rejects outside the playing phase, without a pending verdict, or per
    /// the review gates.
    pub fn review_action(
        &mut self,
        decision: ReviewDecision,
    ) -> Result<SubmissionVerdict, CommandError> {
        self.require_playing()?;
        let journal_id = self
            .state
            .pending_review
            .as_ref()
            .map(|p| p.journal_id.clone())
            .ok_or(CommandError::NoPendingReview)?;
        let journal = self.find_journal(&journal_id)?;
        review_action(&mut self.state, decision, &journal)
    }

    /// Pour the week's remaining energy into the mandatory milestone.
    ///
    /// # Errors
    ///
    /// Rejects outside the playing phase or without a pending milestone.
    pub fn work_on_mandatory_task(&mut self) -> Result<(), CommandError> {
        self.require_playing()?;
        work_on_milestone(&mut self.state)
    }

    /// Face the committee once the milestone deadline has arrived. Returns
    /// whether the player passed.
    ///
    /// # Errors
    ///
    /// Rejects outside the committee-review phase.
    pub fn resolve_confirmation(&mut self) -> Result<bool, CommandError> {
        resolve_review(&mut self.state)
    }

    /// Merge late-arriving topic text for an idea into the run.
    pub fn apply_topic_flavor(&mut self, idea_id: u32, title: &str, description: &str) {
        self.state.apply_topic_flavor(idea_id, title, description);
    }
}

/// Builds sessions from one set of catalogs and one flavor provider.
#[derive(Debug, Clone)]
pub struct GameEngine<F: FlavorProvider + Clone> {
    catalogs: Catalogs,
    flavor: F,
}

impl<F: FlavorProvider + Clone> GameEngine<F> {
    #[must_use]
    pub fn new(flavor: F) -> Self {
        Self {
            catalogs: Catalogs::builtin(),
            flavor,
        }
    }

    #[must_use]
    pub fn with_catalogs(catalogs: Catalogs, flavor: F) -> Self {
        Self { catalogs, flavor }
    }

    #[must_use]
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    #[must_use]
    pub fn start_session(&self, seed: u64) -> GameSession<F> {
        GameSession::new(self.catalogs.clone(), self.flavor.clone(), seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::LocalFlavor;
    use crate::state::GamePhase;

    fn session() -> GameSession<LocalFlavor> {
        GameEngine::new(LocalFlavor).start_session(0xDEAD_BEEF)
    }

    #[test]
    fn commands_are_phase_gated() {
        let mut s = session();
        assert_eq!(s.perform_action("sleep_in"), Err(CommandError::WrongPhase));
        assert_eq!(s.advance_week(), Err(CommandError::WrongPhase));
        assert_eq!(s.resolve_confirmation(), Err(CommandError::WrongPhase));

        s.start_run("grinder", "lab_mom").unwrap();
        assert_eq!(s.state().phase, GamePhase::Playing);
        assert_eq!(
            s.start_run("grinder", "lab_mom"),
            Err(CommandError::WrongPhase)
        );
    }

    #[test]
    fn start_run_rejects_unknown_archetypes() {
        let mut s = session();
        assert_eq!(
            s.start_run("nobody", "lab_mom"),
            Err(CommandError::UnknownId("nobody".to_string()))
        );
        assert_eq!(s.state().phase, GamePhase::Setup);
    }

    #[test]
    fn exclusive_actions_resolve_only_for_their_archetype() {
        let mut s = session();
        s.start_run("rich_kid", "lab_mom").unwrap();
        s.perform_action("retail_therapy").unwrap();

        let mut other = session();
        other.start_run("grinder", "lab_mom").unwrap();
        assert_eq!(
            other.perform_action("retail_therapy"),
            Err(CommandError::UnknownId("retail_therapy".to_string()))
        );
    }

    #[test]
    fn supervisor_exclusive_actions_resolve_too() {
        let mut s = session();
        s.start_run("grinder", "lab_mom").unwrap();
        s.perform_action("vent_session").unwrap();
    }

    #[test]
    fn reset_returns_to_setup_on_a_new_stream() {
        let mut s = session();
        s.start_run("grinder", "lab_mom").unwrap();
        let old_seed = s.state().seed;
        s.reset_run();
        assert_eq!(s.state().phase, GamePhase::Setup);
        assert_ne!(s.state().seed, old_seed);
        assert!(s.state().logs.is_empty());
    }

    #[test]
    fn finalize_reports_quality_for_a_fresh_manuscript() {
        use crate::state::{ProjectStage, ResearchIdea, ResearchProject};

        let mut s = session();
        s.start_run("grinder", "lab_mom").unwrap();
        s.state.active_project = Some(ResearchProject {
            idea: ResearchIdea {
                id: 1,
                title: "t".to_string(),
                description: String::new(),
                novelty: 50.0,
                feasibility: 50.0,
                potential: 70.0,
                resources: 40.0,
                attraction: 60.0,
                difficulty: 50.0,
            },
            progress: 100.0,
            failure_count: 0.0,
            stage: ProjectStage::Research,
        });

        match s.finalize_project().unwrap() {
            FinalizeOutcome::ReadyToSubmit { quality } => {
                assert!((10.0..=100.0).contains(&quality));
            }
            FinalizeOutcome::Resolved(_) => panic!("fresh manuscript resolved early"),
        }
        // Reporting the quality does not consume the project.
        assert!(s.state().active_project.is_some());
    }

    #[test]
    fn unknown_journal_is_refused_before_any_mutation() {
        let mut s = session();
        s.start_run("grinder", "lab_mom").unwrap();
        assert_eq!(
            s.submit_to_journal("journal_of_nothing"),
            Err(CommandError::UnknownId("journal_of_nothing".to_string()))
        );
    }
}
