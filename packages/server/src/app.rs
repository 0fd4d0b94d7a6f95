//! Dependency wiring.
//!
//! Builds the store, the use cases and the shared state in order:
//!
//! 1. Store (in-memory, optionally backed by a snapshot file)
//! 2. Host token store
//! 3. UseCases
//! 4. AppState

use std::sync::Arc;

use mitsumori_shared::time::Clock;

use crate::{
    config::Config,
    domain::{HostPassword, NicknameGenerator, RepositoryError, SessionStateMachine, Timestamp},
    infrastructure::{
        host_session::InMemoryHostSessionStore,
        repository::{InMemoryStore, SnapshotFile},
    },
    task::{self, Background, CleanupParticipants, SweepHostSessions},
    ui::AppState,
    usecase::{
        CleanupStaleParticipantsUseCase, ClearParticipantsUseCase, GetSessionViewUseCase,
        HostAuthUseCase, JoinSessionUseCase, LeaveSessionUseCase, SubmitVoteUseCase,
        TransitionSessionUseCase,
    },
};

/// Fully wired application.
pub struct App {
    pub state: AppState,
    cleanup_usecase: Arc<CleanupStaleParticipantsUseCase>,
    participant_cleanup: task::cleanup_participants::Config,
    host_sweep: task::sweep_host_sessions::Config,
}

impl App {
    /// Wire every layer from `config`.
    ///
    /// # Errors
    ///
    /// Fails when the snapshot file exists but cannot be read or parsed.
    pub async fn build(config: &Config, clock: Arc<dyn Clock>) -> Result<Self, RepositoryError> {
        let now = Timestamp::new(clock.now_millis());

        // 1. Store
        let store = match &config.data_file {
            Some(path) => {
                let store = InMemoryStore::open(SnapshotFile::new(path.clone()), now).await?;
                tracing::info!("Session state persisted to {}", path.display());
                store
            }
            None => {
                tracing::info!("Session state kept in memory only");
                InMemoryStore::new(now)
            }
        };
        let store = Arc::new(store);

        // 2. Host token store
        let host_sessions = Arc::new(InMemoryHostSessionStore::new(
            config.host_session_timeout(),
            clock.clone(),
        ));

        // 3. UseCases
        let host_auth_usecase = Arc::new(HostAuthUseCase::new(
            HostPassword::new(config.host_password.clone()),
            host_sessions,
            clock.clone(),
        ));
        let cleanup_usecase = Arc::new(CleanupStaleParticipantsUseCase::new(
            store.clone(),
            config.participant_retention(),
            clock.clone(),
        ));

        // 4. AppState
        let state = AppState {
            join_session_usecase: Arc::new(JoinSessionUseCase::new(
                store.clone(),
                NicknameGenerator::new(),
                config.max_participants,
                clock.clone(),
            )),
            leave_session_usecase: Arc::new(LeaveSessionUseCase::new(store.clone())),
            submit_vote_usecase: Arc::new(SubmitVoteUseCase::new(store.clone(), clock.clone())),
            transition_session_usecase: Arc::new(TransitionSessionUseCase::new(
                store.clone(),
                SessionStateMachine::default(),
                config.participant_retention(),
                clock,
            )),
            clear_participants_usecase: Arc::new(ClearParticipantsUseCase::new(
                store.clone(),
                store.clone(),
            )),
            host_auth_usecase,
            get_session_view_usecase: Arc::new(GetSessionViewUseCase::new(store)),
        };

        Ok(Self {
            state,
            cleanup_usecase,
            participant_cleanup: task::cleanup_participants::Config {
                interval: config.participant_cleanup_interval(),
            },
            host_sweep: task::sweep_host_sessions::Config {
                interval: config.host_sweep_interval(),
            },
        })
    }

    /// Spawn the periodic sweeps.
    ///
    /// The participant sweep runs once right away, which doubles as the
    /// startup cleanup.
    pub fn spawn_tasks(&self) -> Background {
        let mut background = Background::new();
        background.spawn(
            CleanupParticipants::new(self.participant_cleanup, self.cleanup_usecase.clone()).run(),
        );
        background.spawn(
            SweepHostSessions::new(self.host_sweep, self.state.host_auth_usecase.clone()).run(),
        );
        background
    }
}
