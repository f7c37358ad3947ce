use crate::core::{ConfigResolver, RandomSource, ScreenRouter, StdRandom};
use crate::services::profiles::ProfileSource;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Errors that can occur with session lookups
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),
}

/// A client's app shell, locked per request
pub type SharedRouter = Arc<Mutex<ScreenRouter>>;

/// In-memory session registry
///
/// Each client gets its own `ScreenRouter`. Sessions are dropped after
/// `idle_secs` without access; nothing is persisted.
pub struct SessionStore {
    sessions: moka::future::Cache<Uuid, SharedRouter>,
    resolver: Arc<ConfigResolver>,
    profiles: Arc<dyn ProfileSource>,
    match_seed: Option<u64>,
}

/// Session store statistics
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub active_sessions: u64,
}

impl SessionStore {
    pub fn new(
        resolver: Arc<ConfigResolver>,
        profiles: Arc<dyn ProfileSource>,
        max_sessions: u64,
        idle_secs: u64,
        match_seed: Option<u64>,
    ) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(Duration::from_secs(idle_secs))
            .build();

        Self {
            sessions,
            resolver,
            profiles,
            match_seed,
        }
    }

    pub fn resolver(&self) -> &Arc<ConfigResolver> {
        &self.resolver
    }

    fn random_source(&self) -> Box<dyn RandomSource> {
        match self.match_seed {
            Some(seed) => Box::new(StdRandom::seeded(seed)),
            None => Box::new(StdRandom::from_entropy()),
        }
    }

    /// Start a new session on the splash screen
    pub async fn create(&self) -> (Uuid, SharedRouter) {
        let id = Uuid::new_v4();
        let router = ScreenRouter::new(
            Arc::clone(&self.resolver),
            self.profiles.load(),
            self.random_source(),
        );
        let shared = Arc::new(Mutex::new(router));
        self.sessions.insert(id, Arc::clone(&shared)).await;

        tracing::debug!("Session created: {}", id);
        (id, shared)
    }

    pub async fn get(&self, id: Uuid) -> Result<SharedRouter, SessionError> {
        self.sessions.get(&id).await.ok_or(SessionError::NotFound(id))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        match self.sessions.remove(&id).await {
            Some(_) => {
                tracing::debug!("Session removed: {}", id);
                Ok(())
            }
            None => Err(SessionError::NotFound(id)),
        }
    }

    pub async fn stats(&self) -> SessionStats {
        self.sessions.run_pending_tasks().await;
        SessionStats {
            active_sessions: self.sessions.entry_count(),
        }
    }
}
