use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Session, SessionMutation, SessionState};

// Process-wide session store. Clones share the same underlying session.
#[derive(Clone, Default)]
pub struct InMemorySessionState {
    session: Arc<RwLock<Session>>,
}

impl InMemorySessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }
}

#[async_trait]
impl SessionState for InMemorySessionState {
    async fn read(&self) -> Session {
        self.session.read().await.clone()
    }

    async fn commit(&self, mutation: SessionMutation) {
        let name = mutation.name();
        self.session.write().await.apply(mutation);
        tracing::debug!(mutation = name, "session mutation committed.");
    }
}
