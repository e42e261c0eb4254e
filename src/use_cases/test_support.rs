use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{NavigationError, Navigator, Route, Session, SessionMutation, SessionState};

// Ordered record of every commit and push, shared by the fakes below so tests
// can assert on interleaving across collaborators.
pub(crate) type EventLog = Arc<Mutex<Vec<String>>>;

pub(crate) fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn events(log: &EventLog) -> Vec<String> {
    log.lock().expect("event log mutex poisoned").clone()
}

#[derive(Clone)]
pub(crate) struct RecordingSession {
    session: Arc<Mutex<Session>>,
    log: EventLog,
}

impl RecordingSession {
    pub(crate) fn new(session: Session, log: EventLog) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            log,
        }
    }

    pub(crate) fn snapshot(&self) -> Session {
        self.session
            .lock()
            .expect("session mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl SessionState for RecordingSession {
    async fn read(&self) -> Session {
        self.snapshot()
    }

    async fn commit(&self, mutation: SessionMutation) {
        self.log
            .lock()
            .expect("event log mutex poisoned")
            .push(format!("commit:{}", mutation.name()));
        let mut guard = self.session.lock().expect("session mutex poisoned");
        guard.apply(mutation);
    }
}

#[derive(Clone)]
pub(crate) struct RecordingNavigator {
    log: EventLog,
    // Toggle used to simulate a navigator that refuses the push.
    should_fail_push: bool,
}

impl RecordingNavigator {
    pub(crate) fn new(log: EventLog) -> Self {
        Self {
            log,
            should_fail_push: false,
        }
    }

    pub(crate) fn failing(log: EventLog) -> Self {
        Self {
            log,
            should_fail_push: true,
        }
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn push(&self, route: Route) -> Result<(), NavigationError> {
        self.log
            .lock()
            .expect("event log mutex poisoned")
            .push(format!("push:{}", route.name));
        if self.should_fail_push {
            return Err(NavigationError::Duplicated { name: route.name });
        }
        Ok(())
    }
}
