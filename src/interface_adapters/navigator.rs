use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{NavigationError, Navigator, Route};

// In-process navigator keeping the visited routes as a stack.
#[derive(Clone)]
pub struct HistoryNavigator {
    history: Arc<Mutex<Vec<Route>>>,
}

impl HistoryNavigator {
    pub fn new(initial: Route) -> Self {
        Self {
            history: Arc::new(Mutex::new(vec![initial])),
        }
    }

    pub async fn current(&self) -> Option<Route> {
        self.history.lock().await.last().cloned()
    }

    pub async fn history(&self) -> Vec<Route> {
        self.history.lock().await.clone()
    }
}

#[async_trait]
impl Navigator for HistoryNavigator {
    async fn push(&self, route: Route) -> Result<(), NavigationError> {
        let mut history = self.history.lock().await;

        // Same rule as browser routers: re-entering the current route is refused.
        if history.last() == Some(&route) {
            return Err(NavigationError::Duplicated { name: route.name });
        }

        tracing::debug!(route = %route.name, "navigating.");
        history.push(route);
        Ok(())
    }
}
