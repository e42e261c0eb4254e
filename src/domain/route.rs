use serde::{Deserialize, Serialize};

// Name of the landing route users are sent to after their session is invalidated.
pub const HOME_ROUTE_NAME: &str = "Home";

// Navigation destination identified by route name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
}

impl Route {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn home() -> Self {
        Self::named(HOME_ROUTE_NAME)
    }
}
