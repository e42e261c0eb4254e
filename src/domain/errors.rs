use std::fmt;

// Errors reported by navigator implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    // The requested route is already the current one.
    Duplicated { name: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::Duplicated { name } => {
                write!(f, "navigation to current route {name} is redundant")
            }
        }
    }
}

impl std::error::Error for NavigationError {}
