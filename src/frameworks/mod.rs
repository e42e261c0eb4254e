// Frameworks layer: configuration, logging and process bootstrap.

pub mod bootstrap;
pub mod config;
