use std::{env, fmt, time::Duration};
use url::Url;

use crate::domain::Route;
use crate::domain::route::HOME_ROUTE_NAME;

// Runtime configuration read from the environment (after dotenvy has loaded .env).

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Debug)]
pub enum ConfigError {
    Invalid { key: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, reason } => {
                write!(f, "invalid configuration {key}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn api_base_url() -> Result<Url, ConfigError> {
    let raw = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    parse_base_url(&raw)
}

pub fn request_timeout() -> Duration {
    parse_timeout(env::var("API_TIMEOUT_MS").ok())
}

pub const DEFAULT_INITIAL_ROUTE: &str = "Dashboard";
pub const DEFAULT_API_PATH: &str = "/";

pub fn home_route() -> Route {
    parse_route(env::var("HOME_ROUTE").ok(), HOME_ROUTE_NAME)
}

pub fn initial_route() -> Route {
    parse_route(env::var("INITIAL_ROUTE").ok(), DEFAULT_INITIAL_ROUTE)
}

// Optional token the session starts with.
pub fn access_token() -> Option<String> {
    parse_access_token(env::var("ACCESS_TOKEN").ok())
}

pub fn api_path() -> String {
    parse_api_path(env::var("API_PATH").ok())
}

// Blank route names fall back to the default.
fn parse_route(raw: Option<String>, default: &str) -> Route {
    let name = raw
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string());
    Route::named(name)
}

// Empty values count as absent.
fn parse_access_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.is_empty())
}

fn parse_api_path(raw: Option<String>) -> String {
    raw.filter(|path| !path.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_PATH.to_string())
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid {
        key: "API_BASE_URL",
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            key: "API_BASE_URL",
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }

    Ok(url)
}

fn parse_timeout(raw: Option<String>) -> Duration {
    raw.and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIMEOUT)
}
