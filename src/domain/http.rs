use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fmt;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const STATUS_UNAUTHORIZED: u16 = 401;

// Mutable request descriptor handed to request interceptors before transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl OutgoingRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    // Header names compare case-insensitively, as on the wire.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    // Replaces every existing spelling of `name`, so the map never carries two
    // keys that collapse into one header when sent.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), value.into());
    }
}

// Status and body of a response the server answered with a non-success code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedResponse {
    pub status: u16,
    pub body: String,
}

/// Rejection produced once per failed call.
///
/// `response` is `None` when no response arrived at all (connect failure,
/// timeout, or a request that could not be built).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseError {
    pub response: Option<FailedResponse>,
    pub message: String,
}

impl ResponseError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            response: None,
            message: message.into(),
        }
    }

    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: Some(FailedResponse {
                status,
                body: body.into(),
            }),
            message: format!("request failed with status code {status}"),
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|response| response.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(STATUS_UNAUTHORIZED)
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ResponseError {}

// Successful (2xx) response returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
