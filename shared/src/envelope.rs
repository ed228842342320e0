#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Response body shape shared by every backend endpoint:
/// `{ "payload": { "data": ... }, "messages": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Payload::empty")]
    pub payload: Payload<T>,
    #[serde(default)]
    pub messages: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> Payload<T> {
    fn empty() -> Self {
        Self { data: None }
    }
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            payload: Payload::empty(),
            messages: None,
        }
    }
}

impl<T> Envelope<T> {
    pub fn first_message(&self) -> Option<&str> {
        self.messages
            .as_deref()
            .and_then(<[String]>::first)
            .map(String::as_str)
    }

    pub fn into_data(self) -> Option<T> {
        self.payload.data
    }
}

/// Turn an HTTP status and body into either the decoded envelope or the
/// normalized failure.
///
/// An empty success body decodes to an empty envelope.
///
/// # Errors
///
/// Non-2xx statuses go through [`normalize_failure`]; an undecodable 2xx
/// body yields [`ApiError::Decode`].
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Envelope<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(normalize_failure(body));
    }
    if body.trim().is_empty() {
        return Ok(Envelope::default());
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Reduce an error response to the first backend message, or a generic
/// failure when the body carries none.
pub fn normalize_failure(body: &str) -> ApiError {
    serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.first_message().map(str::to_owned))
        .map_or(ApiError::Failed, ApiError::Rejected)
}

// ── Notifications ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// Transient banner shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            message: message.into(),
        }
    }

    pub fn error(err: impl fmt::Display) -> Self {
        Self {
            tone: Tone::Error,
            message: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}
