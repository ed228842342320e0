use thiserror::Error;

use crate::entity::EntityKind;

/// A request that reached the transport layer and did not succeed.
///
/// `Display` is what the viewer sees in the notification banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response arrived: offline, refused, or timed out.
    #[error("Network Error")]
    Network,
    /// The backend answered with an error and explained it.
    #[error("{0}")]
    Rejected(String),
    #[error("Request failed")]
    Failed,
    /// A success status whose body is not an envelope.
    #[error("Request failed")]
    Decode(String),
}

/// A guard tripped before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Not author. Unable to {0}.")]
    NotAuthor(&'static str),
    #[error("system error: {0} missing")]
    MissingEntity(EntityKind),
    #[error("{0}Id missing")]
    MissingId(EntityKind),
    #[error("Please enter a valid query")]
    InvalidQuery,
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("unable to encode request: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Encode(err.to_string())
    }
}
