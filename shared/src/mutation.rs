//! Executing a planned mutation: calls run strictly in order, the outcome is
//! reported once, and the page always re-reads afterwards.
//!
//! The transport is injected as an async `send` function so the browser
//! crate can plug in its HTTP client.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use std::future::Future;

use crate::endpoint::ApiCall;
use crate::envelope::Notice;
use crate::error::ApiError;

/// Where a page receives the outcome of a mutation.
pub trait MutationSink {
    fn notify(&self, notice: Notice);
    /// Ask the page to read its data from the server again.
    fn refetch(&self);
}

/// Send `calls` one after another, stopping at the first failure.
///
/// `send` resolves to the backend's first message for that call, if any.
/// Returns the message of the last call.
///
/// # Errors
///
/// The first [`ApiError`] any call produced; later calls are not sent.
pub async fn run_calls<F, Fut>(
    calls: Vec<ApiCall>,
    mut send: F,
) -> Result<Option<String>, ApiError>
where
    F: FnMut(ApiCall) -> Fut,
    Fut: Future<Output = Result<Option<String>, ApiError>>,
{
    let mut message = None;
    for call in calls {
        message = send(call).await?;
    }
    Ok(message)
}

/// Run `calls`, notify `sink` with the backend message (or `fallback`) or
/// the error, then request a re-fetch whatever happened.
///
/// # Errors
///
/// Hands back the failure after it has been reported, for logging.
pub async fn apply<F, Fut, S>(
    calls: Vec<ApiCall>,
    fallback: String,
    send: F,
    sink: &S,
) -> Result<(), ApiError>
where
    F: FnMut(ApiCall) -> Fut,
    Fut: Future<Output = Result<Option<String>, ApiError>>,
    S: MutationSink + ?Sized,
{
    let result = match run_calls(calls, send).await {
        Ok(message) => {
            sink.notify(Notice::success(message.unwrap_or(fallback)));
            Ok(())
        }
        Err(err) => {
            sink.notify(Notice::error(&err));
            Err(err)
        }
    };
    sink.refetch();
    result
}
