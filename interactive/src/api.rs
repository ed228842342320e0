use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use gossip_shared::config::{resolve_base_url, REQUEST_TIMEOUT_MS};
use gossip_shared::{decode_response, ApiCall, ApiError, Envelope, Method, SessionStore};
use serde::de::DeserializeOwned;
use web_sys::window;

use crate::storage::LocalStore;

fn api_base() -> String {
    // Read from a meta tag in the host page, then the build environment
    let from_page = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("meta[name='gossip-api']").ok().flatten())
        .and_then(|el| el.get_attribute("content"));
    resolve_base_url(from_page.as_deref(), option_env!("GOSSIP_API_URL"))
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    let req = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    let req = req.header("Content-Type", "application/json");

    match LocalStore.bearer() {
        Some(bearer) => req.header("Authorization", &bearer),
        None => req,
    }
}

/// Send one call and decode its envelope.
///
/// Transport failures and timeouts become [`ApiError::Network`]; error
/// statuses are reduced to the backend's first message.
pub async fn send<T: DeserializeOwned>(call: &ApiCall) -> Result<Envelope<T>, ApiError> {
    if call.is_mutating() {
        log::debug!("{} {}", call.method.as_str(), call.path);
    }
    let url = format!("{}{}", api_base(), call.path);
    let req = builder(call.method, &url);
    let body = call.body.clone();

    let request = Box::pin(async move {
        match body {
            Some(body) => match req.json(&body) {
                Ok(request) => request.send().await,
                Err(err) => Err(err),
            },
            None => req.send().await,
        }
    });
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);

    let resp = match select(request, timeout).await {
        Either::Left((result, _)) => result.map_err(|err| {
            log::error!("{} {} failed: {err}", call.method.as_str(), call.path);
            ApiError::Network
        })?,
        Either::Right(_) => {
            log::error!("{} {} timed out", call.method.as_str(), call.path);
            return Err(ApiError::Network);
        }
    };

    let status = resp.status();
    let text = resp.text().await.map_err(|err| {
        log::error!("{} {} body unreadable: {err}", call.method.as_str(), call.path);
        ApiError::Failed
    })?;

    decode_response(status, &text)
}

/// GET `path` and return the envelope's data, if any.
pub async fn fetch<T: DeserializeOwned>(path: &str) -> Result<Option<T>, ApiError> {
    Ok(send::<T>(&ApiCall::get(path)).await?.into_data())
}

/// Send one call of a mutation, keeping only the backend's first message.
pub async fn send_for_message(call: ApiCall) -> Result<Option<String>, ApiError> {
    let envelope = send::<serde_json::Value>(&call).await?;
    Ok(envelope.first_message().map(str::to_owned))
}
