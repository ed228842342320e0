#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use serde::Serialize;

use crate::entity::{EntityKind, Vote};
use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One request to the backend, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiCall {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    /// Body-less POST, used by the vote endpoints.
    pub fn post_empty(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: None,
        }
    }

    /// # Errors
    ///
    /// Fails only if `body` cannot be represented as JSON.
    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ClientError> {
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    /// # Errors
    ///
    /// Fails only if `body` cannot be represented as JSON.
    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ClientError> {
        Ok(Self {
            method: Method::Put,
            path: path.into(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    pub fn is_mutating(&self) -> bool {
        self.method != Method::Get
    }
}

/// Backend paths.
pub mod paths {
    use super::{EntityKind, Vote};

    pub fn me() -> String {
        "/api/me".to_owned()
    }

    pub fn users() -> String {
        "/users".to_owned()
    }

    pub fn user(name: &str) -> String {
        format!("/users/{}", urlencoding::encode(name.trim()))
    }

    pub fn topics() -> String {
        "/api/topics/".to_owned()
    }

    pub fn topic_search(query: &str) -> String {
        format!("/api/topics/search?q={}", urlencoding::encode(query.trim()))
    }

    pub fn posts() -> String {
        "/api/posts/".to_owned()
    }

    pub fn posts_in(topic_id: i64) -> String {
        format!("/api/posts/all/{topic_id}")
    }

    pub fn post_detail(topic_id: i64, post_id: i64) -> String {
        format!("/api/posts/{topic_id}/{post_id}")
    }

    pub fn post_search(topic_id: i64, query: &str) -> String {
        format!(
            "/api/posts/{topic_id}/search?q={}",
            urlencoding::encode(query.trim())
        )
    }

    pub fn comments() -> String {
        "/api/comments/".to_owned()
    }

    pub fn comments_on(topic_id: i64, post_id: i64) -> String {
        format!("/api/comments/all/{topic_id}/{post_id}")
    }

    /// `/api/{topics|posts|comments}/{id}`, target of PUT and DELETE.
    pub fn entity(kind: EntityKind, id: i64) -> String {
        format!("/api/{}/{id}", kind.plural())
    }

    pub fn vote(kind: EntityKind, id: i64, vote: Vote) -> String {
        format!("/api/{}/{id}/{}", kind.plural(), vote.segment())
    }

    pub fn remove_vote(kind: EntityKind, id: i64) -> String {
        format!("/api/{}/{id}/remove", kind.plural())
    }
}
