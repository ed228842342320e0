use crate::endpoint::{paths, ApiCall};
use crate::entity::EntityKind;
use crate::error::ClientError;
use crate::format::is_valid_string;

/// Which list a search bar filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    Topics,
    Posts { topic_id: Option<i64> },
}

impl SearchScope {
    /// GET that filters the list by `query`.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidQuery`] for a blank query, then
    /// [`ClientError::MissingId`] when a post search has no topic.
    pub fn search(self, query: &str) -> Result<ApiCall, ClientError> {
        if !is_valid_string(query) {
            return Err(ClientError::InvalidQuery);
        }
        match self {
            SearchScope::Topics => Ok(ApiCall::get(paths::topic_search(query))),
            SearchScope::Posts { topic_id } => {
                let topic_id = topic_id.ok_or(ClientError::MissingId(EntityKind::Topic))?;
                Ok(ApiCall::get(paths::post_search(topic_id, query)))
            }
        }
    }

    /// GET that restores the unfiltered list.
    ///
    /// # Errors
    ///
    /// [`ClientError::MissingId`] when a post list has no topic.
    pub fn reset(self) -> Result<ApiCall, ClientError> {
        match self {
            SearchScope::Topics => Ok(ApiCall::get(paths::topics())),
            SearchScope::Posts { topic_id } => {
                let topic_id = topic_id.ok_or(ClientError::MissingId(EntityKind::Topic))?;
                Ok(ApiCall::get(paths::posts_in(topic_id)))
            }
        }
    }

    pub fn updated_message(self) -> &'static str {
        match self {
            SearchScope::Topics => "topic list updated",
            SearchScope::Posts { .. } => "post list updated",
        }
    }

    pub fn cleared_message(self) -> &'static str {
        "search query cleared"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Method;

    #[test]
    fn blank_query_is_rejected_locally() {
        let err = SearchScope::Topics.search("   ").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid query");
    }

    #[test]
    fn topic_search_trims_and_encodes() {
        let call = SearchScope::Topics.search("  rust lang ").unwrap();
        assert_eq!(call.method, Method::Get);
        assert_eq!(call.path, "/api/topics/search?q=rust%20lang");
    }

    #[test]
    fn post_search_needs_topic() {
        let err = SearchScope::Posts { topic_id: None }.search("x").unwrap_err();
        assert_eq!(err.to_string(), "topicId missing");
    }

    #[test]
    fn post_search_under_topic() {
        let call = SearchScope::Posts { topic_id: Some(7) }.search("tips").unwrap();
        assert_eq!(call.path, "/api/posts/7/search?q=tips");
    }

    #[test]
    fn reset_fetches_full_lists() {
        assert_eq!(SearchScope::Topics.reset().unwrap().path, "/api/topics/");
        let posts = SearchScope::Posts { topic_id: Some(2) }.reset().unwrap();
        assert_eq!(posts.path, "/api/posts/all/2");
    }
}
