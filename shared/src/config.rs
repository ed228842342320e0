//! Client configuration constants and base URL resolution.

/// Backend used when the host page and the build both leave it unset.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Requests still pending after this long count as a network failure.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// How long a notification banner stays up.
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Pick the API base URL: the host page's `<meta name="gossip-api">` wins
/// over the build-time `GOSSIP_API_URL`, which wins over the default.
pub fn resolve_base_url(from_page: Option<&str>, from_build: Option<&str>) -> String {
    [from_page, from_build]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_meta_wins() {
        let url = resolve_base_url(Some("https://api.gossip.dev/"), Some("http://build:1"));
        assert_eq!(url, "https://api.gossip.dev");
    }

    #[test]
    fn blank_meta_falls_through_to_build() {
        let url = resolve_base_url(Some("  "), Some("http://build:1"));
        assert_eq!(url, "http://build:1");
    }

    #[test]
    fn default_when_unset() {
        assert_eq!(resolve_base_url(None, None), DEFAULT_API_BASE);
    }
}
