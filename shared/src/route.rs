//! Client-side route paths.

pub const LOGIN: &str = "/";
pub const HOME: &str = "/home";

pub fn topic_page(topic_id: i64) -> String {
    format!("{HOME}/{topic_id}")
}

pub fn post_page(topic_id: i64, post_id: i64) -> String {
    format!("{HOME}/{topic_id}/{post_id}")
}

/// Where the back button leads: one segment up, never above `/home`.
pub fn parent_of(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if !trimmed.starts_with(HOME) || trimmed == HOME {
        return HOME.to_owned();
    }
    match trimmed.rsplit_once('/') {
        Some((parent, _)) if parent.len() >= HOME.len() => parent.to_owned(),
        _ => HOME.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_page_paths() {
        assert_eq!(topic_page(4), "/home/4");
        assert_eq!(post_page(4, 9), "/home/4/9");
    }

    #[test]
    fn post_page_goes_back_to_topic() {
        assert_eq!(parent_of("/home/4/9"), "/home/4");
    }

    #[test]
    fn topic_page_goes_back_home() {
        assert_eq!(parent_of("/home/4"), "/home");
        assert_eq!(parent_of("/home/4/"), "/home");
    }

    #[test]
    fn never_leaves_home() {
        assert_eq!(parent_of("/home"), "/home");
        assert_eq!(parent_of("/"), "/home");
    }
}
