use super::*;
use chrono::{Duration, TimeZone};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn ago(delta: Duration) -> String {
    (now() - delta).to_rfc3339()
}

// =============================================================
// truncate
// =============================================================

#[test]
fn truncate_keeps_short_strings() {
    assert_eq!(truncate("hello", Some(5)), "hello");
    assert_eq!(truncate("", None), "");
}

#[test]
fn truncate_cuts_and_appends_ellipsis() {
    assert_eq!(truncate("hello world", Some(5)), "hello...");
}

#[test]
fn truncate_defaults_to_fifty() {
    let long = "x".repeat(60);
    let out = truncate(&long, None);
    assert_eq!(out, format!("{}...", "x".repeat(50)));
    assert_eq!(truncate(&"y".repeat(50), None), "y".repeat(50));
}

#[test]
fn truncate_counts_characters_not_bytes() {
    assert_eq!(truncate("héllo wörld", Some(7)), "héllo w...");
}

// =============================================================
// show_last_updated
// =============================================================

#[test]
fn future_and_present_are_just_now() {
    assert_eq!(show_last_updated(&ago(Duration::zero()), now()), "just now");
    assert_eq!(show_last_updated(&ago(Duration::seconds(-30)), now()), "just now");
}

#[test]
fn picks_largest_unit() {
    assert_eq!(show_last_updated(&ago(Duration::seconds(1)), now()), "1 second ago");
    assert_eq!(show_last_updated(&ago(Duration::seconds(59)), now()), "59 seconds ago");
    assert_eq!(show_last_updated(&ago(Duration::minutes(2)), now()), "2 minutes ago");
    assert_eq!(show_last_updated(&ago(Duration::hours(1)), now()), "1 hour ago");
    assert_eq!(show_last_updated(&ago(Duration::hours(2)), now()), "2 hours ago");
    assert_eq!(show_last_updated(&ago(Duration::days(3)), now()), "3 days ago");
    assert_eq!(show_last_updated(&ago(Duration::days(800)), now()), "2 years ago");
}

#[test]
fn accepts_zoneless_timestamps_as_utc() {
    assert_eq!(show_last_updated("2025-06-15T11:00:00.000000", now()), "1 hour ago");
}

#[test]
fn unparseable_timestamp_is_shown_raw() {
    assert_eq!(show_last_updated("yesterday", now()), "yesterday");
}

// =============================================================
// Small helpers
// =============================================================

#[test]
fn valid_string_rejects_whitespace() {
    assert!(is_valid_string(" a "));
    assert!(!is_valid_string(" \t\n"));
}

#[test]
fn capitalize_first_letter() {
    assert_eq!(capitalize("tech talk"), "Tech talk");
    assert_eq!(capitalize(""), "");
}

#[test]
fn avatar_uses_first_letter() {
    assert_eq!(avatar_letter("alice"), "A");
    assert_eq!(avatar_letter(""), "?");
}

#[test]
fn edited_when_updated_after_created() {
    assert!(is_edited("2025-01-01T00:00:00Z", "2025-01-02T00:00:00Z"));
    assert!(!is_edited("2025-01-01T00:00:00Z", "2025-01-01T00:00:00Z"));
}
