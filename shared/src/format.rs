#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime, Utc};

pub const DEFAULT_TRUNCATE_LEN: usize = 50;

/// Cut `text` to `max_len` characters (default 50) and append `...` when
/// anything was removed.
pub fn truncate(text: &str, max_len: Option<usize>) -> String {
    let len = max_len.unwrap_or(DEFAULT_TRUNCATE_LEN);
    match text.char_indices().nth(len) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Anything but whitespace.
pub fn is_valid_string(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Uppercase the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Single letter shown in the author's avatar bubble.
pub fn avatar_letter(username: &str) -> String {
    username
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_owned())
}

/// Accepts RFC 3339 and the zone-less `YYYY-MM-DDTHH:MM:SS[.f]` form, the
/// latter read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

const UNITS: [(&str, i64); 5] = [
    ("year", 365 * 24 * 60 * 60),
    ("day", 24 * 60 * 60),
    ("hour", 60 * 60),
    ("minute", 60),
    ("second", 1),
];

/// Relative age of `timestamp` as seen at `now`, e.g. `3 hours ago`.
/// Timestamps not in the past read `just now`; unparseable ones are shown
/// as given.
pub fn show_last_updated(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(timestamp) else {
        return timestamp.to_owned();
    };
    let elapsed = (now - then).num_seconds();
    if elapsed <= 0 {
        return "just now".to_owned();
    }
    for (unit, size) in UNITS {
        let count = elapsed / size;
        if count >= 1 {
            let plural = if count == 1 { "" } else { "s" };
            return format!("{count} {unit}{plural} ago");
        }
    }
    "just now".to_owned()
}

/// `true` when the record was changed after it was created.
pub fn is_edited(created_at: &str, updated_at: &str) -> bool {
    match (parse_timestamp(created_at), parse_timestamp(updated_at)) {
        (Some(created), Some(updated)) => updated > created,
        _ => false,
    }
}
