use super::*;
use crate::entity::Topic;

// =============================================================
// Success bodies
// =============================================================

#[test]
fn decodes_list_payload() {
    let body = r#"{
        "payload": { "data": [
            { "topic_id": 1, "title": "tech", "user_id": 3, "created_at": "2025-01-01T00:00:00" }
        ] },
        "messages": ["Successfully listed all topics"],
        "errorCode": 0
    }"#;
    let envelope = decode_response::<Vec<Topic>>(200, body).unwrap();
    assert_eq!(envelope.first_message(), Some("Successfully listed all topics"));
    let topics = envelope.into_data().unwrap();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].title, "tech");
}

#[test]
fn null_data_is_absent() {
    let body = r#"{ "payload": { "data": null }, "messages": null }"#;
    let envelope = decode_response::<Vec<Topic>>(200, body).unwrap();
    assert_eq!(envelope.first_message(), None);
    assert!(envelope.into_data().is_none());
}

#[test]
fn message_only_body_has_no_data() {
    let body = r#"{ "payload": {}, "messages": ["Successfully deleted topic"] }"#;
    let envelope = decode_response::<serde_json::Value>(200, body).unwrap();
    assert_eq!(envelope.first_message(), Some("Successfully deleted topic"));
    assert!(envelope.into_data().is_none());
}

#[test]
fn empty_success_body_is_empty_envelope() {
    let envelope = decode_response::<serde_json::Value>(204, "").unwrap();
    assert_eq!(envelope, Envelope::default());
}

#[test]
fn malformed_success_body_is_decode_error() {
    let err = decode_response::<Vec<Topic>>(200, "<html>").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.to_string(), "Request failed");
}

// =============================================================
// Failure normalization
// =============================================================

#[test]
fn rejected_surfaces_first_message_verbatim() {
    let body = r#"{
        "payload": {},
        "messages": ["topic already exists", "ignored"],
        "errorCode": 409
    }"#;
    let err = decode_response::<Topic>(409, body).unwrap_err();
    assert_eq!(err, ApiError::Rejected("topic already exists".to_owned()));
    assert_eq!(err.to_string(), "topic already exists");
}

#[test]
fn plain_text_error_is_generic_failure() {
    let err = decode_response::<Topic>(401, "Invalid token\n").unwrap_err();
    assert_eq!(err, ApiError::Failed);
    assert_eq!(err.to_string(), "Request failed");
}

#[test]
fn empty_message_list_is_generic_failure() {
    assert_eq!(normalize_failure(r#"{ "messages": [] }"#), ApiError::Failed);
}

#[test]
fn network_error_text() {
    assert_eq!(ApiError::Network.to_string(), "Network Error");
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notice_from_error_is_error_toned() {
    let notice = Notice::error(ApiError::Network);
    assert!(notice.is_error());
    assert_eq!(notice.message, "Network Error");
}

#[test]
fn notice_success() {
    let notice = Notice::success("Successfully created topic");
    assert_eq!(notice.tone, Tone::Success);
}
