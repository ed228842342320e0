use super::*;

fn post_json(user_vote: &str) -> String {
    format!(
        r#"{{
            "post_id": 11,
            "topic_id": 2,
            "user_id": 5,
            "username": "alice",
            "title": "first",
            "description": "hello",
            "likes": 3,
            "dislikes": 1,
            "user_vote": {user_vote},
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-01T10:00:00Z"
        }}"#
    )
}

// =============================================================
// Vote encoding
// =============================================================

#[test]
fn user_vote_decodes_from_signed_integer() {
    let liked: Post = serde_json::from_str(&post_json("1")).unwrap();
    assert_eq!(liked.user_vote, Some(Vote::Like));

    let disliked: Post = serde_json::from_str(&post_json("-1")).unwrap();
    assert_eq!(disliked.user_vote, Some(Vote::Dislike));

    let none: Post = serde_json::from_str(&post_json("null")).unwrap();
    assert_eq!(none.user_vote, None);
}

#[test]
fn user_vote_rejects_other_values() {
    assert!(serde_json::from_str::<Post>(&post_json("2")).is_err());
}

#[test]
fn vote_counts_are_independent_of_user_vote() {
    let post: Post = serde_json::from_str(&post_json("null")).unwrap();
    assert_eq!((post.likes, post.dislikes), (3, 1));
}

#[test]
fn vote_serializes_as_number() {
    assert_eq!(serde_json::to_string(&Vote::Dislike).unwrap(), "-1");
}

// =============================================================
// Authored capability
// =============================================================

#[test]
fn entity_delegates_id_and_owner() {
    let topic = Topic {
        topic_id: 4,
        title: "tech".to_owned(),
        user_id: 9,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    };
    let entity = Entity::from(topic);
    assert_eq!(entity.id(), 4);
    assert_eq!(entity.owner_id(), 9);
    assert_eq!(entity.kind(), EntityKind::Topic);
}

#[test]
fn ownership_requires_matching_viewer() {
    let post: Post = serde_json::from_str(&post_json("null")).unwrap();
    assert!(post.is_owned_by(Some(5)));
    assert!(!post.is_owned_by(Some(6)));
    assert!(!post.is_owned_by(None));
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn topic_body_lowercases_title() {
    assert_eq!(TopicBody::new("Tech").title, "tech");
}

#[test]
fn bodies_use_backend_field_names() {
    let post = serde_json::to_value(CreatePost {
        topic_id: 2,
        title: "t".to_owned(),
        description: "d".to_owned(),
    })
    .unwrap();
    assert_eq!(post["topicId"], 2);

    let comment = serde_json::to_value(CommentBody {
        post_id: 8,
        description: "d".to_owned(),
    })
    .unwrap();
    assert_eq!(comment["postId"], 8);
}

#[test]
fn kind_plural_names_collections() {
    assert_eq!(EntityKind::Topic.plural(), "topics");
    assert_eq!(EntityKind::Comment.to_string(), "comment");
}
