#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Users ──

/// A forum account as returned by `/users/{name}` and `/api/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
}

// ── Votes ──

/// The viewer's vote on a post or comment. Travels as `1` / `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Vote {
    Like,
    Dislike,
}

impl Vote {
    pub fn value(self) -> i8 {
        match self {
            Vote::Like => 1,
            Vote::Dislike => -1,
        }
    }

    /// Path segment of the endpoint that records this vote.
    pub fn segment(self) -> &'static str {
        match self {
            Vote::Like => "likes",
            Vote::Dislike => "dislikes",
        }
    }
}

impl From<Vote> for i8 {
    fn from(vote: Vote) -> Self {
        vote.value()
    }
}

impl TryFrom<i8> for Vote {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Vote::Like),
            -1 => Ok(Vote::Dislike),
            other => Err(format!("invalid vote value {other}")),
        }
    }
}

// ── Entities ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Topic,
    Post,
    Comment,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Topic => "topic",
            EntityKind::Post => "post",
            EntityKind::Comment => "comment",
        }
    }

    /// Collection name used in API paths and empty-state text.
    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Topic => "topics",
            EntityKind::Post => "posts",
            EntityKind::Comment => "comments",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub topic_id: i64,
    pub title: String,
    pub user_id: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: i64,
    pub topic_id: i64,
    pub user_id: i64,
    pub username: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
    #[serde(default)]
    pub user_vote: Option<Vote>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub username: String,
    pub description: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
    #[serde(default)]
    pub user_vote: Option<Vote>,
    pub created_at: String,
    pub updated_at: String,
}

/// Capabilities shared by every record the viewer can act on.
pub trait Authored {
    fn id(&self) -> i64;
    fn owner_id(&self) -> i64;
    fn kind(&self) -> EntityKind;

    /// Whether `viewer` wrote this record. An anonymous viewer owns nothing.
    fn is_owned_by(&self, viewer: Option<i64>) -> bool {
        viewer == Some(self.owner_id())
    }
}

impl Authored for Topic {
    fn id(&self) -> i64 {
        self.topic_id
    }

    fn owner_id(&self) -> i64 {
        self.user_id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Topic
    }
}

impl Authored for Post {
    fn id(&self) -> i64 {
        self.post_id
    }

    fn owner_id(&self) -> i64 {
        self.user_id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Post
    }
}

impl Authored for Comment {
    fn id(&self) -> i64 {
        self.comment_id
    }

    fn owner_id(&self) -> i64 {
        self.user_id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Comment
    }
}

/// Closed set of records exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Topic(Topic),
    Post(Post),
    Comment(Comment),
}

impl Entity {
    fn inner(&self) -> &dyn Authored {
        match self {
            Entity::Topic(topic) => topic,
            Entity::Post(post) => post,
            Entity::Comment(comment) => comment,
        }
    }
}

impl Authored for Entity {
    fn id(&self) -> i64 {
        self.inner().id()
    }

    fn owner_id(&self) -> i64 {
        self.inner().owner_id()
    }

    fn kind(&self) -> EntityKind {
        self.inner().kind()
    }
}

impl From<Topic> for Entity {
    fn from(topic: Topic) -> Self {
        Entity::Topic(topic)
    }
}

impl From<Post> for Entity {
    fn from(post: Post) -> Self {
        Entity::Post(post)
    }
}

impl From<Comment> for Entity {
    fn from(comment: Comment) -> Self {
        Entity::Comment(comment)
    }
}

// ── Request bodies ──

/// Body of topic create and update. Titles are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicBody {
    pub title: String,
}

impl TopicBody {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePost {
    #[serde(rename = "topicId")]
    pub topic_id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub description: String,
}

/// Body of comment create and update; the backend wants the parent post on both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentBody {
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub description: String,
}
