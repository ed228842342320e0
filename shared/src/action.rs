//! What the viewer can do to an entity, and the requests each action needs.
//!
//! Cards report a single [`ItemAction`] upward; the page asks [`plan`] what
//! to do with it and either opens an editor or runs the returned calls in
//! order, then re-reads its lists from the server.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use crate::endpoint::{paths, ApiCall};
use crate::entity::{
    Authored, CommentBody, CreatePost, CreateUser, Entity, EntityKind, TopicBody, UpdatePost,
    Vote,
};
use crate::error::ClientError;
use crate::format::is_valid_string;

/// Field values collected by a modal or an inline editor.
///
/// Topics only read `title`; comments only read `description`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            description: description.into(),
        }
    }

    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The votable part of a post or comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTarget {
    pub kind: EntityKind,
    pub id: i64,
    pub current: Option<Vote>,
}

impl VoteTarget {
    /// Topics cannot be voted on.
    pub fn of(entity: &Entity) -> Option<Self> {
        match entity {
            Entity::Topic(_) => None,
            Entity::Post(post) => Some(Self {
                kind: EntityKind::Post,
                id: post.post_id,
                current: post.user_vote,
            }),
            Entity::Comment(comment) => Some(Self {
                kind: EntityKind::Comment,
                id: comment.comment_id,
                current: comment.user_vote,
            }),
        }
    }
}

/// Something the viewer did to one list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    /// Open the editor for this entity.
    Edit(Entity),
    /// Send new field values for this entity.
    Revise(Entity, Draft),
    Delete(Entity),
    /// A like or dislike button was clicked.
    Vote { target: VoteTarget, vote: Vote },
}

impl ItemAction {
    /// Notice shown when the backend confirms without a message of its own.
    pub fn done_message(&self) -> String {
        match self {
            ItemAction::Edit(entity) => format!("editing {}", entity.kind()),
            ItemAction::Revise(entity, _) => format!("{} updated", entity.kind()),
            ItemAction::Delete(entity) => format!("{} deleted", entity.kind()),
            ItemAction::Vote { .. } => "vote recorded".to_owned(),
        }
    }

    /// The entity this action deletes, if it is a delete.
    pub fn removed(&self) -> Option<&Entity> {
        match self {
            ItemAction::Delete(entity) => Some(entity),
            _ => None,
        }
    }
}

/// Outcome of planning an [`ItemAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    OpenEditor(Entity),
    /// Run in order; stop at the first failure.
    Calls(Vec<ApiCall>),
}

/// Decide what an action needs, refusing edits and deletes the viewer does
/// not own before anything is sent.
///
/// # Errors
///
/// [`ClientError::NotAuthor`] for foreign entities and
/// [`ClientError::EmptyField`] for blank required fields in a revision.
pub fn plan(action: &ItemAction, viewer: Option<i64>) -> Result<Plan, ClientError> {
    match action {
        ItemAction::Edit(entity) => {
            ensure_author(entity, viewer, "edit")?;
            Ok(Plan::OpenEditor(entity.clone()))
        }
        ItemAction::Revise(entity, draft) => {
            ensure_author(entity, viewer, "edit")?;
            Ok(Plan::Calls(vec![revise(entity, draft)?]))
        }
        ItemAction::Delete(entity) => {
            ensure_author(entity, viewer, "delete")?;
            Ok(Plan::Calls(vec![ApiCall::delete(paths::entity(
                entity.kind(),
                entity.id(),
            ))]))
        }
        ItemAction::Vote { target, vote } => Ok(Plan::Calls(vote_calls(*target, *vote))),
    }
}

/// Clicking the button that matches the recorded vote removes it first and
/// then records it again; any other click records the clicked vote.
pub fn vote_calls(target: VoteTarget, vote: Vote) -> Vec<ApiCall> {
    let mut calls = Vec::with_capacity(2);
    if target.current == Some(vote) {
        calls.push(ApiCall::delete(paths::remove_vote(target.kind, target.id)));
    }
    calls.push(ApiCall::post_empty(paths::vote(target.kind, target.id, vote)));
    calls
}

fn ensure_author(
    entity: &Entity,
    viewer: Option<i64>,
    verb: &'static str,
) -> Result<(), ClientError> {
    if entity.is_owned_by(viewer) {
        Ok(())
    } else {
        Err(ClientError::NotAuthor(verb))
    }
}

fn required(value: &str, field: &'static str) -> Result<(), ClientError> {
    if is_valid_string(value) {
        Ok(())
    } else {
        Err(ClientError::EmptyField(field))
    }
}

fn revise(entity: &Entity, draft: &Draft) -> Result<ApiCall, ClientError> {
    let path = paths::entity(entity.kind(), entity.id());
    match entity {
        Entity::Topic(_) => {
            required(&draft.title, "title")?;
            ApiCall::put(path, &TopicBody::new(&draft.title))
        }
        Entity::Post(_) => {
            required(&draft.title, "title")?;
            required(&draft.description, "description")?;
            ApiCall::put(
                path,
                &UpdatePost {
                    title: draft.title.clone(),
                    description: draft.description.clone(),
                },
            )
        }
        Entity::Comment(comment) => {
            required(&draft.description, "description")?;
            ApiCall::put(
                path,
                &CommentBody {
                    post_id: comment.post_id,
                    description: draft.description.clone(),
                },
            )
        }
    }
}

/// Edit and delete controls show on owned entities, except while that entity
/// is open in an inline editor, which offers its own Update button.
pub fn shows_owner_controls(is_owner: bool, editing: Option<i64>, id: i64) -> bool {
    is_owner && editing != Some(id)
}

// ── Creation ──

/// A record about to be created under its parent, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewEntity {
    Topic { title: String },
    Post { topic_id: Option<i64>, draft: Draft },
    Comment { post_id: Option<i64>, description: String },
}

impl NewEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            NewEntity::Topic { .. } => EntityKind::Topic,
            NewEntity::Post { .. } => EntityKind::Post,
            NewEntity::Comment { .. } => EntityKind::Comment,
        }
    }

    pub fn done_message(&self) -> String {
        format!("{} created", self.kind())
    }
}

/// Build the POST for a new record.
///
/// # Errors
///
/// [`ClientError::MissingId`] when the parent id is unknown and
/// [`ClientError::EmptyField`] for blank required fields.
pub fn plan_create(new: &NewEntity) -> Result<ApiCall, ClientError> {
    match new {
        NewEntity::Topic { title } => {
            required(title, "title")?;
            ApiCall::post(paths::topics(), &TopicBody::new(title))
        }
        NewEntity::Post { topic_id, draft } => {
            let topic_id = topic_id.ok_or(ClientError::MissingId(EntityKind::Topic))?;
            required(&draft.title, "title")?;
            required(&draft.description, "description")?;
            ApiCall::post(
                paths::posts(),
                &CreatePost {
                    topic_id,
                    title: draft.title.clone(),
                    description: draft.description.clone(),
                },
            )
        }
        NewEntity::Comment {
            post_id,
            description,
        } => {
            let post_id = post_id.ok_or(ClientError::MissingId(EntityKind::Post))?;
            required(description, "comment")?;
            ApiCall::post(
                paths::comments(),
                &CommentBody {
                    post_id,
                    description: description.clone(),
                },
            )
        }
    }
}

// ── Login ──

/// `GET /users/{name}` to log in, `POST /users` to register.
///
/// # Errors
///
/// [`ClientError::EmptyField`] for a blank username.
pub fn plan_login(is_login: bool, username: &str) -> Result<ApiCall, ClientError> {
    required(username, "username")?;
    if is_login {
        Ok(ApiCall::get(paths::user(username)))
    } else {
        ApiCall::post(
            paths::users(),
            &CreateUser {
                name: username.trim().to_owned(),
            },
        )
    }
}

// ── Modal submit ──

/// What a create/update modal asks its page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    Create(Draft),
    Update(T, Draft),
}

/// Route a modal submit by the caller's update flag. In update mode the
/// modal must have been handed the entity it edits.
///
/// # Errors
///
/// [`ClientError::MissingEntity`] when `is_update` is set without an entity.
pub fn submit_modal<T: Clone>(
    is_update: bool,
    editing: Option<&T>,
    kind: EntityKind,
    draft: Draft,
) -> Result<Submission<T>, ClientError> {
    if !is_update {
        return Ok(Submission::Create(draft));
    }
    editing
        .map(|entity| Submission::Update(entity.clone(), draft))
        .ok_or(ClientError::MissingEntity(kind))
}
