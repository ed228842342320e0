//! Browser-independent core of the Gossip forum client.
//!
//! Wire records, request planning, response normalization, formatting and
//! session bookkeeping live here so they can be exercised natively; the
//! `gossip-interactive` crate only renders and executes what this crate
//! decides.

pub mod action;
pub mod config;
pub mod endpoint;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod format;
pub mod listing;
pub mod mutation;
pub mod route;
pub mod search;
pub mod session;

pub use action::{
    plan, plan_create, plan_login, submit_modal, Draft, ItemAction, NewEntity, Plan, Submission,
    VoteTarget,
};
pub use endpoint::{paths, ApiCall, Method};
pub use entity::{Authored, Comment, Entity, EntityKind, Post, Topic, User, Vote};
pub use envelope::{decode_response, normalize_failure, Envelope, Notice, Tone};
pub use error::{ApiError, ClientError};
pub use listing::{listing, Listing};
pub use mutation::MutationSink;
pub use search::SearchScope;
pub use session::{MemoryStore, RouteAccess, Session, SessionStore};
