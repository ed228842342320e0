use chrono::Utc;
use gossip_shared::format::{avatar_letter, capitalize, is_edited, show_last_updated, truncate};
use gossip_shared::{route, Entity, ItemAction, Post, Topic, VoteTarget};
use leptos::prelude::*;

use crate::buttons::{DeleteButton, EditButton};
use crate::votes::VoteBar;

/// Description preview length on list cards.
const PREVIEW_LEN: usize = 200;

#[component]
pub fn AvatarIcon(username: String) -> impl IntoView {
    view! { <span class="gossip-avatar">{avatar_letter(&username)}</span> }
}

/// `alice · 3 hours ago`, marked when the record was edited.
#[component]
pub fn DisplayAuthor(username: String, created_at: String, updated_at: String) -> impl IntoView {
    let edited = is_edited(&created_at, &updated_at);
    let when = show_last_updated(&updated_at, Utc::now());

    view! {
        <div class="gossip-author">
            <AvatarIcon username=username.clone() />
            <strong>{username}</strong>
            <time datetime=updated_at>{format!(" \u{00B7} {when}")}</time>
            {edited.then(|| view! { <span class="gossip-edited">" (edited)"</span> })}
        </div>
    }
}

#[component]
pub fn EmptyList(label: String) -> impl IntoView {
    view! {
        <div class="gossip-empty">
            <p>{label}</p>
        </div>
    }
}

/// Owner-only edit/delete pair.
#[component]
pub fn OwnerControls(entity: Entity, on_action: Callback<ItemAction>) -> impl IntoView {
    view! {
        <div class="gossip-owner-controls">
            <EditButton entity=entity.clone() on_action=on_action />
            <DeleteButton entity=entity on_action=on_action />
        </div>
    }
}

#[component]
pub fn TopicListCard(
    topic: Topic,
    is_owner: bool,
    on_action: Callback<ItemAction>,
) -> impl IntoView {
    let href = route::topic_page(topic.topic_id);
    let title = capitalize(&truncate(&topic.title, None));

    view! {
        <a class="gossip-topic-card" href=href>
            <span class="gossip-topic-title">{title}</span>
            {is_owner.then(|| view! { <OwnerControls entity=Entity::Topic(topic.clone()) on_action=on_action /> })}
        </a>
    }
}

#[component]
pub fn PostListCard(post: Post, is_owner: bool, on_action: Callback<ItemAction>) -> impl IntoView {
    let href = route::post_page(post.topic_id, post.post_id);
    let entity = Entity::Post(post.clone());
    let target = VoteTarget::of(&entity);

    view! {
        <a class="gossip-post-card" href=href>
            <div class="gossip-post-header">
                <DisplayAuthor
                    username=post.username.clone()
                    created_at=post.created_at.clone()
                    updated_at=post.updated_at.clone()
                />
                {is_owner.then(|| view! { <OwnerControls entity=entity.clone() on_action=on_action /> })}
            </div>
            <div class="gossip-post-title">{capitalize(&truncate(&post.title, None))}</div>
            <p class="gossip-post-body">{capitalize(&truncate(&post.description, Some(PREVIEW_LEN)))}</p>
            {target.map(|target| view! {
                <VoteBar target=target likes=post.likes dislikes=post.dislikes on_action=on_action />
            })}
        </a>
    }
}
