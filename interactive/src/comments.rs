use gossip_shared::action::shows_owner_controls;
use gossip_shared::format::capitalize;
use gossip_shared::{
    listing, paths, route, ClientError, Comment, Draft, Entity, EntityKind, ItemAction, Listing,
    NewEntity, Post, VoteTarget,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::actions::{self, PageSignals};
use crate::auth::AuthState;
use crate::buttons::BackButton;
use crate::cards::{DisplayAuthor, EmptyList, OwnerControls};
use crate::forum::id_param;
use crate::modals::PostModal;
use crate::notice::NoticeBanner;
use crate::votes::VoteBar;

/// A single post with its comment thread.
#[component]
pub fn PostPage() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let signals = PageSignals::new();
    let topic_id = id_param("topic_id");
    let post_id = id_param("post_id");
    let post: RwSignal<Option<Post>> = RwSignal::new(None);
    let comments: RwSignal<Option<Vec<Comment>>> = RwSignal::new(None);
    let modal_open = RwSignal::new(false);
    let is_update = RwSignal::new(false);
    let editing: RwSignal<Option<Post>> = RwSignal::new(None);
    // Comment currently edited inline
    let editing_comment: RwSignal<Option<i64>> = RwSignal::new(None);

    Effect::new(move |_| {
        signals.reload.track();
        match (topic_id.get(), post_id.get()) {
            (Some(topic), Some(id)) => {
                actions::load(paths::post_detail(topic, id), post, signals);
                actions::load(paths::comments_on(topic, id), comments, signals);
            }
            (None, _) => signals.fail(ClientError::MissingId(EntityKind::Topic)),
            (_, None) => signals.fail(ClientError::MissingId(EntityKind::Post)),
        }
    });

    let on_edit = Callback::new(move |entity: Entity| match entity {
        Entity::Post(p) => {
            editing.set(Some(p));
            is_update.set(true);
            modal_open.set(true);
        }
        Entity::Comment(c) => editing_comment.set(Some(c.comment_id)),
        Entity::Topic(_) => {}
    });

    // Once the post itself is deleted there is nothing left to show here
    let post_removed = RwSignal::new(false);
    let on_removed = Callback::new(move |entity: Entity| {
        if matches!(entity, Entity::Post(_)) {
            post_removed.set(true);
        }
    });
    let navigate = use_navigate();
    Effect::new(move |_| {
        if post_removed.get() {
            let target = topic_id
                .get_untracked()
                .map_or_else(|| route::HOME.to_owned(), route::topic_page);
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_action = actions::dispatcher(auth, signals, on_edit, Some(on_removed));

    let on_create = Callback::new(move |draft: Draft| {
        modal_open.set(false);
        actions::create(
            signals,
            NewEntity::Post {
                topic_id: topic_id.get_untracked(),
                draft,
            },
        );
    });
    let on_update = Callback::new(move |(post, draft): (Post, Draft)| {
        modal_open.set(false);
        on_action.run(ItemAction::Revise(Entity::Post(post), draft));
    });

    view! {
        <section class="gossip-post">
            <BackButton />
            <NoticeBanner notice=signals.notice />
            <PostModal
                open=modal_open
                is_update=is_update
                editing=editing
                on_create=on_create
                on_update=on_update
            />
            {move || post.get().map(|post| {
                let is_owner = auth.is_owner(post.user_id);
                view! { <PostCard post=post is_owner=is_owner on_action=on_action /> }
            })}
            <CommentForm post_id=post_id signals=signals />
            <div class="gossip-comment-list">
                {move || match listing(comments.get(), EntityKind::Comment) {
                    Listing::Empty(label) => view! { <EmptyList label=label /> }.into_any(),
                    Listing::Items(items) => items
                        .into_iter()
                        .map(|comment| {
                            let is_owner = auth.is_owner(comment.user_id);
                            view! {
                                <CommentListCard
                                    comment=comment
                                    is_owner=is_owner
                                    editing=editing_comment
                                    on_action=on_action
                                />
                            }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </section>
    }
}

/// Full post body, untruncated.
#[component]
fn PostCard(post: Post, is_owner: bool, on_action: Callback<ItemAction>) -> impl IntoView {
    let entity = Entity::Post(post.clone());
    let target = VoteTarget::of(&entity);

    view! {
        <article class="gossip-post-card gossip-post-full">
            <div class="gossip-post-header">
                <DisplayAuthor
                    username=post.username.clone()
                    created_at=post.created_at.clone()
                    updated_at=post.updated_at.clone()
                />
                {is_owner.then(|| view! { <OwnerControls entity=entity.clone() on_action=on_action /> })}
            </div>
            <h3 class="gossip-post-title">{capitalize(&post.title)}</h3>
            <p class="gossip-post-body">{post.description.clone()}</p>
            {target.map(|target| view! {
                <VoteBar target=target likes=post.likes dislikes=post.dislikes on_action=on_action />
            })}
        </article>
    }
}

#[component]
fn CommentForm(post_id: Memo<Option<i64>>, signals: PageSignals) -> impl IntoView {
    let text = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        actions::create(
            signals,
            NewEntity::Comment {
                post_id: post_id.get_untracked(),
                description: text.get_untracked(),
            },
        );
        text.set(String::new());
    };

    view! {
        <form class="gossip-comment-form" on:submit=on_submit>
            <textarea
                class="gossip-textarea"
                placeholder="Add a comment..."
                required
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <button class="gossip-btn" type="submit">"Comment"</button>
        </form>
    }
}

/// One comment. Edit swaps the body for a textarea in place.
#[component]
fn CommentListCard(
    comment: Comment,
    is_owner: bool,
    editing: RwSignal<Option<i64>>,
    on_action: Callback<ItemAction>,
) -> impl IntoView {
    let comment_id = comment.comment_id;
    let entity = Entity::Comment(comment.clone());
    let target = VoteTarget::of(&entity);
    let body = comment.description.clone();
    let text = RwSignal::new(comment.description.clone());
    let stored = StoredValue::new(comment.clone());

    let on_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        editing.set(None);
        let draft = Draft::description(text.get_untracked());
        on_action.run(ItemAction::Revise(Entity::Comment(stored.get_value()), draft));
    };

    let on_cancel = move |_: leptos::ev::MouseEvent| {
        text.set(stored.with_value(|c| c.description.clone()));
        editing.set(None);
    };

    view! {
        <div class="gossip-comment">
            <div class="gossip-comment-header">
                <DisplayAuthor
                    username=comment.username.clone()
                    created_at=comment.created_at.clone()
                    updated_at=comment.updated_at.clone()
                />
                {move || {
                    shows_owner_controls(is_owner, editing.get(), comment_id).then(|| {
                        view! { <OwnerControls entity=entity.clone() on_action=on_action /> }
                    })
                }}
            </div>
            <Show
                when=move || editing.get() == Some(comment_id)
                fallback=move || view! { <p class="gossip-comment-body">{body.clone()}</p> }
            >
                <form class="gossip-comment-edit" on:submit=on_save>
                    <textarea
                        class="gossip-textarea"
                        required
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    />
                    <button class="gossip-btn gossip-btn-sm" type="submit">"Update"</button>
                    <button class="gossip-btn gossip-btn-sm" type="button" on:click=on_cancel>"Cancel"</button>
                </form>
            </Show>
            {target.map(|target| view! {
                <VoteBar target=target likes=comment.likes dislikes=comment.dislikes on_action=on_action />
            })}
        </div>
    }
}
