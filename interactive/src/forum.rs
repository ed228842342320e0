use gossip_shared::format::capitalize;
use gossip_shared::{
    listing, paths, ClientError, Draft, Entity, EntityKind, ItemAction, Listing, NewEntity, Post,
    SearchScope, Topic,
};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::actions::{self, PageSignals};
use crate::auth::{AuthState, LogoutButton, ProtectedRoute};
use crate::buttons::{AddButton, BackButton};
use crate::cards::{EmptyList, PostListCard, TopicListCard};
use crate::comments::PostPage;
use crate::login::LoginPage;
use crate::modals::{PostModal, TopicModal};
use crate::notice::NoticeBanner;
use crate::search::SearchBar;

/// Top-level forum SPA. Everything under `/home` needs a session.
#[component]
pub fn ForumApp() -> impl IntoView {
    view! {
        <Router>
            <div class="gossip-forum">
                <header class="gossip-header">
                    <h2><a href="/home">"Gossip"</a></h2>
                    <LogoutButton />
                </header>
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=LoginPage />
                    <ParentRoute path=path!("/home") view=ProtectedRoute>
                        <Route path=path!("") view=HomePage />
                        <Route path=path!(":topic_id") view=TopicPage />
                        <Route path=path!(":topic_id/:post_id") view=PostPage />
                    </ParentRoute>
                </Routes>
            </div>
        </Router>
    }
}

/// Numeric route parameter, `None` when absent or malformed.
pub(crate) fn id_param(name: &'static str) -> Memo<Option<i64>> {
    let params = use_params_map();
    Memo::new(move |_| params.get().get(name).and_then(|raw| raw.parse().ok()))
}

// ── Topics ──

#[component]
fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let signals = PageSignals::new();
    let topics: RwSignal<Option<Vec<Topic>>> = RwSignal::new(None);
    let modal_open = RwSignal::new(false);
    let is_update = RwSignal::new(false);
    let editing: RwSignal<Option<Topic>> = RwSignal::new(None);

    Effect::new(move |_| {
        signals.reload.track();
        actions::load(paths::topics(), topics, signals);
    });

    let on_edit = Callback::new(move |entity: Entity| {
        if let Entity::Topic(topic) = entity {
            editing.set(Some(topic));
            is_update.set(true);
            modal_open.set(true);
        }
    });
    let on_action = actions::dispatcher(auth, signals, on_edit, None);

    let open_create = Callback::new(move |()| {
        editing.set(None);
        is_update.set(false);
        modal_open.set(true);
    });
    let on_create = Callback::new(move |draft: Draft| {
        modal_open.set(false);
        actions::create(signals, NewEntity::Topic { title: draft.title });
    });
    let on_update = Callback::new(move |(topic, draft): (Topic, Draft)| {
        modal_open.set(false);
        on_action.run(ItemAction::Revise(Entity::Topic(topic), draft));
    });

    view! {
        <section class="gossip-home">
            <div class="gossip-toolbar">
                <h3>"Topics"</h3>
                <SearchBar scope=SearchScope::Topics list=topics notice=signals.notice />
                <AddButton label="Topic" on_click=open_create />
            </div>
            <NoticeBanner notice=signals.notice />
            <TopicModal
                open=modal_open
                is_update=is_update
                editing=editing
                on_create=on_create
                on_update=on_update
            />
            <div class="gossip-topic-list">
                {move || match listing(topics.get(), EntityKind::Topic) {
                    Listing::Empty(label) => view! { <EmptyList label=label /> }.into_any(),
                    Listing::Items(items) => items
                        .into_iter()
                        .map(|topic| {
                            let is_owner = auth.is_owner(topic.user_id);
                            view! { <TopicListCard topic=topic is_owner=is_owner on_action=on_action /> }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </section>
    }
}

// ── Posts in a topic ──

#[component]
fn TopicPage() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let signals = PageSignals::new();
    let topic_id = id_param("topic_id");
    let topic: RwSignal<Option<Topic>> = RwSignal::new(None);
    let posts: RwSignal<Option<Vec<Post>>> = RwSignal::new(None);
    let modal_open = RwSignal::new(false);
    let is_update = RwSignal::new(false);
    let editing: RwSignal<Option<Post>> = RwSignal::new(None);

    Effect::new(move |_| {
        signals.reload.track();
        match topic_id.get() {
            Some(id) => {
                actions::load(paths::entity(EntityKind::Topic, id), topic, signals);
                actions::load(paths::posts_in(id), posts, signals);
            }
            None => signals.fail(ClientError::MissingId(EntityKind::Topic)),
        }
    });

    let on_edit = Callback::new(move |entity: Entity| {
        if let Entity::Post(post) = entity {
            editing.set(Some(post));
            is_update.set(true);
            modal_open.set(true);
        }
    });
    let on_action = actions::dispatcher(auth, signals, on_edit, None);

    let open_create = Callback::new(move |()| {
        editing.set(None);
        is_update.set(false);
        modal_open.set(true);
    });
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

    let heading = move || {
        topic
            .with(|t| t.as_ref().map(|t| capitalize(&t.title)))
            .unwrap_or_default()
    };

    view! {
        <section class="gossip-topic">
            <BackButton />
            <div class="gossip-toolbar">
                <h3>{heading}</h3>
                {move || {
                    let scope = SearchScope::Posts { topic_id: topic_id.get() };
                    view! { <SearchBar scope=scope list=posts notice=signals.notice /> }
                }}
                <AddButton label="Post" on_click=open_create />
            </div>
            <NoticeBanner notice=signals.notice />
            <PostModal
                open=modal_open
                is_update=is_update
                editing=editing
                on_create=on_create
                on_update=on_update
            />
            <div class="gossip-post-list">
                {move || match listing(posts.get(), EntityKind::Post) {
                    Listing::Empty(label) => view! { <EmptyList label=label /> }.into_any(),
                    Listing::Items(items) => items
                        .into_iter()
                        .map(|post| {
                            let is_owner = auth.is_owner(post.user_id);
                            view! { <PostListCard post=post is_owner=is_owner on_action=on_action /> }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </section>
    }
}
