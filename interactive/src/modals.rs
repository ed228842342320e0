//! Create/update dialogs. The page decides the mode through `is_update`
//! and hands over the record being edited.

use gossip_shared::action::{submit_modal, Submission};
use gossip_shared::{Draft, EntityKind, Post, Topic};
use leptos::prelude::*;

use crate::buttons::CloseModalButton;
use crate::notice::auto_dismiss;

#[component]
pub fn TopicModal(
    open: RwSignal<bool>,
    is_update: RwSignal<bool>,
    editing: RwSignal<Option<Topic>>,
    on_create: Callback<Draft>,
    on_update: Callback<(Topic, Draft)>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    auto_dismiss(error);

    // Seed the field from the edited topic whenever the dialog opens
    Effect::new(move |_| {
        if open.get() && is_update.get() {
            title.set(editing.with(|t| t.as_ref().map(|t| t.title.clone()).unwrap_or_default()));
        }
    });

    let close = Callback::new(move |()| {
        title.set(String::new());
        open.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let draft = Draft::title(title.get_untracked());
        let current = editing.get_untracked();
        match submit_modal(is_update.get_untracked(), current.as_ref(), EntityKind::Topic, draft) {
            Ok(Submission::Create(draft)) => on_create.run(draft),
            Ok(Submission::Update(topic, draft)) => on_update.run((topic, draft)),
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        }
        title.set(String::new());
    };

    view! {
        <Show when=move || open.get()>
            <div class="gossip-modal-backdrop">
                <div class="gossip-modal" role="dialog">
                    <h3>{move || if is_update.get() { "Enter the new topic" } else { "Enter a new topic." }}</h3>
                    <CloseModalButton on_close=close />
                    <form class="gossip-modal-form" on:submit=on_submit>
                        <input
                            class="gossip-input"
                            type="text"
                            placeholder="topic"
                            required
                            autocomplete="off"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                        <Show when=move || error.with(Option::is_some)>
                            <p class="gossip-error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="gossip-btn" type="submit">
                            {move || if is_update.get() { "Update" } else { "Add" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn PostModal(
    open: RwSignal<bool>,
    is_update: RwSignal<bool>,
    editing: RwSignal<Option<Post>>,
    on_create: Callback<Draft>,
    on_update: Callback<(Post, Draft)>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    auto_dismiss(error);

    Effect::new(move |_| {
        if open.get() && is_update.get() {
            editing.with(|post| {
                title.set(post.as_ref().map(|p| p.title.clone()).unwrap_or_default());
                description.set(post.as_ref().map(|p| p.description.clone()).unwrap_or_default());
            });
        }
    });

    let close = Callback::new(move |()| {
        title.set(String::new());
        description.set(String::new());
        open.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let draft = Draft::new(title.get_untracked(), description.get_untracked());
        let current = editing.get_untracked();
        match submit_modal(is_update.get_untracked(), current.as_ref(), EntityKind::Post, draft) {
            Ok(Submission::Create(draft)) => on_create.run(draft),
            Ok(Submission::Update(post, draft)) => on_update.run((post, draft)),
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        }
        title.set(String::new());
        description.set(String::new());
    };

    view! {
        <Show when=move || open.get()>
            <div class="gossip-modal-backdrop">
                <div class="gossip-modal" role="dialog">
                    <h3>{move || if is_update.get() { "Update your post" } else { "Create a new post" }}</h3>
                    <CloseModalButton on_close=close />
                    <form class="gossip-modal-form" on:submit=on_submit>
                        <input
                            class="gossip-input"
                            type="text"
                            placeholder="Title"
                            required
                            autocomplete="off"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                        <textarea
                            class="gossip-textarea"
                            placeholder="Description"
                            required
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                        <Show when=move || error.with(Option::is_some)>
                            <p class="gossip-error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="gossip-btn" type="submit">
                            {move || if is_update.get() { "Update" } else { "Post" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
