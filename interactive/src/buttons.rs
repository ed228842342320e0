//! Stateless controls. Every click is kept from reaching the enclosing card
//! link.

use gossip_shared::{route, Entity, ItemAction};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

fn swallow(ev: &MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub fn AddButton(label: &'static str, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button class="gossip-btn gossip-btn-add" on:click=move |ev| {
            swallow(&ev);
            on_click.run(());
        }>
            {format!("+ {label}")}
        </button>
    }
}

/// Navigates one level up the `/home` hierarchy.
#[component]
pub fn BackButton() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let on_click = move |ev: MouseEvent| {
        swallow(&ev);
        let target = route::parent_of(&location.pathname.get_untracked());
        navigate(&target, NavigateOptions::default());
    };

    view! {
        <button class="gossip-btn gossip-btn-back" on:click=on_click>"\u{2190} Back"</button>
    }
}

#[component]
pub fn EditButton(entity: Entity, on_action: Callback<ItemAction>) -> impl IntoView {
    view! {
        <button class="gossip-btn gossip-btn-sm" aria-label="edit" on:click=move |ev| {
            swallow(&ev);
            on_action.run(ItemAction::Edit(entity.clone()));
        }>
            "Edit"
        </button>
    }
}

#[component]
pub fn DeleteButton(entity: Entity, on_action: Callback<ItemAction>) -> impl IntoView {
    view! {
        <button class="gossip-btn gossip-btn-sm gossip-btn-danger" aria-label="delete" on:click=move |ev| {
            swallow(&ev);
            on_action.run(ItemAction::Delete(entity.clone()));
        }>
            "Delete"
        </button>
    }
}

#[component]
pub fn CloseModalButton(on_close: Callback<()>) -> impl IntoView {
    view! {
        <button class="gossip-modal-close" type="button" aria-label="close" on:click=move |ev| {
            swallow(&ev);
            on_close.run(());
        }>
            "\u{2715}"
        </button>
    }
}
