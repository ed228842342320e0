mod actions;
mod api;
mod auth;
mod buttons;
mod cards;
mod comments;
mod forum;
mod login;
mod modals;
mod notice;
mod search;
mod storage;
mod votes;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Element the forum mounts into; the whole body when the page lacks it.
const MOUNT_ID: &str = "gossip-app";

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(level);

    let mount = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID));

    match mount {
        Some(el) => {
            let html_el: web_sys::HtmlElement = el.unchecked_into();
            leptos::mount::mount_to(html_el, app).forget();
        }
        None => {
            log::debug!("#{MOUNT_ID} not found, mounting to body");
            leptos::mount::mount_to_body(app);
        }
    }
}

fn app() -> impl IntoView {
    view! {
        <auth::AuthProvider>
            <forum::ForumApp />
        </auth::AuthProvider>
    }
}
