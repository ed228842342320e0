use gossip_shared::{ApiCall, Notice, SearchScope};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

use crate::api;

/// Replace `list` with whatever `call` returns and report it.
fn load_into<T>(
    call: ApiCall,
    list: RwSignal<Option<Vec<T>>>,
    notice: RwSignal<Option<Notice>>,
    done: &'static str,
) where
    T: DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        match api::fetch::<Vec<T>>(&call.path).await {
            Ok(items) => {
                list.set(items);
                notice.set(Some(Notice::success(done)));
            }
            Err(err) => {
                log::error!("unable to load {}: {err}", call.path);
                notice.set(Some(Notice::error(err)));
            }
        }
    });
}

/// Search box that filters the page's list on the server.
#[component]
pub fn SearchBar<T>(
    scope: SearchScope,
    list: RwSignal<Option<Vec<T>>>,
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let query = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        notice.set(None);
        match scope.search(&query.get_untracked()) {
            Ok(call) => {
                load_into(call, list, notice, scope.updated_message());
                query.set(String::new());
            }
            Err(err) => notice.set(Some(Notice::error(err))),
        }
    };

    let on_clear = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        notice.set(None);
        match scope.reset() {
            Ok(call) => load_into(call, list, notice, scope.cleared_message()),
            Err(err) => notice.set(Some(Notice::error(err))),
        }
        query.set(String::new());
    };

    view! {
        <form class="gossip-search" on:submit=on_submit>
            <input
                class="gossip-input"
                type="search"
                placeholder="Search"
                autocomplete="off"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button class="gossip-btn gossip-btn-sm" type="button" aria-label="clear" on:click=on_clear>
                "\u{2715}"
            </button>
            <button class="gossip-btn" type="submit">"Search"</button>
        </form>
    }
}
