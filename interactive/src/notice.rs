use gloo_timers::future::TimeoutFuture;
use gossip_shared::config::NOTICE_TIMEOUT_MS;
use gossip_shared::Notice;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Clear `slot` a fixed time after it is filled.
///
/// Each fill starts its own timer, so a quick second message can be cut
/// short by the first one's timer.
pub fn auto_dismiss<T>(slot: RwSignal<Option<T>>)
where
    T: Send + Sync + 'static,
{
    Effect::new(move |_| {
        if slot.with(Option::is_some) {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                slot.set(None);
            });
        }
    });
}

/// Dismissible banner reporting the outcome of the last action.
#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    auto_dismiss(notice);

    move || {
        notice.get().map(|n| {
            let class = if n.is_error() {
                "gossip-notice gossip-notice-error"
            } else {
                "gossip-notice gossip-notice-success"
            };
            view! {
                <div class=class role="alert">
                    <span>{n.message}</span>
                    <button class="gossip-btn gossip-btn-sm" on:click=move |_| notice.set(None)>
                        "\u{2715}"
                    </button>
                </div>
            }
        })
    }
}
