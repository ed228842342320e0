//! Turns item actions into requests and keeps a page's notice and reload
//! signals in step with the outcome.

use gossip_shared::mutation::apply;
use gossip_shared::{
    plan, plan_create, ApiCall, Entity, ItemAction, MutationSink, NewEntity, Notice, Plan,
};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::auth::AuthState;

/// Signals every list page owns.
#[derive(Clone, Copy)]
pub struct PageSignals {
    pub notice: RwSignal<Option<Notice>>,
    /// Bumped after every mutation; fetch effects track it.
    pub reload: RwSignal<u32>,
}

impl PageSignals {
    pub fn new() -> Self {
        Self {
            notice: RwSignal::new(None),
            reload: RwSignal::new(0),
        }
    }

    pub fn refetch(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }

    pub fn fail(&self, err: impl std::fmt::Display) {
        self.notice.set(Some(Notice::error(err)));
    }
}

impl Default for PageSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl MutationSink for PageSignals {
    fn notify(&self, notice: Notice) {
        self.notice.set(Some(notice));
    }

    fn refetch(&self) {
        PageSignals::refetch(self);
    }
}

/// Fetch `path` into `slot`. A failed read empties the slot and reports on
/// the page notice.
pub fn load<T>(path: String, slot: RwSignal<Option<T>>, signals: PageSignals)
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        match api::fetch::<T>(&path).await {
            Ok(data) => slot.set(data),
            Err(err) => {
                log::error!("unable to load {path}: {err}");
                slot.set(None);
                signals.fail(err);
            }
        }
    });
}

/// Run `calls` in order, report the result, then re-read from the server.
/// `on_done` only runs when every call succeeded.
pub fn run_mutation(
    signals: PageSignals,
    calls: Vec<ApiCall>,
    fallback: String,
    on_done: Option<Callback<()>>,
) {
    spawn_local(async move {
        let context = fallback.clone();
        match apply(calls, fallback, api::send_for_message, &signals).await {
            Ok(()) => {
                if let Some(on_done) = on_done {
                    on_done.run(());
                }
            }
            Err(err) => log::error!("{context} failed: {err}"),
        }
    });
}

/// The single callback a page hands to its cards.
///
/// `on_removed` hears about entities deleted successfully, for pages that
/// show the deleted record itself.
pub fn dispatcher(
    auth: AuthState,
    signals: PageSignals,
    on_edit: Callback<Entity>,
    on_removed: Option<Callback<Entity>>,
) -> Callback<ItemAction> {
    Callback::new(move |action: ItemAction| {
        signals.notice.set(None);
        match plan(&action, auth.viewer()) {
            Err(err) => signals.fail(err),
            Ok(Plan::OpenEditor(entity)) => on_edit.run(entity),
            Ok(Plan::Calls(calls)) => {
                let on_done = on_removed.zip(action.removed().cloned()).map(|(hook, entity)| {
                    Callback::new(move |()| hook.run(entity.clone()))
                });
                run_mutation(signals, calls, action.done_message(), on_done);
            }
        }
    })
}

/// Create a record from a modal or inline form.
pub fn create(signals: PageSignals, new: NewEntity) {
    signals.notice.set(None);
    match plan_create(&new) {
        Ok(call) => run_mutation(signals, vec![call], new.done_message(), None),
        Err(err) => signals.fail(err),
    }
}
