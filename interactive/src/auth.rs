use gossip_shared::{paths, route, RouteAccess, Session, User};
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::storage::LocalStore;

/// Reactive auth state shared via context.
#[derive(Clone, Copy, Debug)]
pub struct AuthState {
    pub session: RwSignal<Session>,
    /// One-shot message for the login page, set when a route bounces.
    pub flash: RwSignal<Option<String>>,
}

impl AuthState {
    /// Confirmed user id of the viewer, for ownership checks.
    pub fn viewer(&self) -> Option<i64> {
        self.session.with_untracked(Session::viewer)
    }

    pub fn is_owner(&self, owner_id: i64) -> bool {
        self.viewer() == Some(owner_id)
    }
}

/// Provides [`AuthState`] to everything below it.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(Session::init(&LocalStore));
    let flash: RwSignal<Option<String>> = RwSignal::new(None);
    provide_context(AuthState { session, flash });

    // A stored token is only trusted once the backend recognises it
    if session.with_untracked(|s| s.is_loading) {
        spawn_local(async move {
            match api::fetch::<User>(&paths::me()).await {
                Ok(Some(user)) => session.set(Session::verified(&user)),
                Ok(None) => {
                    log::warn!("unable to verify user: empty identity");
                    session.set(Session::rejected(&LocalStore));
                }
                Err(err) => {
                    log::warn!("unable to verify user: {err}");
                    session.set(Session::rejected(&LocalStore));
                }
            }
        });
    }

    children()
}

/// Renders nested routes for authenticated sessions only. Waits while the
/// identity check runs, then bounces everyone else to the login page.
#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let navigate = use_navigate();
    let access = Memo::new(move |_| auth.session.with(Session::access));

    Effect::new(move |_| {
        if let RouteAccess::Denied { redirect, message } = access.get() {
            auth.flash.set(message.map(str::to_owned));
            navigate(
                redirect,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match access.get() {
        RouteAccess::Pending => view! { <p class="gossip-loading">"Loading..."</p> }.into_any(),
        RouteAccess::Granted => view! { <Outlet /> }.into_any(),
        RouteAccess::Denied { .. } => view! { <p class="gossip-hint">"Redirecting..."</p> }.into_any(),
    }
}

/// Current user and logout button.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        auth.session.set(Session::logout(&LocalStore));
        navigate(route::LOGIN, NavigateOptions::default());
    };

    move || {
        let session = auth.session.get();
        if session.is_authenticated {
            let on_logout = on_logout.clone();
            view! {
                <div class="gossip-auth">
                    <span class="gossip-avatar">{gossip_shared::format::avatar_letter(&session.username)}</span>
                    <span class="gossip-username">{session.username.clone()}</span>
                    <button class="gossip-btn gossip-btn-sm" on:click=on_logout>"Logout"</button>
                </div>
            }
            .into_any()
        } else {
            view! { <span class="gossip-hint">"Not logged in"</span> }.into_any()
        }
    }
}
