use gossip_shared::action::plan_login;
use gossip_shared::{route, ApiError, Session, User};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::auth::AuthState;
use crate::notice::auto_dismiss;
use crate::storage::LocalStore;

/// Login / registration form. Switching modes clears the field.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let is_login = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    auto_dismiss(error);

    // Message left by a bounced protected route
    let flash = auth.flash.get_untracked();
    auth.flash.set(None);

    let toggle_mode = move |_: leptos::ev::MouseEvent| {
        is_login.update(|v| *v = !*v);
        username.set(String::new());
        error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let login = is_login.get_untracked();
        let call = match plan_login(login, &username.get_untracked()) {
            Ok(call) => call,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::send::<User>(&call)
                .await
                .and_then(|envelope| envelope.into_data().ok_or(ApiError::Failed));
            match result {
                Ok(user) => {
                    auth.session.set(Session::login(&LocalStore, &user));
                    navigate(route::HOME, NavigateOptions::default());
                }
                Err(err) => {
                    let stage = if login { "login" } else { "register" };
                    log::error!("{stage} error: {err}");
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <section class="gossip-login">
            <div class="gossip-login-aside">
                <h2>{move || if is_login.get() { "Hello, Welcome!" } else { "Welcome Back!" }}</h2>
                <p>{move || if is_login.get() { "Don't have an account?" } else { "Already have an account?" }}</p>
                <button class="gossip-btn" type="button" on:click=toggle_mode>
                    {move || if is_login.get() { "Register" } else { "Login" }}
                </button>
            </div>
            <form class="gossip-login-form" on:submit=on_submit>
                <h2>{move || if is_login.get() { "Login" } else { "Registration" }}</h2>
                {flash.map(|message| view! { <p class="gossip-hint">{message}</p> })}
                <input
                    class="gossip-input"
                    type="text"
                    placeholder="username"
                    required
                    autocomplete="off"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <Show when=move || error.with(Option::is_some)>
                    <p class="gossip-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="gossip-btn" type="submit">
                    {move || if is_login.get() { "Login" } else { "Register" }}
                </button>
            </form>
        </section>
    }
}
