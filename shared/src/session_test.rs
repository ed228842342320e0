use super::*;

fn alice() -> User {
    User {
        user_id: 42,
        name: "alice".to_owned(),
    }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn init_without_token_is_anonymous_and_settled() {
    let store = MemoryStore::default();
    let session = Session::init(&store);
    assert!(!session.is_authenticated);
    assert!(!session.is_loading);
    assert_eq!(
        session.access(),
        RouteAccess::Denied {
            redirect: "/",
            message: Some("Please login"),
        }
    );
}

#[test]
fn init_with_token_waits_for_verification() {
    let store = MemoryStore::default();
    store.write(TOKEN_KEY, "42");
    store.write(USERNAME_KEY, "alice");
    let session = Session::init(&store);
    assert!(session.is_loading);
    assert_eq!(session.username, "alice");
    assert_eq!(session.access(), RouteAccess::Pending);
    assert_eq!(session.viewer(), None);
}

#[test]
fn empty_token_counts_as_absent() {
    let store = MemoryStore::default();
    store.write(TOKEN_KEY, "");
    assert_eq!(Session::init(&store), Session::anonymous());
    assert_eq!(store.bearer(), None);
}

#[test]
fn verified_session_grants_access() {
    let session = Session::verified(&alice());
    assert_eq!(session.access(), RouteAccess::Granted);
    assert_eq!(session.viewer(), Some(42));
}

#[test]
fn rejected_session_clears_storage() {
    let store = MemoryStore::default();
    store.write(TOKEN_KEY, "42");
    store.write(USERNAME_KEY, "alice");
    let session = Session::rejected(&store);
    assert_eq!(session, Session::anonymous());
    assert_eq!(store.read(TOKEN_KEY), None);
    assert_eq!(store.read(USERNAME_KEY), None);
}

#[test]
fn login_persists_token_and_username() {
    let store = MemoryStore::default();
    let session = Session::login(&store, &alice());
    assert!(session.is_authenticated);
    assert_eq!(store.token().as_deref(), Some("42"));
    assert_eq!(store.read(USERNAME_KEY).as_deref(), Some("alice"));
    assert_eq!(store.bearer().as_deref(), Some("Bearer 42"));
}

#[test]
fn logout_clears_unconditionally() {
    let store = MemoryStore::default();
    Session::login(&store, &alice());
    let session = Session::logout(&store);
    assert!(!session.is_authenticated);
    assert_eq!(session.viewer(), None);
    assert_eq!(store.token(), None);
}

#[test]
fn logout_redirects_without_login_prompt() {
    let store = MemoryStore::default();
    Session::login(&store, &alice());
    let session = Session::logout(&store);
    assert_eq!(session.access(), RouteAccess::Denied { redirect: "/", message: None });
}

#[test]
fn rejected_token_still_prompts_login() {
    let store = MemoryStore::default();
    store.write(TOKEN_KEY, "42");
    let session = Session::rejected(&store);
    assert_eq!(
        session.access(),
        RouteAccess::Denied {
            redirect: "/",
            message: Some("Please login"),
        }
    );
}
