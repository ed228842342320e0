#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::entity::User;
use crate::route;

/// Storage key holding the session token (the user id).
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the username.
pub const USERNAME_KEY: &str = "user";

/// Where the session token and username persist between page loads.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// The stored token, ignoring empty values.
    fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// `Authorization` header value when a token is stored.
    fn bearer(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }

    fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USERNAME_KEY);
    }
}

/// In-process store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Who is using the client, and whether that has been confirmed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub user_id: Option<i64>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    /// Ended by the user through logout rather than never started.
    pub signed_out: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Starting state at page load. A stored token must still be confirmed
    /// against `/api/me`, so the session starts out loading.
    pub fn init(store: &impl SessionStore) -> Self {
        match store.token() {
            Some(token) => Self {
                username: store.read(USERNAME_KEY).unwrap_or_default(),
                user_id: token.parse().ok(),
                is_authenticated: false,
                is_loading: true,
                signed_out: false,
            },
            None => Self::anonymous(),
        }
    }

    /// The backend confirmed the stored token.
    pub fn verified(user: &User) -> Self {
        Self {
            username: user.name.clone(),
            user_id: Some(user.user_id),
            is_authenticated: true,
            is_loading: false,
            signed_out: false,
        }
    }

    /// The backend refused the stored token; forget it.
    pub fn rejected(store: &impl SessionStore) -> Self {
        store.clear();
        Self::anonymous()
    }

    /// Login or registration succeeded: persist and authenticate.
    pub fn login(store: &impl SessionStore, user: &User) -> Self {
        store.write(TOKEN_KEY, &user.user_id.to_string());
        store.write(USERNAME_KEY, &user.name);
        Self::verified(user)
    }

    pub fn logout(store: &impl SessionStore) -> Self {
        store.clear();
        Self {
            signed_out: true,
            ..Self::anonymous()
        }
    }

    /// The id used for ownership checks, only once confirmed.
    pub fn viewer(&self) -> Option<i64> {
        if self.is_authenticated {
            self.user_id
        } else {
            None
        }
    }

    pub fn access(&self) -> RouteAccess {
        if self.is_loading {
            RouteAccess::Pending
        } else if self.is_authenticated {
            RouteAccess::Granted
        } else {
            RouteAccess::Denied {
                redirect: route::LOGIN,
                message: (!self.signed_out).then_some("Please login"),
            }
        }
    }
}

/// Whether a protected route may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Identity check still running; show a spinner.
    Pending,
    Granted,
    /// `message` is left for the login page; a deliberate logout has none.
    Denied {
        redirect: &'static str,
        message: Option<&'static str>,
    },
}
