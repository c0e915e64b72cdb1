//! The authenticated-session store.
//!
//! The session holds the current user record and both bearer tokens, mirrored
//! to durable storage under fixed keys. It is replaced wholesale on login and
//! cleared wholesale on logout; nothing else mutates it. Consumers (route
//! guards, navbar, HTTP client) observe it through the `RwSignal<Session>`
//! context or, for the HTTP client, read the access token straight from
//! storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Role, User};
use crate::util::storage;

/// Durable storage keys; fixed so existing browser sessions stay valid.
pub const USER_KEY: &str = "user";
pub const ACCESS_KEY: &str = "access";
pub const REFRESH_KEY: &str = "refresh";

/// The client-held record of the current authenticated identity and its
/// bearer credentials.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub access: Option<String>,
    pub refresh: Option<String>,
}

impl Session {
    /// Restore the session from durable storage at startup. A missing or
    /// unparsable stored user yields a signed-out session.
    pub fn load() -> Self {
        Self {
            user: storage::get_item(USER_KEY).and_then(|raw| serde_json::from_str(&raw).ok()),
            access: storage::get_item(ACCESS_KEY),
            refresh: storage::get_item(REFRESH_KEY),
        }
    }

    /// Session for a freshly signed-in user.
    pub fn authenticated(user: User, access: String, refresh: String) -> Self {
        Self {
            user: Some(user),
            access: Some(access),
            refresh: Some(refresh),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }
}

/// Route a user lands on right after signing in.
pub fn landing_route(user: &User) -> &'static str {
    if user.role == Role::Admin {
        "/admin"
    } else {
        "/dashboard"
    }
}

/// Replace the session wholesale and persist all three storage keys.
/// Subsequent HTTP requests carry the new bearer token.
pub fn login(session: RwSignal<Session>, user: User, access: String, refresh: String) {
    if let Ok(raw) = serde_json::to_string(&user) {
        storage::set_item(USER_KEY, &raw);
    }
    storage::set_item(ACCESS_KEY, &access);
    storage::set_item(REFRESH_KEY, &refresh);
    session.set(Session::authenticated(user, access, refresh));
}

/// Clear the session wholesale and drop all three storage keys. Subsequent
/// HTTP requests carry no bearer token.
pub fn logout(session: RwSignal<Session>) {
    storage::remove_item(USER_KEY);
    storage::remove_item(ACCESS_KEY);
    storage::remove_item(REFRESH_KEY);
    session.set(Session::default());
}
