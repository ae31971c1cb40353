//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware pages to coordinate login redirects
//! and role-dependent rendering. The session is mirrored into two
//! `localStorage` keys so a reload restores it:
//!
//! - `isLoggedIn`: the string `"true"` while logged in
//! - `data`: the JSON-serialized [`User`]

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};
use crate::util::storage;

pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USER_KEY: &str = "data";

/// Logged-in flag plus user record.
///
/// The flag is derived from the record, so "logged in" holds exactly when a
/// user is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    user: Option<User>,
}

impl SessionState {
    /// Rebuild a session from the raw persisted values.
    ///
    /// Both keys must agree: a `"true"` flag with a missing, `"undefined"` or
    /// malformed record (or a record without the flag) restores as logged out.
    #[must_use]
    pub fn restore(logged_in: Option<&str>, data: Option<&str>) -> Self {
        if logged_in != Some("true") {
            return Self::default();
        }
        let user = data
            .filter(|raw| *raw != "undefined")
            .and_then(|raw| serde_json::from_str::<User>(raw).ok());
        Self { user }
    }

    /// Restore the session persisted in `localStorage`.
    #[must_use]
    pub fn load() -> Self {
        let flag = storage::get_item(LOGGED_IN_KEY);
        let data = storage::get_item(USER_KEY);
        Self::restore(flag.as_deref(), data.as_deref())
    }

    /// Values to persist, or `None` when storage should be cleared.
    #[must_use]
    pub fn storage_entries(&self) -> Option<[(&'static str, String); 2]> {
        let user = self.user.as_ref()?;
        let raw = serde_json::to_string(user).ok()?;
        Some([(USER_KEY, raw), (LOGGED_IN_KEY, "true".to_owned())])
    }

    /// Mirror the session into `localStorage`.
    pub fn persist(&self) {
        match self.storage_entries() {
            Some(entries) => {
                for (key, value) in entries {
                    storage::set_item(key, &value);
                }
            }
            None => storage::clear_all(),
        }
    }

    /// Record a successful login (or a refreshed/updated user record).
    pub fn log_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Forget the user.
    pub fn log_out(&mut self) {
        self.user = None;
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(Role::is_admin)
    }
}
