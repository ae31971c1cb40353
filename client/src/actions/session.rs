//! Account and session operations.
//!
//! Successful logins and profile refreshes are written through to
//! `localStorage`; logout clears both stores and storage even when the
//! server call fails, so a stale session never survives a logout click.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::{notify, outcome};
use crate::net::api::{self, Reply};
use crate::net::error::ApiError;
use crate::net::types::{LoginData, SignupData, User, UserPatch};
use crate::state::employees::EmployeesState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::SessionState;

pub const SIGNUP_SUCCESS: &str = "Account created successfully";
pub const SIGNUP_FAILED: &str = "Failed to create account";
pub const LOGIN_SUCCESS: &str = "Login successful";
pub const LOGIN_FAILED: &str = "Failed to login";
pub const LOGOUT_SUCCESS: &str = "Logout successful";
pub const LOGOUT_FAILED: &str = "Failed to logout";
pub const REFRESH_FAILED: &str = "Failed to fetch user data";
pub const PROFILE_SUCCESS: &str = "Profile updated successfully";
pub const PROFILE_FAILED: &str = "Failed to update profile";

/// Apply a `/user/me` or `/user/update` reply. A reply without a user leaves
/// the session untouched.
///
/// Returns whether the session changed.
pub fn apply_user_refresh(session: &mut SessionState, user: Option<User>) -> bool {
    match user {
        Some(user) => {
            session.log_in(user);
            session.persist();
            true
        }
        None => false,
    }
}

/// Forget the user and wipe the persisted session.
pub fn apply_logout(session: &mut SessionState) {
    session.log_out();
    session.persist();
}

/// Register an account. Returns `true` on success.
pub async fn create_account(data: SignupData, notices: RwSignal<NoticeState>) -> bool {
    let result = api::signup(&data).await;
    match outcome(result, SIGNUP_SUCCESS, SIGNUP_FAILED) {
        Ok(((), text)) => {
            notify(notices, NoticeKind::Success, text);
            true
        }
        Err(text) => {
            notify(notices, NoticeKind::Error, text);
            false
        }
    }
}

/// Log in, persisting the session on success. Returns the user so the caller
/// can route by role.
pub async fn login(data: LoginData, session: RwSignal<SessionState>, notices: RwSignal<NoticeState>) -> Option<User> {
    let result = api::login(&data).await;
    match outcome(result, LOGIN_SUCCESS, LOGIN_FAILED) {
        Ok((user, text)) => {
            log::info!("logged in as {} ({})", user.username, user.role.as_str());
            session.update(|s| {
                s.log_in(user.clone());
                s.persist();
            });
            notify(notices, NoticeKind::Success, text);
            Some(user)
        }
        Err(text) => {
            notify(notices, NoticeKind::Error, text);
            None
        }
    }
}

/// Log out remotely, then clear local state regardless of the reply.
pub async fn logout(
    session: RwSignal<SessionState>,
    employees: RwSignal<EmployeesState>,
    notices: RwSignal<NoticeState>,
) {
    let result = api::logout().await;
    match outcome(result, LOGOUT_SUCCESS, LOGOUT_FAILED) {
        Ok(((), text)) => notify(notices, NoticeKind::Success, text),
        Err(text) => notify(notices, NoticeKind::Error, text),
    }
    session.update(apply_logout);
    employees.update(EmployeesState::clear);
}

/// Re-read the session user from the server. Failures keep the restored
/// session and only raise a notice.
pub async fn refresh_user(session: RwSignal<SessionState>, notices: RwSignal<NoticeState>) {
    let result = api::fetch_me().await;
    settle_user_reply(result, REFRESH_FAILED, None, session, notices);
}

/// Update the session user's profile. Returns `true` on success.
pub async fn update_profile(
    patch: UserPatch,
    session: RwSignal<SessionState>,
    notices: RwSignal<NoticeState>,
) -> bool {
    let result = api::update_user(&patch).await;
    settle_user_reply(result, PROFILE_FAILED, Some(PROFILE_SUCCESS), session, notices)
}

fn settle_user_reply(
    result: Result<Reply<Option<User>>, ApiError>,
    fallback: &str,
    success: Option<&str>,
    session: RwSignal<SessionState>,
    notices: RwSignal<NoticeState>,
) -> bool {
    match outcome(result, success.unwrap_or_default(), fallback) {
        Ok((user, text)) => {
            session.update(|s| {
                apply_user_refresh(s, user);
            });
            if success.is_some() {
                notify(notices, NoticeKind::Success, text);
            }
            true
        }
        Err(text) => {
            notify(notices, NoticeKind::Error, text);
            false
        }
    }
}
