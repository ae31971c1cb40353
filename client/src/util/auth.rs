//! Role routing and route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: anonymous visitors go
//! to the login page, and each role lands on its own dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const ADMIN_ROUTE: &str = "/admin";
pub const EMPLOYEE_ROUTE: &str = "/employee";

/// Dashboard for a role: admins get the admin view, every other role
/// (including the legacy `EMPLOYEE` value) gets the employee view.
#[must_use]
pub fn dashboard_route(role: Role) -> &'static str {
    if role.is_admin() { ADMIN_ROUTE } else { EMPLOYEE_ROUTE }
}

/// Path for an employee's detail view.
#[must_use]
pub fn employee_detail_route(id: &str) -> String {
    format!("{EMPLOYEE_ROUTE}/{id}")
}

/// Who may see a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Login and signup: logged-in users are sent to their dashboard.
    Anonymous,
    /// Any logged-in user.
    Member,
    /// Logged-in admins only.
    Admin,
}

/// Where to send the visitor instead, or `None` to stay.
#[must_use]
pub fn redirect_for(access: Access, session: &SessionState) -> Option<&'static str> {
    match (access, session.role()) {
        (Access::Anonymous, Some(role)) => Some(dashboard_route(role)),
        (Access::Anonymous, None) => None,
        (Access::Member | Access::Admin, None) => Some(LOGIN_ROUTE),
        (Access::Member, Some(_)) => None,
        (Access::Admin, Some(role)) => (!role.is_admin()).then_some(EMPLOYEE_ROUTE),
    }
}

/// Re-run [`redirect_for`] whenever the session changes and navigate away
/// when it says so.
pub fn install_access_guard<F>(access: Access, session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = session.with(|s| redirect_for(access, s)) {
            navigate(path, NavigateOptions::default());
        }
    });
}
