//! Employee-record operations.
//!
//! Each operation runs the same lifecycle against [`EmployeesState`]:
//! `begin`, await the call, then [`settle`] the reply into the store. Fetches
//! are silent on success; mutations raise a success notice with the server's
//! message. Every failure raises an error notice.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use std::future::Future;

use leptos::prelude::*;

use super::notify;
use crate::net::api::{self, Reply};
use crate::net::error::{ApiError, UNKNOWN_ERROR};
use crate::net::types::{Employee, EmployeeFields, EmployeePatch};
use crate::state::employees::EmployeesState;
use crate::state::notice::{NoticeKind, NoticeState};

pub const CREATED: &str = "Employee created";
pub const IMPORTED: &str = "Employees imported";
pub const UPDATED: &str = "Employee updated";
pub const DELETED: &str = "Employee deleted";

/// Merge a finished call into the store.
///
/// Returns the server's message on success (if any), so the caller can pick
/// the notice text.
///
/// # Errors
///
/// Returns the user-facing error text after marking the store failed.
pub fn settle<T>(
    state: &mut EmployeesState,
    result: Result<Reply<T>, ApiError>,
    apply: impl FnOnce(&mut EmployeesState, T),
) -> Result<Option<String>, String> {
    match result {
        Ok(reply) => {
            apply(state, reply.data);
            Ok(reply.message.filter(|m| !m.trim().is_empty()))
        }
        Err(err) => {
            log::warn!("employee request failed: {err}");
            let text = err.user_message(UNKNOWN_ERROR);
            state.fail(text.clone());
            Err(text)
        }
    }
}

async fn run<T, Fut>(
    employees: RwSignal<EmployeesState>,
    notices: RwSignal<NoticeState>,
    call: Fut,
    apply: impl FnOnce(&mut EmployeesState, T),
    success: Option<&str>,
) -> bool
where
    Fut: Future<Output = Result<Reply<T>, ApiError>>,
{
    employees.update(EmployeesState::begin);
    let result = call.await;
    let mut settled = Ok(None);
    employees.update(|state| settled = settle(state, result, apply));
    match settled {
        Ok(message) => {
            if let Some(default) = success {
                notify(notices, NoticeKind::Success, message.unwrap_or_else(|| default.to_owned()));
            }
            true
        }
        Err(text) => {
            notify(notices, NoticeKind::Error, text);
            false
        }
    }
}

/// Load every employee (admin view).
pub async fn fetch_all(employees: RwSignal<EmployeesState>, notices: RwSignal<NoticeState>) -> bool {
    run(employees, notices, api::fetch_all_employees(), EmployeesState::apply_list, None).await
}

/// Load one employee into `current`.
pub async fn fetch_one(id: String, employees: RwSignal<EmployeesState>, notices: RwSignal<NoticeState>) -> bool {
    run(employees, notices, api::fetch_employee(&id), EmployeesState::apply_current, None).await
}

/// Load the session user's own employee record into `current`.
pub async fn fetch_own(employees: RwSignal<EmployeesState>, notices: RwSignal<NoticeState>) -> bool {
    run(employees, notices, api::fetch_own_employee(), EmployeesState::apply_current, None).await
}

/// Create one employee from the manual-entry form.
pub async fn create_one(
    fields: EmployeeFields,
    employees: RwSignal<EmployeesState>,
    notices: RwSignal<NoticeState>,
) -> bool {
    let apply = |state: &mut EmployeesState, created: Employee| state.apply_created(vec![created]);
    run(employees, notices, api::create_employee(&fields), apply, Some(CREATED)).await
}

/// Import employees from an uploaded spreadsheet.
#[cfg(feature = "hydrate")]
pub async fn create_bulk(
    file: web_sys::File,
    employees: RwSignal<EmployeesState>,
    notices: RwSignal<NoticeState>,
) -> bool {
    log::info!("importing employees from {}", file.name());
    run(employees, notices, api::create_employees_bulk(&file), EmployeesState::apply_created, Some(IMPORTED)).await
}

/// Apply a partial update and show the result as `current`.
pub async fn update(
    id: String,
    patch: EmployeePatch,
    employees: RwSignal<EmployeesState>,
    notices: RwSignal<NoticeState>,
) -> bool {
    run(employees, notices, api::update_employee(&id, &patch), EmployeesState::apply_updated, Some(UPDATED)).await
}

/// Delete one employee.
pub async fn delete(id: String, employees: RwSignal<EmployeesState>, notices: RwSignal<NoticeState>) -> bool {
    let apply = |state: &mut EmployeesState, deleted: String| state.apply_deleted(&deleted);
    run(employees, notices, api::delete_employee(&id), apply, Some(DELETED)).await
}
