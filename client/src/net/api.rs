//! REST endpoints of the remote employee-records API.
//!
//! Each function performs one call through [`super::http`] and unwraps the
//! part of the response envelope its caller needs, keeping the server's
//! `message` alongside for success notices.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A 2xx reply missing the
//! record an endpoint promises is reported as [`ApiError::Decode`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{self, Method};
use super::types::{Employee, EmployeeFields, EmployeePatch, Envelope, LoginData, SignupData, User, UserPatch};

pub const SIGNUP_PATH: &str = "/user/signup";
pub const LOGIN_PATH: &str = "/user/login";
pub const LOGOUT_PATH: &str = "/user/logout";
pub const ME_PATH: &str = "/user/me";
pub const UPDATE_USER_PATH: &str = "/user/update";
pub const CREATE_EMPLOYEE_PATH: &str = "/employee/create";
pub const CREATE_BULK_PATH: &str = "/employee/create/bulk";
pub const ALL_EMPLOYEES_PATH: &str = "/employee/all";
pub const OWN_EMPLOYEE_PATH: &str = "/employee/";

/// Multipart form field carrying the bulk-import file.
pub const BULK_FILE_FIELD: &str = "file";

/// A decoded reply plus the server's human-readable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply<T> {
    pub data: T,
    pub message: Option<String>,
}

impl<T> Reply<T> {
    fn new(data: T, message: Option<String>) -> Self {
        Self { data, message }
    }
}

/// Path for the single-employee routes (`GET`/`PATCH`/`DELETE`). The id
/// arrives decoded from the route, so it is re-encoded as one segment.
#[must_use]
pub fn employee_path(id: &str) -> String {
    format!("/employee/{}", urlencoding::encode(id))
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::Decode(format!("missing `{field}` in response")))
}

fn user_reply(env: Envelope) -> Result<Reply<User>, ApiError> {
    let user = require(env.user, "user")?;
    Ok(Reply::new(user, env.message))
}

fn employee_reply(env: Envelope) -> Result<Reply<Employee>, ApiError> {
    let employee = require(env.employee, "employee")?;
    Ok(Reply::new(employee, env.message))
}

fn employees_reply(env: Envelope) -> Reply<Vec<Employee>> {
    Reply::new(env.employees.unwrap_or_default(), env.message)
}

// =============================================================================
// SESSION
// =============================================================================

/// Register a new account via `POST /user/signup`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn signup(data: &SignupData) -> Result<Reply<()>, ApiError> {
    let env = http::send_json(Method::Post, SIGNUP_PATH, Some(data)).await?;
    Ok(Reply::new((), env.message))
}

/// Log in via `POST /user/login`, returning the authenticated user.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, is rejected, or the reply
/// carries no user.
pub async fn login(data: &LoginData) -> Result<Reply<User>, ApiError> {
    let env = http::send_json(Method::Post, LOGIN_PATH, Some(data)).await?;
    user_reply(env)
}

/// End the server session via `POST /user/logout`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn logout() -> Result<Reply<()>, ApiError> {
    let env = http::send(Method::Post, LOGOUT_PATH).await?;
    Ok(Reply::new((), env.message))
}

/// Fetch the session's user from `GET /user/me`. `None` when the reply has
/// no user payload.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn fetch_me() -> Result<Reply<Option<User>>, ApiError> {
    let env = http::send(Method::Get, ME_PATH).await?;
    Ok(Reply::new(env.user, env.message))
}

/// Update the session user's profile via `PUT /user/update`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn update_user(patch: &UserPatch) -> Result<Reply<Option<User>>, ApiError> {
    let env = http::send_json(Method::Put, UPDATE_USER_PATH, Some(patch)).await?;
    Ok(Reply::new(env.user, env.message))
}

// =============================================================================
// EMPLOYEES
// =============================================================================

/// Create one employee via `POST /employee/create`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, is rejected, or the reply
/// carries no employee.
pub async fn create_employee(fields: &EmployeeFields) -> Result<Reply<Employee>, ApiError> {
    let env = http::send_json(Method::Post, CREATE_EMPLOYEE_PATH, Some(fields)).await?;
    employee_reply(env)
}

/// Import employees from a `.xlsx`/`.csv` file via `POST /employee/create/bulk`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the upload fails or is rejected.
#[cfg(feature = "hydrate")]
pub async fn create_employees_bulk(file: &web_sys::File) -> Result<Reply<Vec<Employee>>, ApiError> {
    let env = http::send_file(CREATE_BULK_PATH, BULK_FILE_FIELD, file).await?;
    Ok(employees_reply(env))
}

/// Fetch every employee from `GET /employee/all`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn fetch_all_employees() -> Result<Reply<Vec<Employee>>, ApiError> {
    let env = http::send(Method::Get, ALL_EMPLOYEES_PATH).await?;
    Ok(employees_reply(env))
}

/// Fetch the employee record linked to the session user from `GET /employee/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, is rejected, or the reply
/// carries no employee.
pub async fn fetch_own_employee() -> Result<Reply<Employee>, ApiError> {
    let env = http::send(Method::Get, OWN_EMPLOYEE_PATH).await?;
    employee_reply(env)
}

/// Fetch one employee from `GET /employee/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, is rejected, or the reply
/// carries no employee.
pub async fn fetch_employee(id: &str) -> Result<Reply<Employee>, ApiError> {
    let env = http::send(Method::Get, &employee_path(id)).await?;
    employee_reply(env)
}

/// Apply a partial update via `PATCH /employee/:id`, returning the stored record.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, is rejected, or the reply
/// carries no employee.
pub async fn update_employee(id: &str, patch: &EmployeePatch) -> Result<Reply<Employee>, ApiError> {
    let env = http::send_json(Method::Patch, &employee_path(id), Some(patch)).await?;
    employee_reply(env)
}

/// Delete an employee via `DELETE /employee/:id`, echoing the id back.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn delete_employee(id: &str) -> Result<Reply<String>, ApiError> {
    let env = http::send(Method::Delete, &employee_path(id)).await?;
    Ok(Reply::new(id.to_owned(), env.message))
}
