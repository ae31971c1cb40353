//! Client-side checks run before any credentials leave the browser.
//!
//! Each validator returns the request payload on success or the exact
//! notice text to show on failure.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{LoginData, SignupData};

pub const MISSING_FIELDS: &str = "Please fill all the details";
pub const USERNAME_TOO_SHORT: &str = "Name should be at least 5 characters long";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const WEAK_PASSWORD: &str =
    "Password should be 6 - 16 characters long with at least a number and special character";

pub const MIN_USERNAME_CHARS: usize = 5;

/// Special characters a password must draw at least one from.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PASSWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9!@#$%^&*]{6,16}$").expect("password pattern"));

/// `local@domain.tld` with no whitespace.
#[must_use]
pub fn is_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

/// 6-16 characters from letters, digits and [`PASSWORD_SPECIALS`], with at
/// least one digit and one special.
#[must_use]
pub fn is_valid_password(raw: &str) -> bool {
    PASSWORD_RE.is_match(raw)
        && raw.chars().any(|c| c.is_ascii_digit())
        && raw.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Validate the signup form.
///
/// # Errors
///
/// Returns the notice text for the first failing rule.
pub fn validate_signup(username: &str, email: &str, password: &str) -> Result<SignupData, &'static str> {
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if username.chars().count() < MIN_USERNAME_CHARS {
        return Err(USERNAME_TOO_SHORT);
    }
    if !is_email(email) {
        return Err(INVALID_EMAIL);
    }
    if !is_valid_password(password) {
        return Err(WEAK_PASSWORD);
    }
    Ok(SignupData {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Validate the login form; both fields are required.
///
/// # Errors
///
/// Returns [`MISSING_FIELDS`] when either field is empty.
pub fn validate_login(email: &str, password: &str) -> Result<LoginData, &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(LoginData { email: email.to_owned(), password: password.to_owned() })
}
