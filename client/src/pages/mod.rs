//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetch-on-mount, form
//! submission) and delegates rendering details to `components`.

pub mod admin_dashboard;
pub mod employee_dashboard;
pub mod employee_detail;
pub mod employee_form;
pub mod login;
pub mod signup;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::*;

/// Blank every text input once a submit has settled, success or not.
pub fn clear_inputs(inputs: &[RwSignal<String>]) {
    for input in inputs {
        input.set(String::new());
    }
}
