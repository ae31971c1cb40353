//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (notices, tables, inputs) while reading
//! store state from Leptos context providers.

pub mod app_header;
pub mod employee_table;
pub mod form_input;
pub mod notice_tray;
pub mod status_banner;
