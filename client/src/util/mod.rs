//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! from page logic to improve reuse and testability.

pub mod auth;
pub mod export;
pub mod hire_dates;
pub mod storage;
pub mod validation;
