//! Networking modules for the remote employee-records API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the base address and credentialed transport, `api` maps each
//! REST endpoint to a typed call, `types` defines the wire schema and `error`
//! the failure type every call shares.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
