//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `employees`, `notice`) so pages can
//! depend on small focused models. Each store is a plain struct held in an
//! `RwSignal` provided through context; reducers are ordinary `&mut self`
//! methods so they test without a reactive runtime.

pub mod employees;
pub mod notice;
pub mod request;
pub mod session;
