//! Async operations dispatched by pages.
//!
//! ARCHITECTURE
//! ============
//! Each operation is one unit of async work: mark the store loading, await
//! the remote call, then settle the store and surface a notice. The pure
//! settle step lives beside each operation so it tests without a reactive
//! runtime; the `async fn`s only move results between signals.

pub mod employees;
pub mod session;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::*;

use crate::net::api::Reply;
use crate::net::error::ApiError;
use crate::state::notice::{NoticeKind, NoticeState};

/// Queue a notice and schedule its removal.
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, text: impl Into<String>) {
    let mut id = 0;
    notices.update(|n| id = n.push(kind, text));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::notice::NOTICE_TTL_MS).await;
        notices.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Split a reply into its data and the success text to show, or the error
/// text to show.
///
/// The server's message wins on both sides; `success` and `fallback` cover
/// replies that carry none.
///
/// # Errors
///
/// Returns the user-facing error text when `result` is an error.
pub fn outcome<T>(result: Result<Reply<T>, ApiError>, success: &str, fallback: &str) -> Result<(T, String), String> {
    match result {
        Ok(reply) => {
            let text = reply.message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| success.to_owned());
            Ok((reply.data, text))
        }
        Err(err) => {
            log::warn!("remote call failed: {err}");
            Err(err.user_message(fallback))
        }
    }
}
