//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health probe, the optional `/api` proxy, the static bundle under
//! `/pkg`, and the Leptos SSR routes into a single Axum router.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Errors raised while assembling the router.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// The Leptos site configuration is missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error(transparent)]
    Proxy(#[from] proxy::ProxyError),
}

/// Routes that need no Leptos configuration: health probe and `/api` proxy.
///
/// # Errors
///
/// Returns an error if the proxy client cannot be built.
pub fn service_routes(config: &ServerConfig) -> Result<Router, RouterError> {
    let mut router = Router::new().route("/healthz", get(healthz));
    if let Some(upstream) = config.api_upstream.as_deref() {
        router = router.merge(proxy::router(upstream, config.proxy_timeout)?);
    }
    Ok(router)
}

/// Full application: service routes + `/pkg` bundle + Leptos SSR.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section) or the proxy cannot be
/// built.
pub fn app(config: &ServerConfig) -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(hrdesk_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || hrdesk_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(service_routes(config)?
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
