#![recursion_limit = "256"]

mod config;
mod routes;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    match config.api_upstream.as_deref() {
        Some(upstream) => tracing::info!(%upstream, "proxying /api to upstream"),
        None => tracing::warn!("HRDESK_API_UPSTREAM not set; /api proxy disabled"),
    }

    let app = match routes::app(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "hrdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
