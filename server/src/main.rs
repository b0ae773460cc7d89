//! LedgerDesk web host.
//!
//! Serves the server-rendered Leptos app, its `/pkg` assets and a health
//! check. The REST and realtime backends live elsewhere; this process only
//! renders and ships the client.

mod config;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // The same compile-time values are baked into the WASM bundle, so a bad
    // auth config would break every guarded route.
    let auth = client::config::startup_auth_config().expect("invalid LEDGERDESK auth configuration");
    tracing::info!(method = %auth.method, cookie = %auth.token_cookie, "auth configured");

    let app = routes::app().expect("leptos configuration");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "ledgerdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
