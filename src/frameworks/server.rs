// Framework bootstrap for the card form request service.

use crate::frameworks::config;
use crate::interface_adapters::clients::{ClientBuildError, HttpRequestClient};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;

use std::io::Result;
use std::net::SocketAddr;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serves the `/request/*` API on an already bound listener.
pub async fn run(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, build_state()).await
}

fn build_state() -> AppState {
    let cards = config::registered_cards();
    tracing::debug!(registered_cards = cards.len(), "card registry seeded");
    AppState::with_cards(cards)
}

// Request client for form hosts, configured from the environment.
pub fn build_request_client() -> std::result::Result<HttpRequestClient, ClientBuildError> {
    let base_url = config::request_base_url();
    let timeout = config::request_timeout();
    let client = HttpRequestClient::new(&base_url, timeout)?;
    tracing::debug!(
        base_url = %base_url,
        timeout_ms = timeout.map(|t| t.as_millis()),
        "request client configured"
    );
    Ok(client)
}
