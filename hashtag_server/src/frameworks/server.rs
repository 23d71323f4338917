// Framework bootstrap for the hashtag service runtime.

use crate::frameworks::{config, logging};
use crate::interface_adapters::clients::youtube::YouTubeClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::TrendingSettings;

use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn run(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    // Wire the HTTP routes for the hashtag API.
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; missing is fine.
    let _ = dotenvy::dotenv();
    logging::init(config::log_format());

    let state = build_state()?;
    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

pub fn build_state() -> Result<Arc<AppState>> {
    let api_url = config::youtube_api_url();
    let api_key = config::youtube_api_key();
    let timeout = config::youtube_timeout();
    if api_key.is_none() {
        tracing::warn!("YOUTUBE_API_KEY is not set; hashtag requests will fail.");
    }

    let catalog = YouTubeClient::new(api_url.clone(), api_key, timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize youtube client: {e}")))?;
    tracing::debug!(
        api_url = %api_url,
        timeout_ms = timeout.as_millis() as u64,
        "youtube client configured"
    );

    Ok(Arc::new(AppState {
        catalog: Arc::new(catalog),
        clock: Arc::new(SystemClock),
        settings: TrendingSettings::default(),
    }))
}
