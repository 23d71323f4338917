use crate::interface_adapters::handlers::api_hashtags;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub fn app(state: Arc<AppState>) -> Router {
    // Browser pages on other origins call this API directly.
    Router::new()
        .route("/api/hashtags", get(api_hashtags))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
