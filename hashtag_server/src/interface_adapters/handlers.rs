use crate::interface_adapters::protocol::{ErrorResponse, HashtagsQuery, HashtagsResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::TrendingHashtags;
use axum::{
    Json,
    extract::{RawQuery, State},
    http::StatusCode,
};
use std::sync::Arc;

// Ranked hashtags for a topic. The topic is trimmed here; blank means 400.
#[tracing::instrument(
    name = "api_hashtags",
    skip_all,
    fields(query = tracing::field::Empty)
)]
pub async fn api_hashtags(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Result<Json<HashtagsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let params = HashtagsQuery::from_raw(raw.as_deref());
    let query = params.query.as_deref().unwrap_or_default().trim();
    if query.is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "No query provided"));
    }
    tracing::Span::current().record("query", query);

    let use_case = TrendingHashtags {
        catalog: state.catalog.clone(),
        clock: state.clock.clone(),
        settings: state.settings,
    };

    let hashtags = use_case.get_hashtags(query).await.map_err(|e| {
        tracing::error!(error = %e, "failed to rank hashtags.");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
    })?;

    tracing::info!(count = hashtags.len(), "hashtags ranked.");

    Ok(Json(HashtagsResponse { hashtags }))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
