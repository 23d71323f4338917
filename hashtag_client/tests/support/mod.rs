// Stub hashtag endpoint served on an ephemeral port for integration tests.
use axum::{
    Json, Router,
    extract::RawQuery,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use hashtag_client::domain::{Element, Notifier, QueryInput};
use serde_json::json;
use std::sync::{Arc, Mutex};

// Replies depend on the raw query string so tests can steer the stub:
// - `query=cats`: three tags
// - `query=missing`: 400 with an error body
// - `query=broken`: non-JSON body
// - anything else: echoes the raw query back as the only tag
async fn api_hashtags(RawQuery(raw): RawQuery) -> Response {
    let raw = raw.unwrap_or_default();
    match raw.as_str() {
        "query=cats" => Json(json!({ "hashtags": ["#cats", "#pets", "#cute"] })).into_response(),
        "query=missing" => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "no results" })),
        )
            .into_response(),
        "query=broken" => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => Json(json!({ "hashtags": [raw] })).into_response(),
    }
}

// Start the stub on this test's runtime and return the endpoint URL.
pub async fn spawn_stub() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    let app = Router::new().route("/api/hashtags", get(api_hashtags));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });
    format!("http://{addr}/api/hashtags")
}

// Endpoint on a port nothing listens on.
pub async fn unreachable_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}/api/hashtags")
}

pub struct Field(pub &'static str);

impl QueryInput for Field {
    fn value(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Clone, Default)]
pub struct Alerts(pub Arc<Mutex<Vec<String>>>);

impl Notifier for Alerts {
    fn alert(&self, message: &str) {
        self.0.lock().expect("alerts mutex poisoned").push(message.to_string());
    }
}

pub fn texts(elements: &[Element]) -> Vec<&str> {
    elements.iter().map(|element| element.text.as_str()).collect()
}
