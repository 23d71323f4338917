// Boots the real router on an ephemeral port for integration tests, plus a
// stub of the YouTube search and videos endpoints for it to call.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use hashtag_server::interface_adapters::clients::youtube::YouTubeClient;
use hashtag_server::interface_adapters::state::{AppState, SystemClock};
use hashtag_server::use_cases::TrendingSettings;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const STUB_API_KEY: &str = "SECRETKEY123";

// Serve on this test's runtime and return the base URL.
pub async fn spawn_server(catalog: YouTubeClient) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    let state = Arc::new(AppState {
        catalog: Arc::new(catalog),
        clock: Arc::new(SystemClock),
        settings: TrendingSettings::default(),
    });

    tokio::spawn(async move {
        hashtag_server::run(listener, state)
            .await
            .expect("server failed");
    });

    format!("http://{addr}")
}

// The catalog has no API key, so every lookup fails before touching the network.
pub async fn spawn_server_without_api_key() -> String {
    let catalog = YouTubeClient::new("http://127.0.0.1:9", None, Duration::from_secs(1))
        .expect("youtube client should build");
    spawn_server(catalog).await
}

// A client for the stub, holding the key the stub accepts.
pub fn catalog_client(stub: &CatalogStub) -> YouTubeClient {
    YouTubeClient::new(
        stub.base_url.clone(),
        Some(STUB_API_KEY.to_string()),
        Duration::from_secs(5),
    )
    .expect("youtube client should build")
}

// What the stub was asked for, in arrival order.
#[derive(Clone, Default)]
struct Recorded {
    search_queries: Arc<Mutex<Vec<String>>>,
    video_ids: Arc<Mutex<Vec<String>>>,
}

pub struct CatalogStub {
    pub base_url: String,
    recorded: Recorded,
}

impl CatalogStub {
    // `q` of every search request.
    pub fn search_queries(&self) -> Vec<String> {
        self.recorded.search_queries.lock().unwrap().clone()
    }

    // Raw `id` parameter of every videos request.
    pub fn video_ids(&self) -> Vec<String> {
        self.recorded.video_ids.lock().unwrap().clone()
    }
}

// Start the stub on this test's runtime.
pub async fn spawn_catalog_stub() -> CatalogStub {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    let recorded = Recorded::default();
    let app = Router::new()
        .route("/search", get(search))
        .route("/videos", get(videos))
        .with_state(recorded.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    CatalogStub {
        base_url: format!("http://{addr}"),
        recorded,
    }
}

fn key_rejected(params: &HashMap<String, String>) -> Option<Response> {
    (params.get("key").map(String::as_str) != Some(STUB_API_KEY)).then(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "API key not valid" } })),
        )
            .into_response()
    })
}

// Replies depend on `q`:
// - `quota`: 403 with the API's error envelope
// - `garbled`: 200 with a non-JSON body
// - anything else: videos a, b and c plus a channel hit without a video id
async fn search(
    State(recorded): State<Recorded>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = key_rejected(&params) {
        return rejection;
    }
    let q = params.get("q").cloned().unwrap_or_default();
    recorded.search_queries.lock().unwrap().push(q.clone());

    match q.as_str() {
        "quota" => (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "code": 403, "message": "quota" } })),
        )
            .into_response(),
        "garbled" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => Json(json!({
            "items": [
                { "id": { "kind": "youtube#video", "videoId": "a" } },
                { "id": { "kind": "youtube#channel", "channelId": "UC1" } },
                { "id": { "kind": "youtube#video", "videoId": "b" } },
                { "id": { "kind": "youtube#video", "videoId": "c" } }
            ]
        }))
        .into_response(),
    }
}

// Details are only served for exactly `id=a,b,c`; other ids get no items.
async fn videos(
    State(recorded): State<Recorded>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = key_rejected(&params) {
        return rejection;
    }
    let ids = params.get("id").cloned().unwrap_or_default();
    recorded.video_ids.lock().unwrap().push(ids.clone());

    if ids != "a,b,c" {
        return Json(json!({ "items": [] })).into_response();
    }
    Json(json!({
        "items": [
            {
                "snippet": { "title": "Lazy #Cats", "description": "", "tags": ["pets"] },
                "statistics": { "viewCount": "999", "likeCount": "9" }
            },
            {
                "snippet": { "title": "More #cats", "description": "tiny #kitten" },
                "statistics": { "viewCount": "9" }
            },
            {
                "snippet": { "title": "plain upload" }
            }
        ]
    }))
    .into_response()
}
