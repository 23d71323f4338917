use serde::Serialize;

// Query string of `GET /api/hashtags`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HashtagsQuery {
    pub query: Option<String>,
}

impl HashtagsQuery {
    // Form-decode the raw query string. A repeated `query` key keeps its
    // first value; unknown keys are ignored.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let query = raw.and_then(|raw| {
            url::form_urlencoded::parse(raw.as_bytes())
                .find(|(key, _)| key == "query")
                .map(|(_, value)| value.into_owned())
        });
        Self { query }
    }
}

// Success payload: tags, best first.
#[derive(Debug, Serialize)]
pub struct HashtagsResponse {
    pub hashtags: Vec<String>,
}

// Error envelope shared by every failure status.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
