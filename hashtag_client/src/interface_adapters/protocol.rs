use serde::Deserialize;

use crate::domain::{FetchError, HashtagResponse};

// Body returned by `GET /api/hashtags`, in either of its two shapes.
#[derive(Debug, Deserialize)]
pub struct HashtagsPayload {
    // Present (and non-empty) when the endpoint could not produce tags.
    #[serde(default)]
    pub error: Option<String>,
    // Ranked tags, best first.
    #[serde(default)]
    pub hashtags: Option<Vec<String>>,
}

impl HashtagsPayload {
    // An `error` field wins over `hashtags`; an empty error string does not
    // count as one. A body with neither is malformed.
    pub fn into_response(self) -> Result<HashtagResponse, FetchError> {
        match (self.error, self.hashtags) {
            (Some(error), _) if !error.is_empty() => Ok(HashtagResponse::Error(error)),
            (_, Some(hashtags)) => Ok(HashtagResponse::Hashtags(hashtags)),
            _ => Err(FetchError::Decode(
                "response has neither `error` nor `hashtags`".to_string(),
            )),
        }
    }
}

pub fn decode_body(body: &str) -> Result<HashtagResponse, FetchError> {
    serde_json::from_str::<HashtagsPayload>(body)
        .map_err(|err| FetchError::Decode(err.to_string()))?
        .into_response()
}
