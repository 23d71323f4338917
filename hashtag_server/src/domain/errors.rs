use std::fmt;

// Domain-level errors for the trending hashtag workflow.
#[derive(Debug)]
pub enum HashtagError {
    MissingApiKey,
    Upstream(String),
    Decode(String),
}

impl fmt::Display for HashtagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashtagError::MissingApiKey => write!(f, "YOUTUBE_API_KEY missing. Put it in .env"),
            HashtagError::Upstream(message) => write!(f, "video catalog error: {message}"),
            HashtagError::Decode(message) => {
                write!(f, "video catalog response decode error: {message}")
            }
        }
    }
}

impl std::error::Error for HashtagError {}
