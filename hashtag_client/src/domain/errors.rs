use std::fmt;

// Reasons a request cycle can fail before anything usable comes back.
// Every variant is shown to the user the same way; the split only feeds
// the diagnostic log.
#[derive(Debug)]
pub enum FetchError {
    // Connection, timeout or body read failure.
    Transport(String),
    // Body was not JSON or did not match either expected shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(err) => write!(f, "hashtag transport error: {err}"),
            FetchError::Decode(err) => write!(f, "hashtag response decode error: {err}"),
        }
    }
}

impl std::error::Error for FetchError {}
