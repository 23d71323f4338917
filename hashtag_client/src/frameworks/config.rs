use std::{env, time::Duration};

// Runtime settings for the terminal client, read from the environment.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

pub fn hashtag_api_url() -> String {
    env::var("HASHTAG_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:5000/api/hashtags".to_string())
}

// Unset (or unparsable) means no client-side timeout.
pub fn client_timeout() -> Option<Duration> {
    env::var("HASHTAG_CLIENT_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
}

pub fn output_format() -> OutputFormat {
    match env::var("HASHTAG_OUTPUT_FORMAT").as_deref() {
        Ok("html") => OutputFormat::Html,
        _ => OutputFormat::Text,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    // Only `json` (any case) selects JSON lines.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

pub fn log_format() -> LogFormat {
    LogFormat::parse(env::var("LOG_FORMAT").ok().as_deref())
}
