use std::{env, time::Duration};

// Runtime/server settings read from the environment.

pub fn http_port() -> u16 {
    env::var("HASHTAG_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000)
}

// Optional at startup; requests fail with a 500 until it is set.
pub fn youtube_api_key() -> Option<String> {
    env::var("YOUTUBE_API_KEY")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub fn youtube_api_url() -> String {
    env::var("YOUTUBE_API_URL")
        .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3".to_string())
}

pub fn youtube_timeout() -> Duration {
    let millis = env::var("YOUTUBE_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(20_000);
    Duration::from_millis(millis)
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
