use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::domain::{FetchError, HashtagResponse, HashtagSource, Query};
use crate::interface_adapters::protocol::decode_body;

// URI component encoding: everything except alphanumerics and `-_.!~*'()`
// is escaped, so a space becomes `%20` rather than `+`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug)]
pub enum ClientBuildError {
    InvalidEndpoint(url::ParseError),
    Http(reqwest::Error),
}

impl fmt::Display for ClientBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientBuildError::InvalidEndpoint(err) => write!(f, "invalid hashtag endpoint: {err}"),
            ClientBuildError::Http(err) => write!(f, "failed to build http client: {err}"),
        }
    }
}

impl std::error::Error for ClientBuildError {}

// Thin reqwest client for the hashtag endpoint.
#[derive(Clone)]
pub struct HashtagApiClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HashtagApiClient {
    // No timeout unless one is given; the network layer's defaults apply.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, ClientBuildError> {
        let endpoint = Url::parse(endpoint).map_err(ClientBuildError::InvalidEndpoint)?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientBuildError::Http)?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // Endpoint with `query=<encoded topic>` as its only query parameter.
    pub fn request_url(&self, query: &Query) -> Url {
        let mut url = self.endpoint.clone();
        let encoded = utf8_percent_encode(query.as_str(), URI_COMPONENT);
        url.set_query(Some(&format!("query={encoded}")));
        url
    }
}

#[async_trait]
impl HashtagSource for HashtagApiClient {
    async fn fetch(&self, query: &Query) -> Result<HashtagResponse, FetchError> {
        let url = self.request_url(query);
        tracing::debug!(url = %url, "requesting hashtags.");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        // Status is not inspected: 4xx/5xx bodies carry `{ "error": ... }`.
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        tracing::debug!(%status, bytes = body.len(), "hashtag response received.");

        decode_body(&body)
    }
}
