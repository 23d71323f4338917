use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::domain::{HashtagError, Video, VideoCatalog, VideoSnippet, VideoStatistics};

// Wire shapes of the YouTube Data API v3; only the fields we read.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VideoItem {
    snippet: SnippetPayload,
    statistics: Option<StatisticsPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnippetPayload {
    title: String,
    description: String,
    tags: Option<Vec<String>>,
}

// Counters arrive as decimal strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StatisticsPayload {
    view_count: Option<String>,
    like_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn into_video(item: VideoItem) -> Video {
    let statistics = item.statistics.unwrap_or_default();
    Video {
        snippet: VideoSnippet {
            title: item.snippet.title,
            description: item.snippet.description,
            tags: item.snippet.tags.unwrap_or_default(),
        },
        statistics: VideoStatistics {
            view_count: parse_count(statistics.view_count.as_deref()),
            like_count: parse_count(statistics.like_count.as_deref()),
        },
    }
}

fn parse_count(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

// Thin reqwest client for the YouTube search and videos endpoints.
#[derive(Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl YouTubeClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    fn api_key(&self) -> Result<&str, HashtagError> {
        self.api_key.as_deref().ok_or(HashtagError::MissingApiKey)
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, HashtagError> {
        let base = self.base_url.trim_end_matches('/');
        Url::parse_with_params(&format!("{base}/{path}"), params)
            .map_err(|err| HashtagError::Upstream(format!("invalid catalog url: {err}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, HashtagError> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| HashtagError::Upstream(err.without_url().to_string()))?;
        let status = res.status();

        // Keep the upstream message so the API error explains itself.
        if !status.is_success() {
            let message = res
                .json::<ApiErrorResponse>()
                .await
                .ok()
                .map(|payload| payload.error.message);
            return Err(HashtagError::Upstream(upstream_message(status, message)));
        }

        res.json::<T>()
            .await
            .map_err(|err| HashtagError::Decode(err.without_url().to_string()))
    }
}

fn upstream_message(status: StatusCode, message: Option<String>) -> String {
    match message {
        Some(message) => format!("{status}: {message}"),
        None => status.to_string(),
    }
}

#[async_trait]
impl VideoCatalog for YouTubeClient {
    async fn search_video_ids(
        &self,
        query: &str,
        max_results: u32,
        published_after: &str,
    ) -> Result<Vec<String>, HashtagError> {
        let key = self.api_key()?;
        let max_results = max_results.to_string();
        let url = self.endpoint(
            "search",
            &[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("order", "relevance"),
                ("publishedAfter", published_after),
                ("key", key),
            ],
        )?;

        let response: SearchResponse = self.get_json(url).await?;
        Ok(response
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect())
    }

    async fn video_details(&self, ids: &[String]) -> Result<Vec<Video>, HashtagError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let key = self.api_key()?;
        let joined = ids.join(",");
        let url = self.endpoint(
            "videos",
            &[("part", "snippet,statistics"), ("id", joined.as_str()), ("key", key)],
        )?;

        let response: VideosResponse = self.get_json(url).await?;
        Ok(response.items.into_iter().map(into_video).collect())
    }
}
