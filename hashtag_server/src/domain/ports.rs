use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::errors::HashtagError;
use crate::domain::video::Video;

// Port for the video search backend used by the trending use case.
#[async_trait]
pub trait VideoCatalog: Send + Sync {
    // Ids of relevant videos published after `published_after` (RFC 3339).
    async fn search_video_ids(
        &self,
        query: &str,
        max_results: u32,
        published_after: &str,
    ) -> Result<Vec<String>, HashtagError>;

    // Snippet and statistics for the given ids.
    async fn video_details(&self, ids: &[String]) -> Result<Vec<Video>, HashtagError>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// Shared handles held in app state satisfy the ports directly.
#[async_trait]
impl<T: VideoCatalog + ?Sized> VideoCatalog for Arc<T> {
    async fn search_video_ids(
        &self,
        query: &str,
        max_results: u32,
        published_after: &str,
    ) -> Result<Vec<String>, HashtagError> {
        (**self)
            .search_video_ids(query, max_results, published_after)
            .await
    }

    async fn video_details(&self, ids: &[String]) -> Result<Vec<Video>, HashtagError> {
        (**self).video_details(ids).await
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
