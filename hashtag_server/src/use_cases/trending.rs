use chrono::Duration;
use std::collections::HashMap;

use crate::domain::hashtags::{
    distinct, engagement_weight, extract_from_text, fallback_from_query, from_video_tags,
    normalize,
};
use crate::domain::{Clock, HashtagError, RankedHashtag, Video, VideoCatalog};

// Knobs for one ranking run.
#[derive(Debug, Clone, Copy)]
pub struct TrendingSettings {
    // Videos requested from the catalog search.
    pub max_results: u32,
    // Only videos published within this many days are searched.
    pub days_window: i64,
    // Maximum number of ranked tags returned.
    pub top_k: usize,
    // Maximum number of tags derived from the query when nothing ranks.
    pub fallback_limit: usize,
}

impl Default for TrendingSettings {
    fn default() -> Self {
        Self {
            max_results: 20,
            days_window: 30,
            top_k: 20,
            fallback_limit: 10,
        }
    }
}

// Trending hashtag use case with injected dependencies.
pub struct TrendingHashtags<K, C> {
    pub catalog: K,
    pub clock: C,
    pub settings: TrendingSettings,
}

impl<K, C> TrendingHashtags<K, C>
where
    K: VideoCatalog,
    C: Clock,
{
    // Ranked tags, best first, each with its score and usage count.
    pub async fn execute(&self, query: &str) -> Result<Vec<RankedHashtag>, HashtagError> {
        let published_after = self.published_after();
        let ids = self
            .catalog
            .search_video_ids(query, self.settings.max_results, &published_after)
            .await?;
        let videos = if ids.is_empty() {
            Vec::new()
        } else {
            self.catalog.video_details(&ids).await?
        };
        tracing::debug!(videos = videos.len(), "video details loaded.");

        let ranked = rank(&videos);
        if ranked.is_empty() {
            tracing::info!(query, "no hashtags found; falling back to query words.");
            return Ok(fallback_from_query(query, self.settings.fallback_limit)
                .into_iter()
                .map(|tag| RankedHashtag {
                    tag,
                    score: 0.0,
                    count: 0,
                })
                .collect());
        }

        Ok(ranked.into_iter().take(self.settings.top_k).collect())
    }

    // Tag strings only, best first.
    pub async fn get_hashtags(&self, query: &str) -> Result<Vec<String>, HashtagError> {
        Ok(self
            .execute(query)
            .await?
            .into_iter()
            .map(|ranked| ranked.tag)
            .collect())
    }

    // Start of the search window, second precision with a `Z` suffix.
    fn published_after(&self) -> String {
        let start = self.clock.now() - Duration::days(self.settings.days_window);
        start.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

// Score every distinct tag across videos; ties keep first-seen order.
fn rank(videos: &[Video]) -> Vec<RankedHashtag> {
    let mut ranked: Vec<RankedHashtag> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for video in videos {
        let snippet = &video.snippet;
        let mut found = extract_from_text(&snippet.title);
        found.extend(extract_from_text(&snippet.description));
        found.extend(from_video_tags(&snippet.tags));

        let weight = engagement_weight(video.statistics.view_count, video.statistics.like_count);

        for tag in distinct(normalize(found)) {
            let slot = *index.entry(tag.clone()).or_insert_with(|| {
                ranked.push(RankedHashtag {
                    tag,
                    score: 0.0,
                    count: 0,
                });
                ranked.len() - 1
            });
            ranked[slot].score += 1.0 + weight;
            ranked[slot].count += 1;
        }
    }

    // Stable sort keeps insertion order among equal scores.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    for entry in &mut ranked {
        entry.score = (entry.score * 1000.0).round() / 1000.0;
    }
    ranked
}
