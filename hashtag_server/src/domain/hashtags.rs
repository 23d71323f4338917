use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Rules for pulling hashtags out of video text and weighing them.

static HASHTAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#([A-Za-z0-9_]+)").expect("hashtag pattern is valid")
});
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+").expect("word pattern is valid"));

// Generic, low-signal tags that never rank.
const BLOCKLIST: [&str; 4] = ["#shorts", "shorts", "#viral", "#subscribe"];

const MIN_TAG_LEN: usize = 2;
const MAX_TAG_LEN: usize = 40;

// `#word` occurrences in free text, lowercased.
pub fn extract_from_text(text: &str) -> Vec<String> {
    HASHTAG_PATTERN
        .captures_iter(text)
        .map(|caps| format!("#{}", caps[1].to_lowercase()))
        .collect()
}

// Uploader-supplied tags, which may or may not carry a leading `#`.
pub fn from_video_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|tag| format!("#{}", tag.to_lowercase().trim().trim_start_matches('#')))
        .collect()
}

// Trim, prefix `#`, lowercase, then drop blocklisted and out-of-range tags.
pub fn normalize(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    tags.into_iter()
        .filter_map(|tag| {
            let tag = tag.trim();
            if tag.is_empty() {
                return None;
            }
            let tag = if tag.starts_with('#') {
                tag.to_lowercase()
            } else {
                format!("#{tag}").to_lowercase()
            };
            let len = tag.chars().count();
            let keep =
                !BLOCKLIST.contains(&tag.as_str()) && (MIN_TAG_LEN..=MAX_TAG_LEN).contains(&len);
            keep.then_some(tag)
        })
        .collect()
}

// Distinct tags in first-seen order, so a tag counts once per video.
pub fn distinct(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

// log10(views + 1) + 0.5 * log10(likes + 1)
pub fn engagement_weight(views: u64, likes: u64) -> f64 {
    (views as f64 + 1.0).log10() + 0.5 * (likes as f64 + 1.0).log10()
}

// Stand-in tags built from the query's own words when no video yields any.
pub fn fallback_from_query(query: &str, limit: usize) -> Vec<String> {
    let lowered = query.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|word| word.as_str())
        .filter(|word| word.len() > 2)
        .take(limit)
        .map(|word| format!("#{word}"))
        .collect()
}
