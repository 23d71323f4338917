// Text fields hashtags are mined from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoSnippet {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

// Engagement counters; missing counters are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoStatistics {
    pub view_count: u64,
    pub like_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Video {
    pub snippet: VideoSnippet,
    pub statistics: VideoStatistics,
}

// One ranked tag with its accumulated score and how many videos used it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedHashtag {
    pub tag: String,
    pub score: f64,
    pub count: u32,
}
