// Use cases layer: application workflows for the hashtag service.

pub mod trending;

pub use trending::{TrendingHashtags, TrendingSettings};
