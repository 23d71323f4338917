// Domain layer: video data, hashtag rules and the catalog port.

pub mod errors;
pub mod hashtags;
pub mod ports;
pub mod video;

pub use errors::HashtagError;
pub use ports::{Clock, VideoCatalog};
pub use video::{RankedHashtag, Video, VideoSnippet, VideoStatistics};
