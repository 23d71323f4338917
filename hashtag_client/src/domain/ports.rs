use async_trait::async_trait;

use crate::domain::errors::FetchError;
use crate::domain::query::Query;
use crate::domain::response::HashtagResponse;
use crate::domain::view::Element;

// The handler depends on these traits, not on a terminal, a document or
// an HTTP client. Dependencies point inwards to the domain layer.

// Source of the topic text (the `topicInput` field).
pub trait QueryInput: Send + Sync {
    fn value(&self) -> String;
}

// Container the outcome is rendered into (the `results` region).
pub trait ResultsRegion: Send + Sync {
    fn clear(&self);
    fn append(&self, element: Element);
}

// Blocking notification shown to the user.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

// Remote lookup of hashtags for a query.
#[async_trait]
pub trait HashtagSource: Send + Sync {
    async fn fetch(&self, query: &Query) -> Result<HashtagResponse, FetchError>;
}
