// Outcome reported by the hashtag endpoint for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashtagResponse {
    // Tags in the order the endpoint ranked them.
    Hashtags(Vec<String>),
    // Human-readable message from the endpoint.
    Error(String),
}
