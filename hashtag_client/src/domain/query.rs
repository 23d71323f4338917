// Topic string typed by the user. Kept exactly as entered: no trimming,
// no case folding, no length rules beyond the empty check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Only the empty string counts; whitespace is a valid topic.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
