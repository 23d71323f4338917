use crate::domain::{
    Element, HashtagResponse, HashtagSource, Notifier, Query, QueryInput, ResultsRegion,
};

// Shown when the trigger fires with nothing typed in.
pub const EMPTY_QUERY_ALERT: &str = "Please enter a topic!";
// Rendered for every transport or decode failure alike.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch hashtags.";

// Which branch one cycle ended in. Every user-visible effect has already
// been applied through the ports by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    InputEmpty,
    Rendered { count: usize },
    RemoteError,
    RequestFailed,
}

// Fetch-and-render handler with injected dependencies. Holds no state of
// its own, so overlapping cycles are independent and render in the order
// their responses arrive.
pub struct HashtagFetchHandler<I, R, N, S> {
    pub input: I,
    pub results: R,
    pub notifier: N,
    pub source: S,
}

impl<I, R, N, S> HashtagFetchHandler<I, R, N, S>
where
    I: QueryInput,
    R: ResultsRegion,
    N: Notifier,
    S: HashtagSource,
{
    #[tracing::instrument(name = "fetch_and_render", skip_all)]
    pub async fn fetch_and_render(&self) -> CycleOutcome {
        let query = Query::new(self.input.value());

        // Pre-flight guard: nothing goes over the wire for an empty topic.
        if query.is_empty() {
            self.notifier.alert(EMPTY_QUERY_ALERT);
            return CycleOutcome::InputEmpty;
        }

        tracing::debug!(query = %query.as_str(), "fetching hashtags.");

        match self.source.fetch(&query).await {
            Ok(HashtagResponse::Error(message)) => {
                tracing::info!(message = %message, "hashtag endpoint reported an error.");
                self.replace_with_error(message);
                CycleOutcome::RemoteError
            }
            Ok(HashtagResponse::Hashtags(tags)) => {
                let count = tags.len();
                self.results.clear();
                for tag in tags {
                    self.results.append(Element::chip(tag));
                }
                tracing::info!(count, "hashtags rendered.");
                CycleOutcome::Rendered { count }
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching hashtags");
                self.replace_with_error(FETCH_FAILED_MESSAGE);
                CycleOutcome::RequestFailed
            }
        }
    }

    fn replace_with_error(&self, message: impl Into<String>) {
        self.results.clear();
        self.results.append(Element::error_text(message));
    }
}
