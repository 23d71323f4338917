use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{FetchError, HashtagResponse, HashtagSource, Notifier, Query, QueryInput};

// Input field with a fixed value.
pub(crate) struct FixedInput(String);

impl FixedInput {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl QueryInput for FixedInput {
    fn value(&self) -> String {
        self.0.clone()
    }
}

// Notifier that keeps every alert for later inspection.
#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.lock().expect("alerts mutex poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        let mut guard = self.alerts.lock().expect("alerts mutex poisoned");
        guard.push(message.to_string());
    }
}

type FailureFactory = Arc<dyn Fn() -> FetchError + Send + Sync>;

// Hashtag source that answers every query the same way and records what it was asked.
#[derive(Clone)]
pub(crate) struct ScriptedSource {
    reply: Result<HashtagResponse, FailureFactory>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    pub(crate) fn replying(response: HashtagResponse) -> Self {
        Self {
            reply: Ok(response),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn failing(failure: impl Fn() -> FetchError + Send + Sync + 'static) -> Self {
        Self {
            reply: Err(Arc::new(failure)),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn requested_queries(&self) -> Vec<String> {
        self.queries.lock().expect("queries mutex poisoned").clone()
    }
}

#[async_trait]
impl HashtagSource for ScriptedSource {
    async fn fetch(&self, query: &Query) -> Result<HashtagResponse, FetchError> {
        {
            let mut guard = self.queries.lock().expect("queries mutex poisoned");
            guard.push(query.as_str().to_string());
        }

        match &self.reply {
            Ok(response) => Ok(response.clone()),
            Err(failure) => Err(failure()),
        }
    }
}
