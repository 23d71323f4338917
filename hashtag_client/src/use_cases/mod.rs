// Use cases layer: the fetch-and-render cycle.

pub mod fetch_and_render;
#[cfg(test)]
pub(crate) mod test_support;

pub use fetch_and_render::{
    CycleOutcome, EMPTY_QUERY_ALERT, FETCH_FAILED_MESSAGE, HashtagFetchHandler,
};
