// Domain layer: the query, the remote outcome and the rendered view model.

mod errors;
mod ports;
mod query;
mod response;
mod view;

// Re-export the domain boundary types and ports.
pub use errors::FetchError;
pub use ports::{HashtagSource, Notifier, QueryInput, ResultsRegion};
pub use query::Query;
pub use response::HashtagResponse;
pub use view::{Element, ElementKind, InlineStyle};
