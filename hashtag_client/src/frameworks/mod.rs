// Frameworks layer: configuration and process bootstrap.

pub mod app;
pub mod config;
pub mod logging;
