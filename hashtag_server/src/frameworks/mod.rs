// Frameworks layer: configuration and server bootstrap.

pub mod config;
pub mod logging;
pub mod server;
