// Interface adapters: HTTP routes, wire protocol and the video catalog client.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
