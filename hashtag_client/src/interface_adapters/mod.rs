// Interface adapters: HTTP client, wire payloads and the terminal/HTML surfaces.

pub mod clients;
pub mod html;
pub mod protocol;
pub mod region;
pub mod terminal;
