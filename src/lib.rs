//! Word explanation proxy.
//!
//! A single-route HTTP service: accept a word via POST /api, forward a
//! fixed instruction prompt to an external generative-language API, and
//! relay the upstream JSON body (or a normalized error envelope) back
//! to the caller.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod security;
pub mod upstream;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
