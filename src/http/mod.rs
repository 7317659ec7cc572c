//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, ambient layers)
//!     → middleware.rs (credential guard, /api only)
//!     → security::rate_limit (per-IP window, /api only)
//!     → explain.rs (validate, prompt, upstream call, relay)
//!     → error.rs (terminal mapping of any failure)
//!
//! GET /health → health.rs (no guards)
//! ```

pub mod error;
pub mod explain;
pub mod health;
pub mod middleware;
pub mod request;
pub mod server;

pub use error::{ApiError, ErrorEnvelope};
pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
