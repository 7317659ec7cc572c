//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (API_KEY, PORT)
//!     → env.rs (read & parse)
//!     → ServiceConfig (schema defaults filled in)
//!     → shared via Arc to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no reload path
//! - All fields have defaults so only the credential is mandatory,
//!   and even that is enforced per request, not at startup
//! - The environment is read exactly once; everything downstream
//!   receives the config through injected state, never ambiently

pub mod env;
pub mod schema;

pub use env::{load_from_env, ConfigError};
pub use schema::{ListenerConfig, RateLimitConfig, ServiceConfig, TimeoutConfig, UpstreamConfig};
