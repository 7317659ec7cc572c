//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming /api request:
//!     → credential guard (http::middleware)
//!     → rate_limit.rs (check per-IP window)
//!     → Pass to handler
//! ```
//!
//! # Design Decisions
//! - Fail closed: reject on any check failure
//! - The health endpoint bypasses the limiter so probes are never starved

pub mod rate_limit;

pub use rate_limit::{rate_limit_middleware, RateLimiterState};
