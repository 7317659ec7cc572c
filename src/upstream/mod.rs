//! Upstream API subsystem.
//!
//! # Data Flow
//! ```text
//! validated word
//!     → prompt.rs (instruction template + wire body)
//!     → client.rs (bounded generateContent call)
//!     → raw body bytes back to the HTTP layer
//! ```

pub mod client;
pub mod prompt;

pub use client::{GenerativeClient, UpstreamError};
