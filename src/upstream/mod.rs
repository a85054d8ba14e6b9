//! Upstream integration subsystem.
//!
//! # Data Flow
//! ```text
//! Relay handler:
//!     → openai.rs (credential injection, outbound POST)
//!     → shared reqwest client (built once at startup)
//!     → upstream status/body relayed to the caller
//! ```
//!
//! # Design Decisions
//! - The upstream is an opaque collaborator; its schema is never modeled
//! - One client instance is shared across all requests

pub mod openai;
