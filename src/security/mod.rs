//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (echo allow-list headers, terminate OPTIONS preflight)
//!     → basic_auth.rs (optional credential gate)
//!     → Pass to logging and handlers
//! ```
//!
//! # Design Decisions
//! - Guards either forward the request or answer it themselves; nothing
//!   propagates past the request boundary
//! - A disallowed origin is not an error; its response simply carries no
//!   CORS headers
//! - The Basic-Auth gate only exists when both credentials are configured

pub mod basic_auth;
pub mod cors;
