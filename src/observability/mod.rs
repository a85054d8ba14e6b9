//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Relay requests produce:
//!     → access_log.rs (one diagnostic line per /api/ request)
//!     → tower-http TraceLayer spans (every request)
//!
//! Consumers:
//!     → tracing subscriber initialized in main (stdout, EnvFilter)
//! ```
//!
//! # Design Decisions
//! - Structured events via tracing; the subscriber picks the format
//! - Logging is purely diagnostic and has no behavioral effect

pub mod access_log;
