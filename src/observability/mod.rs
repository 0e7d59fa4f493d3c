//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! middleware, server, main
//!     → tracing events (structured fields, e.g. client_ip)
//!     → logging.rs (EnvFilter + fmt subscriber)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Lookup itself only logs at trace level
//! - HTTP request spans come from tower-http's TraceLayer

pub mod logging;
