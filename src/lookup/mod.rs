//! Client address lookup.
//!
//! # Data Flow
//! ```text
//! Request headers + peer address
//!     → resolver.rs (override headers → default headers
//!                    → X-Forwarded-For → peer host)
//!     → address::canonicalize
//!     → canonical client address, or ""
//! ```
//!
//! # Design Decisions
//! - First non-empty source wins; later sources are never consulted
//! - Header values are not trusted or verified, callers pick which headers
//!   to honor through the override list
//! - No errors: an undeterminable address is ""

pub mod headers;
pub mod resolver;

pub use headers::{DEFAULT_HEADERS, X_FORWARDED_FOR};
pub use resolver::{lookup_from_request, resolve};
