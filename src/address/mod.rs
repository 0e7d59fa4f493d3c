//! Address classification and normalization.
//!
//! # Data Flow
//! ```text
//! raw header value / peer host
//!     → canonical.rs (IPv4 verbatim, IPv6 masked to /64, else "")
//!
//! transport peer address ("host:port")
//!     → host_port.rs (split off the port)
//! ```
//!
//! # Design Decisions
//! - Best effort: nothing here returns an error, failures collapse to ""
//! - IPv6 clients are grouped by their /64 network prefix
//! - Only as much parsing as classification needs

pub mod canonical;
pub mod host_port;

pub use canonical::{canonicalize, IPV6_PREFIX_LEN};
pub use host_port::split_host_port;
