//! Client address propagation middleware.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → client_ip.rs (lookup, overwrite PeerAddr when resolved)
//!     → propagate.rs (copy PeerAddr into RequestContext)
//!     → handler (ClientIp / PeerAddr extractors)
//! ```
//!
//! # Design Decisions
//! - Tower layers: each wrapper owns the next service and is testable alone
//! - Never short-circuits: a request without an address still reaches the
//!   handler
//! - Context is typed and keyed privately; see context.rs

pub mod client_ip;
pub mod context;
pub mod propagate;

pub use client_ip::{ClientIpLayer, ClientIpService};
pub use context::{
    attach_client_ip, client_ip_from_context, client_ip_from_request, ClientIp, RequestContext,
};
pub use propagate::{ContextPropagation, ContextPropagationLayer};
