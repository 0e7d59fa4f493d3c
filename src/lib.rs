//! Client address resolution for requests behind reverse proxies and CDNs.
//!
//! Resolves the originating client address from proxy headers and the
//! transport peer address, canonicalizes it (IPv6 collapsed to its /64
//! prefix), and propagates it to handlers through tower middleware.

pub mod address;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod lookup;
pub mod middleware;
pub mod observability;

pub use address::canonicalize;
pub use config::AppConfig;
pub use http::{HttpServer, PeerAddr};
pub use lifecycle::Shutdown;
pub use lookup::lookup_from_request;
pub use middleware::{ClientIp, ClientIpLayer, ContextPropagationLayer, RequestContext};
