//! Request-side state shared by the lookup and middleware layers.
//!
//! # Responsibilities
//! - Model the request's transport peer-address field as text
//! - Seed it from axum's `ConnectInfo` when nothing has set it yet
//! - Expose it to handlers through an extractor

use std::convert::Infallible;
use std::fmt;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, Extensions, Request},
};

/// The request's transport peer address.
///
/// Holds whatever the transport reported (`host:port`) until
/// [`ClientIpLayer`](crate::middleware::ClientIpLayer) replaces it with a
/// resolved client address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerAddr(pub String);

impl PeerAddr {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read the peer address from request extensions.
    ///
    /// An explicit `PeerAddr` wins over `ConnectInfo<SocketAddr>`. Returns an
    /// empty value when neither is present.
    pub fn from_extensions(extensions: &Extensions) -> Self {
        if let Some(peer) = extensions.get::<PeerAddr>() {
            return peer.clone();
        }
        extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| PeerAddr(addr.to_string()))
            .unwrap_or_default()
    }

    /// Read the peer address of a request.
    pub fn of<B>(req: &Request<B>) -> Self {
        Self::from_extensions(req.extensions())
    }

    /// Overwrite the peer address of a request.
    pub fn set<B>(req: &mut Request<B>, addr: impl Into<String>) {
        req.extensions_mut().insert(PeerAddr(addr.into()));
    }
}

impl fmt::Display for PeerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for PeerAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(PeerAddr::from_extensions(&parts.extensions))
    }
}
