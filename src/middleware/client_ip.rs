//! Middleware that rewrites the peer address to the resolved client address.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::Request;
use tower::{Layer, Service};

use crate::http::request::PeerAddr;
use crate::lookup::lookup_from_request;

/// Layer that resolves the client address of each request and, when one is
/// found, stores it as the request's [`PeerAddr`].
///
/// Requests are always passed on, whether or not an address was resolved.
#[derive(Debug, Clone)]
pub struct ClientIpLayer {
    headers: Arc<[String]>,
}

impl ClientIpLayer {
    /// Create a layer that consults `headers` before the default list.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for ClientIpLayer {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl<S> Layer<S> for ClientIpLayer {
    type Service = ClientIpService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ClientIpService {
            inner,
            headers: Arc::clone(&self.headers),
        }
    }
}

/// Service produced by [`ClientIpLayer`].
#[derive(Debug, Clone)]
pub struct ClientIpService<S> {
    inner: S,
    headers: Arc<[String]>,
}

impl<S, B> Service<Request<B>> for ClientIpService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let ip = lookup_from_request(&req, &self.headers[..]);
        if !ip.is_empty() {
            tracing::debug!(client_ip = %ip, "Resolved client address");
            PeerAddr::set(&mut req, ip);
        }
        self.inner.call(req)
    }
}
