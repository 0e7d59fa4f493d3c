//! Middleware that copies the peer address into the request context.

use std::task::{Context, Poll};

use axum::http::Request;
use tower::{Layer, Service};

use crate::http::request::PeerAddr;
use crate::middleware::context::RequestContext;

/// Layer that stores the request's current [`PeerAddr`] in its
/// [`RequestContext`], so handlers can read it back with
/// [`ClientIp`](super::ClientIp).
///
/// Place it inside [`ClientIpLayer`](super::ClientIpLayer) to propagate the
/// resolved address rather than the raw transport one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextPropagationLayer;

impl<S> Layer<S> for ContextPropagationLayer {
    type Service = ContextPropagation<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ContextPropagation { inner }
    }
}

/// Service produced by [`ContextPropagationLayer`].
#[derive(Debug, Clone)]
pub struct ContextPropagation<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for ContextPropagation<S>
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
        let PeerAddr(peer) = PeerAddr::of(&req);
        let ctx = RequestContext::of(&req).with_client_ip(peer);
        req.extensions_mut().insert(ctx);
        self.inner.call(req)
    }
}
