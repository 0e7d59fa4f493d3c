//! Request-scoped context carrying the client address.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, Extensions, Request},
};

/// Private key under which the client address is stored.
///
/// Not exported, so no code outside this module can read or replace the
/// value except through [`RequestContext`].
#[derive(Debug, Clone)]
struct RequestIpKey(String);

/// Immutable request-scoped key/value carrier.
///
/// Writes never mutate a context in place; they return a derived copy.
/// Stored on the request as an extension by
/// [`ContextPropagationLayer`](super::ContextPropagationLayer).
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    values: Extensions,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a context that carries `ip` as the client address.
    pub fn with_client_ip(&self, ip: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.insert(RequestIpKey(ip.into()));
        Self { values }
    }

    /// Client address stored in this context, or `""` if never set.
    pub fn client_ip(&self) -> &str {
        self.values
            .get::<RequestIpKey>()
            .map(|key| key.0.as_str())
            .unwrap_or_default()
    }

    /// Context attached to `extensions`, or an empty one.
    pub fn from_extensions(extensions: &Extensions) -> Self {
        extensions.get::<RequestContext>().cloned().unwrap_or_default()
    }

    /// Context attached to a request, or an empty one.
    pub fn of<B>(req: &Request<B>) -> Self {
        Self::from_extensions(req.extensions())
    }
}

/// Return a new context carrying `ip` as the client address.
pub fn attach_client_ip(ctx: &RequestContext, ip: impl Into<String>) -> RequestContext {
    ctx.with_client_ip(ip)
}

/// Client address stored in `ctx`, or `""` if never set.
pub fn client_ip_from_context(ctx: &RequestContext) -> String {
    ctx.client_ip().to_string()
}

/// Client address stored in the context attached to `req`, or `""`.
pub fn client_ip_from_request<B>(req: &Request<B>) -> String {
    req.extensions()
        .get::<RequestContext>()
        .map(client_ip_from_context)
        .unwrap_or_default()
}

/// Extractor for the client address stored in the request context.
///
/// Never rejects; yields `""` when no context value was propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = RequestContext::from_extensions(&parts.extensions);
        Ok(ClientIp(client_ip_from_context(&ctx)))
    }
}
