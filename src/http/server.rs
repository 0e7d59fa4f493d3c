//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the echo handler
//! - Wire up middleware (tracing, client address lookup, context propagation)
//! - Serve with peer addresses attached as `ConnectInfo`
//! - Stop on the shutdown signal

use std::net::SocketAddr;

use axum::{routing::any, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::request::PeerAddr;
use crate::middleware::{ClientIp, ClientIpLayer, ContextPropagationLayer};

/// Body returned by the echo handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoResponse {
    /// Address propagated through the request context.
    pub client_ip: String,
    /// Peer address as seen by the handler.
    pub peer_addr: String,
}

/// HTTP server that reports the resolved client address of each request.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outermost first: trace, client address lookup, context
    /// propagation.
    fn build_router(config: &AppConfig) -> Router {
        Router::new()
            .route("/", any(echo_handler))
            .route("/{*path}", any(echo_handler))
            .layer(ContextPropagationLayer)
            .layer(ClientIpLayer::new(config.client_ip.headers.iter().cloned()))
            .layer(TraceLayer::new_for_http())
    }

    /// Router with all layers applied, for serving or driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            override_headers = ?self.config.client_ip.headers,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Echo the client address and peer address seen after the middleware ran.
async fn echo_handler(ClientIp(client_ip): ClientIp, peer: PeerAddr) -> Json<EchoResponse> {
    tracing::debug!(client_ip = %client_ip, peer_addr = %peer, "Echoing client address");
    Json(EchoResponse {
        client_ip,
        peer_addr: peer.0,
    })
}
