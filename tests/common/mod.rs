//! Shared utilities for integration tests.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::body::Body;
use axum::http::Request;
use client_ip::config::AppConfig;
use client_ip::{HttpServer, Shutdown};
use tokio::net::TcpListener;
use tower::{service_fn, Service};

/// Start the echo server on an ephemeral local port.
///
/// Returns the bound address and the handle that stops the server.
#[allow(dead_code)]
pub async fn start_server(mut config: AppConfig) -> (SocketAddr, Shutdown) {
    config.listener.bind_address = "127.0.0.1:0".into();
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Build a GET request with the given headers.
#[allow(dead_code)]
pub fn request(headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri("http://example.com");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Terminal service that returns whatever `f` reads off the request.
#[allow(dead_code)]
pub fn echo_service<F, T>(f: F) -> impl Service<Request<Body>, Response = T, Error = Infallible> + Clone
where
    F: Fn(&Request<Body>) -> T + Clone,
{
    service_fn(move |req: Request<Body>| std::future::ready(Ok::<_, Infallible>(f(&req))))
}
