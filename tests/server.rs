//! End-to-end tests against a running echo server.

use client_ip::config::AppConfig;
use client_ip::http::EchoResponse;

mod common;

async fn get(addr: std::net::SocketAddr, headers: &[(&str, &str)]) -> EchoResponse {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let mut req = client.get(format!("http://{}/whoami", addr));
    for (name, value) in headers {
        req = req.header(*name, *value);
    }
    let res = req.send().await.expect("server unreachable");
    assert_eq!(res.status(), 200);
    res.json().await.unwrap()
}

#[tokio::test]
async fn test_peer_address_fallback() {
    let (addr, shutdown) = common::start_server(AppConfig::default()).await;

    let res = get(addr, &[]).await;
    assert_eq!(res.client_ip, "127.0.0.1");
    assert_eq!(res.peer_addr, "127.0.0.1");

    shutdown.trigger();
}

#[tokio::test]
async fn test_forwarded_headers() {
    let mut config = AppConfig::default();
    config.client_ip.headers = vec!["Custom-IP".into()];
    let (addr, shutdown) = common::start_server(config).await;

    let res = get(addr, &[("X-Forwarded-For", "48.135.12.111, 181.95.251.176")]).await;
    assert_eq!(res.client_ip, "48.135.12.111");

    let res = get(
        addr,
        &[("X-Real-IP", "48.135.12.111"), ("Custom-IP", "212.207.103.215")],
    )
    .await;
    assert_eq!(res.client_ip, "212.207.103.215");

    let res = get(addr, &[("CF-Connecting-IP", "2606:4700:10:1:2:3:4:5")]).await;
    assert_eq!(res.client_ip, "2606:4700:10:1::");

    shutdown.trigger();
}

#[tokio::test]
async fn test_unparsable_header_keeps_transport_peer() {
    let (addr, shutdown) = common::start_server(AppConfig::default()).await;

    let res = get(addr, &[("X-Forwarded-For", "123:456789")]).await;
    // Peer address was never rewritten, so the raw host:port is propagated.
    assert!(res.peer_addr.starts_with("127.0.0.1:"), "{}", res.peer_addr);
    assert_eq!(res.client_ip, res.peer_addr);

    shutdown.trigger();
}
