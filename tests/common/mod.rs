//! Shared helpers for lifecycle integration tests.

use std::time::Duration;

use axum::{routing::get, Router};
use steward::config::ServerConfig;

/// Router whose root handler responds after `delay`.
pub fn slow_router(delay: Duration) -> Router {
    Router::new().route(
        "/",
        get(move || async move {
            tokio::time::sleep(delay).await;
            "done"
        }),
    )
}

/// Default config with the given drain bound.
pub fn test_config(drain_timeout_secs: u64) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.shutdown.drain_timeout_secs = drain_timeout_secs;
    config
}

/// Whether a TCP connection to the local `port` succeeds.
#[allow(dead_code)]
pub async fn can_connect(port: u16) -> bool {
    tokio::net::TcpStream::connect(("127.0.0.1", port))
        .await
        .is_ok()
}
