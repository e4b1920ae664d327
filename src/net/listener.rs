//! TCP listener binding.
//!
//! # Responsibilities
//! - Bind to the configured port on all interfaces
//! - Report bind failures with the port and the underlying I/O error,
//!   so "port already in use" is diagnosable at a glance

use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;
use tokio::net::TcpListener;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to bind the requested port.
    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        source: std::io::Error,
    },
}

/// Bind the listener on all interfaces at `port`.
///
/// Port 0 asks the OS for an ephemeral port; the resolved address is
/// returned alongside the listener.
pub async fn bind(port: u16) -> Result<(TcpListener, SocketAddr), ListenerError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { port, source })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ListenerError::Bind { port, source })?;

    tracing::info!(address = %local_addr, "listener bound");

    Ok((listener, local_addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_ephemeral_port_resolves_address() {
        let (_listener, addr) = bind(0).await.unwrap();
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn bind_occupied_port_reports_the_port() {
        let (_listener, addr) = bind(0).await.unwrap();

        let err = bind(addr.port()).await.unwrap_err();
        let ListenerError::Bind { port, source } = err;
        assert_eq!(port, addr.port());
        assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
    }
}
