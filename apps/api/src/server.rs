use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;

/// Resolves the wildcard address the service listens on.
/// Port 0 is rejected.
pub fn listen_addr(port: u16) -> Result<SocketAddr, StartupError> {
    if port == 0 {
        return Err(StartupError::InvalidPort(port));
    }
    Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
}

pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, StartupError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!("Listening on {addr}");
    Ok(listener)
}

/// Resolves once Ctrl+C or SIGTERM is received.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_zero_is_rejected() {
        assert!(matches!(
            listen_addr(0),
            Err(StartupError::InvalidPort(0))
        ));
    }

    #[test]
    fn test_listen_addr_is_wildcard() {
        let addr = listen_addr(8080).unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 8080);
    }

    #[tokio::test]
    async fn test_bind_fails_when_port_taken() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let err = bind_listener(addr).await.unwrap_err();
        match err {
            StartupError::Bind { addr: failed, .. } => assert_eq!(failed, addr),
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bind_free_port() {
        let probe = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = probe.local_addr().unwrap();
        drop(probe);

        let listener = bind_listener(addr).await.unwrap();
        assert_eq!(listener.local_addr().unwrap(), addr);
    }
}
