//! Listener lifecycle.
//!
//! Binding and serving are separate steps so the daemon can fail fast on a
//! bind error before anything else starts, and so tests can learn the
//! ephemeral port before requests are made.

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::api::{self, AppState};
use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::tracing::prelude::*;

/// Bind the listening socket.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind(config.listen)
        .await
        .map_err(|source| Error::Bind {
            addr: config.listen,
            source,
        })
}

/// Serve the API on `listener` until `shutdown` is cancelled.
///
/// Each connection is handled on its own task by the underlying server.
/// After cancellation, in-flight requests are allowed to finish.
pub async fn run(listener: TcpListener, state: AppState, shutdown: CancellationToken) -> Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "sbom-scanner listening");

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    debug!(%addr, "Listener closed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral() {
        let listener = bind(&ServerConfig::loopback_ephemeral()).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_port_in_use() {
        let first = bind(&ServerConfig::loopback_ephemeral()).await.unwrap();
        let taken = ServerConfig {
            listen: first.local_addr().unwrap(),
        };

        match bind(&taken).await {
            Err(Error::Bind { addr, source }) => {
                assert_eq!(addr, taken.listen);
                assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
            }
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_stops_on_cancel() {
        let listener = bind(&ServerConfig::loopback_ephemeral()).await.unwrap();
        let shutdown = CancellationToken::new();
        let server = tokio::spawn(run(listener, AppState::default(), shutdown.clone()));

        shutdown.cancel();
        let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
            .await
            .expect("server did not stop")
            .unwrap();
        assert!(result.is_ok());
    }
}
