//! The sbom-scanner daemon.
//!
//! Serves the component inventory on port 8080 until SIGINT or SIGTERM.
//! Exits non-zero if the port cannot be bound.

use std::process::ExitCode;

use tokio::signal::unix::{self, SignalKind};
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;

use sbom_scanner::api::AppState;
use sbom_scanner::config::ServerConfig;
use sbom_scanner::server;
use sbom_scanner::tracing::{self, prelude::*};

#[tokio::main]
async fn main() -> ExitCode {
    tracing::init_journald_or_stdout();

    let config = ServerConfig::default();
    let listener = match server::bind(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let (mut sigint, mut sigterm) = match (
        unix::signal(SignalKind::interrupt()),
        unix::signal(SignalKind::terminate()),
    ) {
        (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
        (Err(e), _) | (_, Err(e)) => {
            error!("Failed to install signal handlers: {e}");
            return ExitCode::FAILURE;
        }
    };

    let running = CancellationToken::new();
    let mut serving = tokio::spawn(server::run(listener, AppState::default(), running.clone()));

    tokio::select! {
        _ = sigint.recv() => {},
        _ = sigterm.recv() => {},
        result = &mut serving => return exit_status(result),
    }

    trace!("Shutting down.");
    running.cancel();
    exit_status(serving.await)
}

fn exit_status(result: Result<sbom_scanner::error::Result<()>, JoinError>) -> ExitCode {
    match result {
        Ok(Ok(())) => {
            info!("Exiting.");
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            error!("Server error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Server task failed: {e}");
            ExitCode::FAILURE
        }
    }
}
