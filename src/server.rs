//! HTTP server initialization and runtime setup.
//!
//! Builds the store, wires the router, and runs Axum until a shutdown signal
//! arrives.

use crate::config::Config;
use crate::infrastructure::persistence::InMemoryUrlStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory URL store
/// - Axum HTTP server
///
/// On Ctrl-C or SIGTERM the listener stops accepting connections and
/// in-flight requests get `SHUTDOWN_TIMEOUT_SECS` to finish.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
/// - In-flight requests do not drain before the shutdown timeout
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(InMemoryUrlStore::new(config.store_config()));
    tracing::info!(
        code_length = config.short_code_length,
        "In-memory store initialized"
    );

    let state = AppState::new(store);
    let app = app_router(state, config.http_limits());

    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    let (signal_tx, mut signal_rx) = watch::channel(false);
    let mut drain_rx = signal_rx.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = signal_tx.send(true);
    });

    let server = axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(async move {
        let _ = signal_rx.changed().await;
        tracing::info!("Shutting down");
    });

    let server = tokio::spawn(async move { server.await });

    tokio::select! {
        result = server => {
            result.context("Server task panicked")??;
        }
        _ = drain_deadline(&mut drain_rx, config.shutdown_timeout()) => {
            anyhow::bail!(
                "In-flight requests did not finish within {}s",
                config.shutdown_timeout_secs
            );
        }
    }

    tracing::info!("Shut down complete");

    Ok(())
}

/// Completes `timeout` after shutdown has been requested.
async fn drain_deadline(signal_rx: &mut watch::Receiver<bool>, timeout: Duration) {
    if signal_rx.changed().await.is_err() {
        std::future::pending::<()>().await;
    }
    tokio::time::sleep(timeout).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
