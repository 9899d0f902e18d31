//! HTTP server initialization and runtime setup.
//!
//! Builds the registry and resolver, wires the application state, and runs
//! the Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::InMemoryUrlRepository;
use crate::infrastructure::resolver::{DnsResolver, HostResolver, NullResolver};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Hostname resolver (DNS or NullResolver when checks are disabled)
/// - In-memory registry
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let resolver: Arc<dyn HostResolver> = if config.dns_check {
        tracing::info!("Hostname check enabled (timeout {:?})", config.dns_timeout());
        Arc::new(DnsResolver::new(config.dns_timeout()))
    } else {
        tracing::info!("Hostname check disabled (NullResolver)");
        Arc::new(NullResolver::new())
    };

    let repository: Arc<dyn UrlRepository> = Arc::new(InMemoryUrlRepository::new());

    let state = AppState::new(repository, resolver);

    let app = app_router(state);

    let listener = TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Completes on Ctrl-C, or SIGTERM on Unix.
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
