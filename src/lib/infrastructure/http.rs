//! HTTP Server

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use axum_server::Handle;
use clap::Parser;
use tokio::signal;
use tracing::debug;

mod errors;
pub mod handlers;
mod open_api;
pub mod servers;
pub mod state;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct HttpServerConfig {
    /// The port to listen on
    #[clap(long = "http-port", env = "HTTP_PORT", default_value = "3000")]
    pub port: u16,
}

/// A server that can be run
#[async_trait]
pub trait Server {
    /// Runs the server until it is shut down
    async fn run(self) -> Result<()>;
}

#[mutants::skip]
async fn shutdown_signal(handle: Option<Handle>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    if let Some(handle) = handle {
        debug!("shutting down gracefully");
        handle.graceful_shutdown(Some(Duration::from_secs(10)));
    }
}
