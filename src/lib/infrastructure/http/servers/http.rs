//! The application's HTTP server.

use std::net::{Ipv4Addr, SocketAddr, TcpListener};

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::{extract::Request, Router};
use axum_server::Handle;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, info_span};

use crate::{
    domain::contact::ContactService,
    infrastructure::http::{
        handlers::api, shutdown_signal, state::AppState, HttpServerConfig, Server,
    },
};

/// The application's HTTP server
#[derive(Debug)]
pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the port specified in `config`.
    pub async fn new(
        config: HttpServerConfig,
        state: AppState<impl ContactService>,
    ) -> Result<Self> {
        let router = router(state);

        let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
        let listener = TcpListener::bind(address)
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }
}

#[async_trait]
impl Server for HttpServer {
    #[mutants::skip]
    async fn run(self) -> Result<()> {
        debug!(
            "HTTP Server listening on {}",
            self.listener
                .local_addr()
                .context("failed to get local address")?
        );

        let handle = Handle::new();

        let server = axum_server::from_tcp(self.listener)
            .handle(handle.clone())
            .serve(self.router.into_make_service());

        tokio::select! {
            result = server => result.context("server error")?,
            _ = shutdown_signal(Some(handle)) => {
                info!("Shutting down HTTP server");
            }
        }

        Ok(())
    }
}

/// Create the router for the HTTP server
pub fn router<C: ContactService>(state: AppState<C>) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        let uri = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    Router::new()
        .nest("/api", api::router(state.config.contact_email.clone()))
        .layer(trace_layer)
        .with_state(state)
}
