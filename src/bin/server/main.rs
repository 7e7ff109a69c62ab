#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact form relay server

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use contact_relay::{
    domain::contact::ContactServiceImpl,
    infrastructure::{
        config::OperatorConfig,
        email::brevo::{BrevoConfig, BrevoMailer},
        http::{
            servers::http::HttpServer,
            state::{AppConfig, AppState},
            HttpServerConfig, Server,
        },
    },
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The email provider configuration
    #[clap(flatten)]
    pub brevo: BrevoConfig,

    /// Sender and recipient of relayed submissions
    #[clap(flatten)]
    pub operator: OperatorConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    let env_file = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = env_file {
        warn!("no .env file loaded: {e}");
    }

    let args = Args::parse();

    let config = AppConfig {
        contact_email: args.operator.fallback_contact()?,
    };

    let contact = ContactServiceImpl::new(
        args.operator.contact_config()?,
        Arc::new(BrevoMailer::new(args.brevo)),
    );

    HttpServer::new(args.server, AppState::new(config, contact))
        .await?
        .run()
        .await
}
