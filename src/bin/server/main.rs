#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact form API for the portfolio site

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use portfolio_contact::{
    domain::contact::ContactServiceImpl,
    infrastructure::{
        email::{ConfiguredMailer, MailConfig},
        http::{state::AppState, HttpServer, HttpServerConfig},
    },
};
use tracing_subscriber::EnvFilter;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The mail configuration
    #[clap(flatten)]
    pub mail: MailConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine: every setting has a default or an env var.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mailer = ConfiguredMailer::from_config(&args.mail)?;

    let contact = ContactServiceImpl::new(
        Arc::new(mailer),
        args.mail.mail_sender,
        args.mail.mail_recipient,
    );

    HttpServer::new(AppState::new(contact), args.server)
        .await?
        .run()
        .await
}
