//! SMTP email service implementation

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{ArgAction, Parser};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::domain::communication::mailer::{Envelope, Mailer, MailerError};

/// SMTP configuration
#[derive(Clone, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host, required when the smtp transport is selected
    #[arg(long = "smtp-host", env = "SMTP_HOST")]
    pub host: Option<String>,

    /// The SMTP port
    #[arg(long = "smtp-port", env = "SMTP_PORT", default_value_t = 587)]
    pub port: u16,

    /// The SMTP username
    #[arg(long = "smtp-username", env = "SMTP_USER")]
    pub username: Option<String>,

    /// The SMTP password
    #[arg(long = "smtp-password", env = "SMTP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Verify the TLS certificate
    #[arg(
        long = "smtp-verify-tls",
        env = "SMTP_VERIFY_TLS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[arg(
        long = "smtp-starttls",
        env = "SMTP_STARTTLS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub starttls: bool,
}

/// SMTP mailer
#[derive(Debug, Clone)]
pub struct SMTPMailer {
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SMTPMailer {
    /// Create a new SMTP mailer. Must be called from within a Tokio runtime.
    pub fn new(config: &SMTPConfig) -> Result<Self> {
        let host = config
            .host
            .as_deref()
            .context("SMTP_HOST is required for the smtp mail transport")?;

        let tls = TlsParameters::builder(host.to_string())
            .dangerous_accept_invalid_certs(!config.verify_tls)
            .build()
            .context("failed to build TLS parameters")?;

        let relay = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?.tls(Tls::Required(tls))
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)?.tls(Tls::Wrapper(tls))
        };

        let mut builder = relay.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: Arc::new(builder.build()),
        })
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send(&self, envelope: &Envelope) -> Result<(), MailerError> {
        let mut builder = Message::builder()
            .from(envelope.from.as_str().parse()?)
            .to(envelope.to.as_str().parse()?)
            .subject(envelope.subject.clone())
            .header(ContentType::TEXT_PLAIN);

        // The submitter's address is free text; skip Reply-To rather than fail.
        if let Some(reply_to) = envelope
            .reply_to
            .as_ref()
            .and_then(|address| address.as_str().parse::<Address>().ok())
        {
            let reply_to = Mailbox::new(Some(envelope.sender_name.clone()), reply_to);

            builder = builder.reply_to(reply_to);
        }

        let email = builder.body(envelope.body.clone())?;

        self.transport.send(email).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: Option<&str>) -> SMTPConfig {
        SMTPConfig {
            host: host.map(str::to_string),
            port: 587,
            username: Some("user".to_string()),
            password: Some("secret".to_string()),
            verify_tls: true,
            starttls: true,
        }
    }

    #[tokio::test]
    async fn test_smtp_mailer_requires_host() {
        let result = SMTPMailer::new(&config(None));

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_smtp_mailer_builds_without_connecting() {
        let result = SMTPMailer::new(&config(Some("smtp.example.com")));

        assert!(result.is_ok());
    }
}
