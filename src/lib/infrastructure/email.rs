//! Mail transports and their configuration

use anyhow::Result;
use async_trait::async_trait;
use clap::{Parser, ValueEnum};
use tracing::warn;

use crate::domain::communication::{
    email_addresses::EmailAddress,
    mailer::{Envelope, Mailer, MailerError},
};

pub mod console;
pub mod smtp;

use console::ConsoleMailer;
use smtp::{SMTPConfig, SMTPMailer};

/// Which transport dispatches contact messages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MailTransport {
    /// Log messages instead of sending them
    #[default]
    Console,

    /// Deliver messages through an SMTP relay
    Smtp,
}

/// Mail configuration
#[derive(Clone, Debug, Parser)]
pub struct MailConfig {
    /// The mail transport
    #[arg(long, env = "MAIL_TRANSPORT", value_enum, default_value_t = MailTransport::Console)]
    pub mail_transport: MailTransport,

    /// The address contact messages are sent from
    #[arg(long, env = "MAIL_SENDER", default_value = "noreply@portfolio.com")]
    pub mail_sender: EmailAddress,

    /// The address contact messages are delivered to
    #[arg(long, env = "MAIL_RECIPIENT", default_value = "contact@portfolio.com")]
    pub mail_recipient: EmailAddress,

    /// SMTP settings, used by the smtp transport
    #[clap(flatten)]
    pub smtp: SMTPConfig,
}

/// The mailer selected at startup
#[derive(Debug, Clone)]
pub enum ConfiguredMailer {
    /// Simulated dispatch
    Console(ConsoleMailer),

    /// Real SMTP delivery
    Smtp(SMTPMailer),
}

impl ConfiguredMailer {
    /// Build the mailer named by `config.mail_transport`.
    pub fn from_config(config: &MailConfig) -> Result<Self> {
        match config.mail_transport {
            MailTransport::Console => {
                warn!("mail transport is `console`: contact messages are logged, not delivered");

                Ok(Self::Console(ConsoleMailer))
            }
            MailTransport::Smtp => Ok(Self::Smtp(SMTPMailer::new(&config.smtp)?)),
        }
    }
}

#[async_trait]
impl Mailer for ConfiguredMailer {
    async fn send(&self, envelope: &Envelope) -> Result<(), MailerError> {
        match self {
            Self::Console(mailer) => mailer.send(envelope).await,
            Self::Smtp(mailer) => mailer.send(envelope).await,
        }
    }
}
