//! Console mailer: simulated dispatch for development and demo builds

use async_trait::async_trait;
use tracing::info;

use crate::domain::communication::mailer::{Envelope, Mailer, MailerError};

/// Logs each envelope instead of sending it. No network connection is opened.
#[derive(Debug, Default, Clone)]
pub struct ConsoleMailer;

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, envelope: &Envelope) -> Result<(), MailerError> {
        info!(
            to = %envelope.to,
            from = %envelope.from,
            sender_name = %envelope.sender_name,
            reply_to = ?envelope.reply_to.as_ref().map(|address| address.as_str()),
            subject = %envelope.subject,
            body = %envelope.body,
            "Email sent (console)"
        );

        Ok(())
    }
}
