//! Contact service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{
    email_addresses::EmailAddress,
    mailer::{Envelope, Mailer},
};

use super::{ContactError, Submission};

const TITLE: &str = "Contact from Portfolio";
const NOT_INFORMED: &str = "Not informed";

/// Contact service
#[async_trait]
pub trait ContactService: Clone + Send + Sync + 'static {
    /// Composes a message from the submission and dispatches it to the
    /// configured destination.
    ///
    /// # Arguments
    /// * `submission` - The validated [`Submission`].
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the mailer accepted the message.
    async fn submit(&self, submission: &Submission) -> Result<(), ContactError>;
}

#[cfg(test)]
mock! {
    pub ContactService {}

    impl Clone for ContactService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl ContactService for ContactService {
        async fn submit(&self, submission: &Submission) -> Result<(), ContactError>;
    }
}

/// Contact service implementation
#[derive(Debug, Clone)]
pub struct ContactServiceImpl<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    sender: EmailAddress,
    recipient: EmailAddress,
}

impl<M> ContactServiceImpl<M>
where
    M: Mailer,
{
    /// Creates a new contact service delivering to `recipient` on behalf of `sender`.
    pub fn new(mailer: Arc<M>, sender: EmailAddress, recipient: EmailAddress) -> Self {
        Self {
            mailer,
            sender,
            recipient,
        }
    }

    /// Builds the envelope for a submission.
    pub fn compose(&self, submission: &Submission) -> Envelope {
        Envelope {
            from: self.sender.clone(),
            to: self.recipient.clone(),
            sender_name: submission.name().to_string(),
            reply_to: EmailAddress::new(submission.email()).ok(),
            subject: title(submission.subject()),
            body: body(submission),
        }
    }
}

#[async_trait]
impl<M> ContactService for ContactServiceImpl<M>
where
    M: Mailer,
{
    #[tracing::instrument(
        name = "Dispatching a contact message",
        skip(self, submission),
        fields(
            sender_name = %submission.name(),
            sender_email = %submission.email()
        )
    )]
    async fn submit(&self, submission: &Submission) -> Result<(), ContactError> {
        let envelope = self.compose(submission);

        self.mailer.send(&envelope).await?;

        info!(to = %envelope.to, subject = %envelope.subject, "contact message sent");

        Ok(())
    }
}

fn title(subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("{TITLE}: {subject}"),
        None => TITLE.to_string(),
    }
}

fn body(submission: &Submission) -> String {
    format!(
        "New message received through the portfolio:\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Subject: {subject}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         ---\n\
         This message was sent through the portfolio contact form.\n",
        name = submission.name(),
        email = submission.email(),
        phone = submission.phone().unwrap_or(NOT_INFORMED),
        subject = submission.subject().unwrap_or(NOT_INFORMED),
        message = submission.message(),
    )
}
