//! Mailer port

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod envelope;
mod errors;

pub use envelope::Envelope;
pub use errors::MailerError;

/// A mail transport capable of dispatching a composed [`Envelope`]
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `envelope` - The [`Envelope`] holding sender, recipient, subject and body.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send(&self, envelope: &Envelope) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, envelope: &Envelope) -> Result<(), MailerError>;
    }
}
