//! Contact submission errors

use thiserror::Error;
use tracing::debug;

use crate::domain::communication::mailer::MailerError;

/// Errors raised while accepting or dispatching a contact submission
#[derive(Debug, Error)]
pub enum ContactError {
    /// A required field (name, email or message) is missing or empty
    #[error("Name, email and message are required")]
    Validation,

    /// Anything else: malformed payloads, transport failures
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<MailerError> for ContactError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> ContactError");

        match err {
            MailerError::UnknownError(e) => ContactError::Internal(e),
            err => ContactError::Internal(err.into()),
        }
    }
}
