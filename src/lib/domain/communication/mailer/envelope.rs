//! Email envelope

use crate::domain::communication::email_addresses::EmailAddress;

/// A composed message, ready to be handed to a [`Mailer`](super::Mailer)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// The sender of the email
    pub from: EmailAddress,

    /// The recipient of the email
    pub to: EmailAddress,

    /// The name the submitter gave
    pub sender_name: String,

    /// Where replies should go, when the submitter left a usable address
    pub reply_to: Option<EmailAddress>,

    /// The subject of the email
    pub subject: String,

    /// The plain text body of the email
    pub body: String,
}
