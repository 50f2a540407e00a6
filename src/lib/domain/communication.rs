//! Outgoing communication: addresses, envelopes and the mailer port

pub mod email_addresses;
pub mod mailer;
