//! Contact form submissions

mod errors;
mod service;
mod submission;

pub use errors::ContactError;
pub use service::{ContactService, ContactServiceImpl};
pub use submission::Submission;

#[cfg(test)]
pub use service::MockContactService;
