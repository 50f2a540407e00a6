//! Domain logic: contact submissions and outgoing mail

pub mod communication;
pub mod contact;
