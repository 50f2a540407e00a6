//! Adapters for the domain ports: mail transports and the HTTP API

pub mod email;
pub mod http;
