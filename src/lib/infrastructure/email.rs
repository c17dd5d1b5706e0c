//! Email transports

pub mod api;
