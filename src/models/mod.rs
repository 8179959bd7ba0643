//! Runtime models that only exist for the HTTP server.

pub mod config;
