//! Webhook shim exposing the hearsay pipeline over HTTP.

pub mod config;
pub mod server;

pub use {config::Config, server::router};
