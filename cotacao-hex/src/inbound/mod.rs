//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod deadline;
mod handlers;
mod server;

pub use deadline::{InboundDeadline, REQUEST_TIMEOUT_HEADER};
pub use server::HttpServer;
