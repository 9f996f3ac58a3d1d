//! HTTP boundary for Edubot
//!
//! Thin axum layer over the RAG chain: a chat page at `/` and a query
//! endpoint at `/get`. Pipeline errors are logged here and mapped to a
//! generic 500 body; internal detail never reaches the client.

mod routes;
mod service;

pub use routes::{router, serve};
pub use service::QueryService;
