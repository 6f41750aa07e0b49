//! printq API
//!
//! HTTP surface over the order store and credential service: axum handlers,
//! JWT auth, error mapping, and application startup.

pub mod api_doc;
pub mod auth;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
