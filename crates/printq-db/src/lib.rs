//! printq database layer
//!
//! Repositories over an injected `sqlx::PgPool`. All SQL for the order and
//! admin-user tables lives here; no other crate touches those rows directly.

pub mod db;

pub use db::{AdminUserRepository, OrderRepository};
