//! Application setup and initialization
//!
//! Startup logic extracted from main.rs: config validation, database pool +
//! schema, admin seeding, state, and routes.

pub mod database;
pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use printq_core::Config;

use crate::state::AppState;

/// Initialize the entire application. Any failure here is fatal to startup.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config
        .validate()
        .context("Configuration validation failed")?;

    let pool = database::setup_database(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), pool));

    database::ensure_admin_user(&config, &state.admin_users).await?;

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
