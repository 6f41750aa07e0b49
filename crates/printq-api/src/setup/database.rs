//! Database setup and initialization

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use printq_core::Config;
use printq_db::AdminUserRepository;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::auth::password::hash_password;

/// Set up the connection pool and run migrations.
///
/// The pool is bounded and acquisition is subject to a timeout, so requests
/// waiting for a connection cannot queue indefinitely. Migrations use
/// `IF NOT EXISTS` DDL and are safe to run on every startup.
pub async fn setup_database(config: &Config) -> Result<PgPool> {
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections())
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_seconds()))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(config.database_url())
        .await?;

    tracing::info!(
        max_connections = config.db_max_connections(),
        "Database connected successfully"
    );

    // Workspace migrations/ from the crate root.
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
    let migrator = sqlx::migrate::Migrator::new(migrations_dir)
        .await
        .context("Failed to load migrations")?;
    migrator
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}

/// Seed the initial admin identity if it does not exist yet.
///
/// Never overwrites an existing admin's credentials: the insert is
/// `ON CONFLICT DO NOTHING` under the hood.
pub async fn ensure_admin_user(
    config: &Config,
    admin_users: &AdminUserRepository,
) -> Result<()> {
    if admin_users
        .get_by_username(config.admin_username())
        .await?
        .is_some()
    {
        return Ok(());
    }

    let hash = hash_password(config.admin_initial_password())
        .context("Failed to hash initial admin password")?;

    let created = admin_users
        .create_if_absent(config.admin_username(), &hash)
        .await?;

    if created {
        tracing::info!(username = %config.admin_username(), "Seeded initial admin user");
    }

    Ok(())
}
