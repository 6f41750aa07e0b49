//! Admin user repository
//!
//! Owns the `admin_users` table. Rows are created once at startup and read
//! on every login; nothing here ever overwrites an existing hash.

use printq_core::models::AdminUser;
use printq_core::AppError;
use sqlx::{PgPool, Postgres};

#[derive(Clone)]
pub struct AdminUserRepository {
    pool: PgPool,
}

impl AdminUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up an admin by exact username.
    #[tracing::instrument(skip(self), fields(db.table = "admin_users", db.operation = "select"))]
    pub async fn get_by_username(&self, username: &str) -> Result<Option<AdminUser>, AppError> {
        let user =
            sqlx::query_as::<Postgres, AdminUser>("SELECT * FROM admin_users WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Failed to fetch admin user");
                    AppError::Database(e)
                })?;

        Ok(user)
    }

    /// Insert an admin unless one with that username already exists.
    ///
    /// Idempotent seed: returns true when a row was inserted, false when the
    /// username was already present (the stored hash is left as-is).
    #[tracing::instrument(skip(self, password_hash), fields(db.table = "admin_users", db.operation = "insert"))]
    pub async fn create_if_absent(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO admin_users (username, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, username = %username, "Failed to seed admin user");
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
