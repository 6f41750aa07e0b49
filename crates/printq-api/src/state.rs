//! Application state shared across handlers.

use printq_core::Config;
use printq_db::{AdminUserRepository, OrderRepository};
use sqlx::PgPool;

use crate::auth::jwt::JwtService;

/// Repositories, token service, and configuration behind one `Arc`.
/// The pool is constructed at startup and injected here; repositories clone
/// the handle, never reach for a global.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub orders: OrderRepository,
    pub admin_users: AdminUserRepository,
    pub jwt: JwtService,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        let jwt = JwtService::new(config.jwt_secret(), config.jwt_expiry_hours());
        Self {
            orders: OrderRepository::new(pool.clone()),
            admin_users: AdminUserRepository::new(pool.clone()),
            jwt,
            pool,
            config,
        }
    }
}
