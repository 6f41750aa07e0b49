//! Configuration module
//!
//! Environment-driven configuration for the API: server, database pool,
//! auth, and admin seeding settings.

use std::env;

use anyhow::{bail, Result};

const DEFAULT_SERVER_PORT: u16 = 3001;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
const MIN_PRODUCTION_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    database_url: String,
    db_max_connections: u32,
    db_acquire_timeout_seconds: u64,
    jwt_secret: String,
    jwt_expiry_hours: i64,
    admin_username: String,
    admin_initial_password: String,
    cors_origins: Vec<String>,
    environment: String,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let config = Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            database_url,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            db_acquire_timeout_seconds: env::var("DB_ACQUIRE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-in-production".to_string()),
            jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_JWT_EXPIRY_HOURS),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_initial_password: env::var("ADMIN_INITIAL_PASSWORD")
                .unwrap_or_else(|_| "xerox123".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        };

        Ok(config)
    }

    /// Fail fast on misconfiguration. Called once at startup.
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.is_empty() {
            bail!("JWT_SECRET must not be empty");
        }
        if self.is_production() && self.jwt_secret.len() < MIN_PRODUCTION_SECRET_LEN {
            bail!(
                "JWT_SECRET must be at least {} characters in production",
                MIN_PRODUCTION_SECRET_LEN
            );
        }
        if self.db_max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be greater than zero");
        }
        if self.jwt_expiry_hours <= 0 {
            bail!("JWT_EXPIRY_HOURS must be greater than zero");
        }
        Ok(())
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn db_acquire_timeout_seconds(&self) -> u64 {
        self.db_acquire_timeout_seconds
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn jwt_expiry_hours(&self) -> i64 {
        self.jwt_expiry_hours
    }

    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    pub fn admin_initial_password(&self) -> &str {
        &self.admin_initial_password
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production" || self.environment == "prod"
    }

    /// Construct a config directly, bypassing the environment. Intended for tests.
    pub fn for_tests(database_url: String, jwt_secret: String) -> Self {
        Self {
            server_port: 0,
            database_url,
            db_max_connections: 5,
            db_acquire_timeout_seconds: DEFAULT_ACQUIRE_TIMEOUT_SECS,
            jwt_secret,
            jwt_expiry_hours: DEFAULT_JWT_EXPIRY_HOURS,
            admin_username: "admin".to_string(),
            admin_initial_password: "xerox123".to_string(),
            cors_origins: Vec::new(),
            environment: "test".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::for_tests(
            "postgresql://localhost/printq".to_string(),
            "test-secret-key-min-32-characters-long!".to_string(),
        )
    }

    #[test]
    fn test_validate_accepts_sane_config() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let mut config = test_config();
        config.jwt_secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_short_secret_in_production() {
        let mut config = test_config();
        config.environment = "production".to_string();
        config.jwt_secret = "short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_short_secret_allowed_outside_production() {
        let mut config = test_config();
        config.jwt_secret = "short".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = test_config();
        assert_eq!(config.admin_username(), "admin");
        assert_eq!(config.jwt_expiry_hours(), 24);
        assert!(!config.is_production());
    }
}
