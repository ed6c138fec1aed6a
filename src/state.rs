use chrono::Duration;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::credentials::PasswordHasher;

/// Everything a request handler needs, registered once as `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub hasher: PasswordHasher,
    pub token_ttl: Duration,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            hasher: PasswordHasher::new(config.bcrypt_cost),
            token_ttl: Duration::minutes(config.token_ttl_minutes),
        }
    }
}
