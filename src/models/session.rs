use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A bearer token issued at login.
#[derive(Debug, Clone, FromRow)]
pub struct AuthToken {
    pub token: String,
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
