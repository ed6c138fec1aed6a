use sqlx::{Executor, Sqlite};

use crate::models::user::User;

pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, User>("SELECT id, email, password_hash FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(executor)
        .await
}

pub async fn insert<'e, E>(executor: E, email: &str, password_hash: &str) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("INSERT INTO users (email, password_hash) VALUES (?, ?)")
        .bind(email)
        .bind(password_hash)
        .execute(executor)
        .await?;

    Ok(result.last_insert_rowid())
}
