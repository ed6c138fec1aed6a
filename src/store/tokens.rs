use sqlx::{Executor, Sqlite};

use crate::models::session::AuthToken;

pub async fn insert<'e, E>(executor: E, token: &AuthToken) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO auth_tokens (token, user_id, expires_at) VALUES (?, ?, ?)")
        .bind(&token.token)
        .bind(token.user_id)
        .bind(token.expires_at)
        .execute(executor)
        .await?;

    Ok(())
}

pub async fn find<'e, E>(executor: E, token: &str) -> Result<Option<AuthToken>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, AuthToken>(
        "SELECT token, user_id, expires_at FROM auth_tokens WHERE token = ?",
    )
    .bind(token)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e, E>(executor: E, token: &str) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM auth_tokens WHERE token = ?")
        .bind(token)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
