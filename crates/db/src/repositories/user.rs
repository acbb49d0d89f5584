use crate::models::DbUser;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_user(
    pool: &Pool<Postgres>,
    external_id: &str,
    role: &str,
    token_hash: Option<&str>,
) -> Result<DbUser> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating user: id={}, external_id={}, role={}, has_token={}",
        id, external_id, role, token_hash.is_some()
    );

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, external_id, role, token_hash, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (external_id)
        DO UPDATE SET role = EXCLUDED.role, token_hash = EXCLUDED.token_hash
        RETURNING id, external_id, role, token_hash, created_at
        "#,
    )
    .bind(id)
    .bind(external_id)
    .bind(role)
    .bind(token_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_external_id(
    pool: &Pool<Postgres>,
    external_id: &str,
) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, external_id, role, token_hash, created_at
        FROM users
        WHERE external_id = $1
        "#,
    )
    .bind(external_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
