use crate::models::Like;
use sqlx::{PgPool, Row};

// ============================================
// Like queries
// ============================================

/// Plain insert. A second like by the same user on the same target trips
/// the unique constraint and surfaces as a conflict, never as an upsert.
pub async fn create_like(
    pool: &PgPool,
    user_id: &str,
    target_kind: &str,
    target_id: i64,
) -> Result<Like, sqlx::Error> {
    let like = sqlx::query_as::<_, Like>(
        r#"
        INSERT INTO likes (user_id, target_kind, target_id)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, target_kind, target_id, liked_at
        "#,
    )
    .bind(user_id)
    .bind(target_kind)
    .bind(target_id)
    .fetch_one(pool)
    .await?;

    Ok(like)
}

pub async fn find_like_by_id(pool: &PgPool, id: i64) -> Result<Option<Like>, sqlx::Error> {
    let like = sqlx::query_as::<_, Like>(
        r#"
        SELECT id, user_id, target_kind, target_id, liked_at
        FROM likes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(like)
}

pub async fn list_likes(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Like>, sqlx::Error> {
    let likes = sqlx::query_as::<_, Like>(
        r#"
        SELECT id, user_id, target_kind, target_id, liked_at
        FROM likes
        ORDER BY liked_at DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(likes)
}

pub async fn replace_like(
    pool: &PgPool,
    id: i64,
    user_id: &str,
    target_kind: &str,
    target_id: i64,
) -> Result<Option<Like>, sqlx::Error> {
    let like = sqlx::query_as::<_, Like>(
        r#"
        UPDATE likes
        SET user_id = $2, target_kind = $3, target_id = $4
        WHERE id = $1
        RETURNING id, user_id, target_kind, target_id, liked_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(target_kind)
    .bind(target_id)
    .fetch_optional(pool)
    .await?;

    Ok(like)
}

pub async fn update_like(
    pool: &PgPool,
    id: i64,
    user_id: Option<&str>,
    target_kind: Option<&str>,
    target_id: Option<i64>,
) -> Result<Option<Like>, sqlx::Error> {
    let like = sqlx::query_as::<_, Like>(
        r#"
        UPDATE likes
        SET user_id = COALESCE($2, user_id),
            target_kind = COALESCE($3, target_kind),
            target_id = COALESCE($4, target_id)
        WHERE id = $1
        RETURNING id, user_id, target_kind, target_id, liked_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(target_kind)
    .bind(target_id)
    .fetch_optional(pool)
    .await?;

    Ok(like)
}

pub async fn delete_like(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM likes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_for_target(
    pool: &PgPool,
    target_kind: &str,
    target_id: i64,
) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) as count
        FROM likes
        WHERE target_kind = $1 AND target_id = $2
        "#,
    )
    .bind(target_kind)
    .bind(target_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get::<i64, _>("count"))
}
