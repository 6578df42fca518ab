use crate::models::Hashtag;
use sqlx::PgPool;

// ============================================
// Hashtag queries
// ============================================

pub async fn create_hashtag(
    pool: &PgPool,
    tag: &str,
    target_kind: &str,
    target_id: i64,
) -> Result<Hashtag, sqlx::Error> {
    let hashtag = sqlx::query_as::<_, Hashtag>(
        r#"
        INSERT INTO hashtags (tag, target_kind, target_id)
        VALUES ($1, $2, $3)
        RETURNING id, tag, target_kind, target_id, created_at
        "#,
    )
    .bind(tag)
    .bind(target_kind)
    .bind(target_id)
    .fetch_one(pool)
    .await?;

    Ok(hashtag)
}

pub async fn find_hashtag_by_id(pool: &PgPool, id: i64) -> Result<Option<Hashtag>, sqlx::Error> {
    let hashtag = sqlx::query_as::<_, Hashtag>(
        r#"
        SELECT id, tag, target_kind, target_id, created_at
        FROM hashtags
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(hashtag)
}

pub async fn list_hashtags(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Hashtag>, sqlx::Error> {
    let hashtags = sqlx::query_as::<_, Hashtag>(
        r#"
        SELECT id, tag, target_kind, target_id, created_at
        FROM hashtags
        ORDER BY created_at DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(hashtags)
}

pub async fn replace_hashtag(
    pool: &PgPool,
    id: i64,
    tag: &str,
    target_kind: &str,
    target_id: i64,
) -> Result<Option<Hashtag>, sqlx::Error> {
    let hashtag = sqlx::query_as::<_, Hashtag>(
        r#"
        UPDATE hashtags
        SET tag = $2, target_kind = $3, target_id = $4
        WHERE id = $1
        RETURNING id, tag, target_kind, target_id, created_at
        "#,
    )
    .bind(id)
    .bind(tag)
    .bind(target_kind)
    .bind(target_id)
    .fetch_optional(pool)
    .await?;

    Ok(hashtag)
}

pub async fn update_hashtag(
    pool: &PgPool,
    id: i64,
    tag: Option<&str>,
    target_kind: Option<&str>,
    target_id: Option<i64>,
) -> Result<Option<Hashtag>, sqlx::Error> {
    let hashtag = sqlx::query_as::<_, Hashtag>(
        r#"
        UPDATE hashtags
        SET tag = COALESCE($2, tag),
            target_kind = COALESCE($3, target_kind),
            target_id = COALESCE($4, target_id)
        WHERE id = $1
        RETURNING id, tag, target_kind, target_id, created_at
        "#,
    )
    .bind(id)
    .bind(tag)
    .bind(target_kind)
    .bind(target_id)
    .fetch_optional(pool)
    .await?;

    Ok(hashtag)
}

pub async fn delete_hashtag(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM hashtags WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Tag strings attached to one target, oldest first so the order tags were
/// added is the order they render in.
pub async fn tags_for_target(
    pool: &PgPool,
    target_kind: &str,
    target_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    let tags = sqlx::query_scalar::<_, String>(
        r#"
        SELECT tag
        FROM hashtags
        WHERE target_kind = $1 AND target_id = $2
        ORDER BY id
        "#,
    )
    .bind(target_kind)
    .bind(target_id)
    .fetch_all(pool)
    .await?;

    Ok(tags)
}
