use crate::models::Comment;
use sqlx::{PgPool, Row};

// ============================================
// Comment queries
// ============================================

pub async fn create_comment(
    pool: &PgPool,
    user_id: &str,
    target_kind: &str,
    target_id: i64,
    text: &str,
    parent_id: Option<i64>,
) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (user_id, target_kind, target_id, text, parent_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, target_kind, target_id, text, parent_id, created_at
        "#,
    )
    .bind(user_id)
    .bind(target_kind)
    .bind(target_id)
    .bind(text)
    .bind(parent_id)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

pub async fn find_comment_by_id(pool: &PgPool, id: i64) -> Result<Option<Comment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, user_id, target_kind, target_id, text, parent_id, created_at
        FROM comments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

pub async fn list_comments(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, user_id, target_kind, target_id, text, parent_id, created_at
        FROM comments
        ORDER BY created_at DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Full replacement. `parent_id = None` detaches a reply back into a
/// top-level comment, so the column is written directly rather than
/// coalesced.
pub async fn replace_comment(
    pool: &PgPool,
    id: i64,
    user_id: &str,
    target_kind: &str,
    target_id: i64,
    text: &str,
    parent_id: Option<i64>,
) -> Result<Option<Comment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments
        SET user_id = $2, target_kind = $3, target_id = $4, text = $5, parent_id = $6
        WHERE id = $1
        RETURNING id, user_id, target_kind, target_id, text, parent_id, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(target_kind)
    .bind(target_id)
    .bind(text)
    .bind(parent_id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

pub async fn update_comment(
    pool: &PgPool,
    id: i64,
    user_id: Option<&str>,
    target_kind: Option<&str>,
    target_id: Option<i64>,
    text: Option<&str>,
    parent_id: Option<i64>,
) -> Result<Option<Comment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments
        SET user_id = COALESCE($2, user_id),
            target_kind = COALESCE($3, target_kind),
            target_id = COALESCE($4, target_id),
            text = COALESCE($5, text),
            parent_id = COALESCE($6, parent_id)
        WHERE id = $1
        RETURNING id, user_id, target_kind, target_id, text, parent_id, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(target_kind)
    .bind(target_id)
    .bind(text)
    .bind(parent_id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Deleting a comment cascades to its replies through the parent foreign
/// key.
pub async fn delete_comment(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
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
        FROM comments
        WHERE target_kind = $1 AND target_id = $2
        "#,
    )
    .bind(target_kind)
    .bind(target_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get::<i64, _>("count"))
}
