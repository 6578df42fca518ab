use crate::models::SavedPost;
use sqlx::PgPool;

// ============================================
// Saved post queries
// ============================================

pub async fn create_saved_post(
    pool: &PgPool,
    post_id: i64,
    user_id: &str,
) -> Result<SavedPost, sqlx::Error> {
    let saved = sqlx::query_as::<_, SavedPost>(
        r#"
        INSERT INTO saved_posts (post_id, user_id)
        VALUES ($1, $2)
        RETURNING id, post_id, user_id, created_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(saved)
}

pub async fn find_saved_post_by_id(
    pool: &PgPool,
    id: i64,
) -> Result<Option<SavedPost>, sqlx::Error> {
    let saved = sqlx::query_as::<_, SavedPost>(
        r#"
        SELECT id, post_id, user_id, created_at
        FROM saved_posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(saved)
}

pub async fn list_saved_posts(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<SavedPost>, sqlx::Error> {
    let saved = sqlx::query_as::<_, SavedPost>(
        r#"
        SELECT id, post_id, user_id, created_at
        FROM saved_posts
        ORDER BY created_at DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(saved)
}

pub async fn replace_saved_post(
    pool: &PgPool,
    id: i64,
    post_id: i64,
    user_id: &str,
) -> Result<Option<SavedPost>, sqlx::Error> {
    let saved = sqlx::query_as::<_, SavedPost>(
        r#"
        UPDATE saved_posts
        SET post_id = $2, user_id = $3
        WHERE id = $1
        RETURNING id, post_id, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(post_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(saved)
}

pub async fn update_saved_post(
    pool: &PgPool,
    id: i64,
    post_id: Option<i64>,
    user_id: Option<&str>,
) -> Result<Option<SavedPost>, sqlx::Error> {
    let saved = sqlx::query_as::<_, SavedPost>(
        r#"
        UPDATE saved_posts
        SET post_id = COALESCE($2, post_id),
            user_id = COALESCE($3, user_id)
        WHERE id = $1
        RETURNING id, post_id, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(post_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(saved)
}

pub async fn delete_saved_post(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM saved_posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
