use crate::models::{Story, STORY_TTL_HOURS};
use chrono::{Duration, Utc};
use sqlx::PgPool;

// ============================================
// Story queries
// ============================================

/// Stamps both timestamps from the same instant so the expiry is exactly
/// the creation time plus the TTL.
pub async fn create_story(pool: &PgPool, user_id: &str, image: &str) -> Result<Story, sqlx::Error> {
    let created_at = Utc::now();
    let expires_at = created_at + Duration::hours(STORY_TTL_HOURS);

    let story = sqlx::query_as::<_, Story>(
        r#"
        INSERT INTO stories (user_id, image, created_at, expires_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, image, created_at, expires_at
        "#,
    )
    .bind(user_id)
    .bind(image)
    .bind(created_at)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(story)
}

pub async fn find_story_by_id(pool: &PgPool, id: i64) -> Result<Option<Story>, sqlx::Error> {
    let story = sqlx::query_as::<_, Story>(
        r#"
        SELECT id, user_id, image, created_at, expires_at
        FROM stories
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(story)
}

/// Listing does not filter on expiry; expired rows stay visible until a
/// reaper or manual delete removes them.
pub async fn list_stories(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Story>, sqlx::Error> {
    let stories = sqlx::query_as::<_, Story>(
        r#"
        SELECT id, user_id, image, created_at, expires_at
        FROM stories
        ORDER BY created_at DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(stories)
}

/// Replacement rewrites the author and image but never the expiry clock.
pub async fn replace_story(
    pool: &PgPool,
    id: i64,
    user_id: &str,
    image: &str,
) -> Result<Option<Story>, sqlx::Error> {
    let story = sqlx::query_as::<_, Story>(
        r#"
        UPDATE stories
        SET user_id = $2, image = $3
        WHERE id = $1
        RETURNING id, user_id, image, created_at, expires_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(image)
    .fetch_optional(pool)
    .await?;

    Ok(story)
}

pub async fn update_story(
    pool: &PgPool,
    id: i64,
    user_id: Option<&str>,
    image: Option<&str>,
) -> Result<Option<Story>, sqlx::Error> {
    let story = sqlx::query_as::<_, Story>(
        r#"
        UPDATE stories
        SET user_id = COALESCE($2, user_id),
            image = COALESCE($3, image)
        WHERE id = $1
        RETURNING id, user_id, image, created_at, expires_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(image)
    .fetch_optional(pool)
    .await?;

    Ok(story)
}

pub async fn delete_story(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM stories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
