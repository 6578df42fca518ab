use crate::models::Follower;
use sqlx::PgPool;

// ============================================
// Follower queries
// ============================================

pub async fn create_follower(
    pool: &PgPool,
    follower_id: &str,
    following_id: &str,
) -> Result<Follower, sqlx::Error> {
    let follower = sqlx::query_as::<_, Follower>(
        r#"
        INSERT INTO followers (follower_id, following_id)
        VALUES ($1, $2)
        RETURNING id, follower_id, following_id, followed_at
        "#,
    )
    .bind(follower_id)
    .bind(following_id)
    .fetch_one(pool)
    .await?;

    Ok(follower)
}

pub async fn find_follower_by_id(pool: &PgPool, id: i64) -> Result<Option<Follower>, sqlx::Error> {
    let follower = sqlx::query_as::<_, Follower>(
        r#"
        SELECT id, follower_id, following_id, followed_at
        FROM followers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(follower)
}

pub async fn list_followers(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Follower>, sqlx::Error> {
    let followers = sqlx::query_as::<_, Follower>(
        r#"
        SELECT id, follower_id, following_id, followed_at
        FROM followers
        ORDER BY followed_at DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(followers)
}

pub async fn replace_follower(
    pool: &PgPool,
    id: i64,
    follower_id: &str,
    following_id: &str,
) -> Result<Option<Follower>, sqlx::Error> {
    let follower = sqlx::query_as::<_, Follower>(
        r#"
        UPDATE followers
        SET follower_id = $2, following_id = $3
        WHERE id = $1
        RETURNING id, follower_id, following_id, followed_at
        "#,
    )
    .bind(id)
    .bind(follower_id)
    .bind(following_id)
    .fetch_optional(pool)
    .await?;

    Ok(follower)
}

pub async fn update_follower(
    pool: &PgPool,
    id: i64,
    follower_id: Option<&str>,
    following_id: Option<&str>,
) -> Result<Option<Follower>, sqlx::Error> {
    let follower = sqlx::query_as::<_, Follower>(
        r#"
        UPDATE followers
        SET follower_id = COALESCE($2, follower_id),
            following_id = COALESCE($3, following_id)
        WHERE id = $1
        RETURNING id, follower_id, following_id, followed_at
        "#,
    )
    .bind(id)
    .bind(follower_id)
    .bind(following_id)
    .fetch_optional(pool)
    .await?;

    Ok(follower)
}

pub async fn delete_follower(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM followers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
