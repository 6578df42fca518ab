use crate::models::{Post, PostImage};
use sqlx::PgPool;

// ============================================
// Post queries
// ============================================

pub async fn create_post(pool: &PgPool, user_id: &str, caption: &str) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, caption)
        VALUES ($1, $2)
        RETURNING id, user_id, caption, created_at
        "#,
    )
    .bind(user_id)
    .bind(caption)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Creates a post and its image rows in one transaction so a failed image
/// insert never leaves a half-created post behind.
pub async fn create_post_with_images(
    pool: &PgPool,
    user_id: &str,
    caption: &str,
    images: &[String],
) -> Result<(Post, Vec<PostImage>), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, caption)
        VALUES ($1, $2)
        RETURNING id, user_id, caption, created_at
        "#,
    )
    .bind(user_id)
    .bind(caption)
    .fetch_one(&mut *tx)
    .await?;

    let mut created = Vec::with_capacity(images.len());
    for image in images {
        let row = sqlx::query_as::<_, PostImage>(
            r#"
            INSERT INTO post_images (post_id, image)
            VALUES ($1, $2)
            RETURNING id, post_id, image
            "#,
        )
        .bind(post.id)
        .bind(image)
        .fetch_one(&mut *tx)
        .await?;
        created.push(row);
    }

    tx.commit().await?;

    Ok((post, created))
}

pub async fn find_post_by_id(pool: &PgPool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, caption, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

pub async fn list_posts(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, caption, created_at
        FROM posts
        ORDER BY created_at DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

pub async fn replace_post(
    pool: &PgPool,
    id: i64,
    user_id: &str,
    caption: &str,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET user_id = $2, caption = $3
        WHERE id = $1
        RETURNING id, user_id, caption, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(caption)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

pub async fn update_post(
    pool: &PgPool,
    id: i64,
    user_id: Option<&str>,
    caption: Option<&str>,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET user_id = COALESCE($2, user_id),
            caption = COALESCE($3, caption)
        WHERE id = $1
        RETURNING id, user_id, caption, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(caption)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Deleting a post cascades to its image rows and saved-post rows through
/// foreign keys. Likes, comments and hashtags that reference the post keep
/// their rows; generic references are not constrained.
pub async fn delete_post(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ============================================
// Post image queries
// ============================================

pub async fn create_post_image(
    pool: &PgPool,
    post_id: i64,
    image: &str,
) -> Result<PostImage, sqlx::Error> {
    let row = sqlx::query_as::<_, PostImage>(
        r#"
        INSERT INTO post_images (post_id, image)
        VALUES ($1, $2)
        RETURNING id, post_id, image
        "#,
    )
    .bind(post_id)
    .bind(image)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn list_post_images(pool: &PgPool, post_id: i64) -> Result<Vec<PostImage>, sqlx::Error> {
    let images = sqlx::query_as::<_, PostImage>(
        r#"
        SELECT id, post_id, image
        FROM post_images
        WHERE post_id = $1
        ORDER BY id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(images)
}

pub async fn delete_post_image(
    pool: &PgPool,
    post_id: i64,
    image_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM post_images WHERE id = $1 AND post_id = $2")
        .bind(image_id)
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
