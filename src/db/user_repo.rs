use crate::models::User;
use sqlx::PgPool;

// ============================================
// User queries
// ============================================

#[allow(clippy::too_many_arguments)]
pub async fn create_user(
    pool: &PgPool,
    id: &str,
    username: &str,
    password_hash: &str,
    email: &str,
    bio: Option<&str>,
    gender: &str,
    profile_pic: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, email, bio, gender, profile_pic)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, username, password_hash, email, bio, gender, profile_pic, created_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(email)
    .bind(bio)
    .bind(gender)
    .bind(profile_pic)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn find_user_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, email, bio, gender, profile_pic, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn list_users(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, email, bio, gender, profile_pic, created_at
        FROM users
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Full replacement of every mutable column. The handle itself is fixed at
/// creation and never rewritten.
#[allow(clippy::too_many_arguments)]
pub async fn replace_user(
    pool: &PgPool,
    id: &str,
    username: &str,
    password_hash: &str,
    email: &str,
    bio: Option<&str>,
    gender: &str,
    profile_pic: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET username = $2,
            password_hash = $3,
            email = $4,
            bio = $5,
            gender = $6,
            profile_pic = $7
        WHERE id = $1
        RETURNING id, username, password_hash, email, bio, gender, profile_pic, created_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(email)
    .bind(bio)
    .bind(gender)
    .bind(profile_pic)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[allow(clippy::too_many_arguments)]
pub async fn update_user(
    pool: &PgPool,
    id: &str,
    username: Option<&str>,
    password_hash: Option<&str>,
    email: Option<&str>,
    bio: Option<&str>,
    gender: Option<&str>,
    profile_pic: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET username = COALESCE($2, username),
            password_hash = COALESCE($3, password_hash),
            email = COALESCE($4, email),
            bio = COALESCE($5, bio),
            gender = COALESCE($6, gender),
            profile_pic = COALESCE($7, profile_pic)
        WHERE id = $1
        RETURNING id, username, password_hash, email, bio, gender, profile_pic, created_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(email)
    .bind(bio)
    .bind(gender)
    .bind(profile_pic)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn delete_user(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
