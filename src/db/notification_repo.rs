use crate::models::Notification;
use sqlx::PgPool;

// ============================================
// Notification queries
// ============================================

pub async fn create_notification(
    pool: &PgPool,
    user_id: &str,
    message: &str,
    kind: &str,
    is_read: bool,
) -> Result<Notification, sqlx::Error> {
    let notification = sqlx::query_as::<_, Notification>(
        r#"
        INSERT INTO notifications (user_id, message, kind, is_read)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, message, kind, is_read, created_at
        "#,
    )
    .bind(user_id)
    .bind(message)
    .bind(kind)
    .bind(is_read)
    .fetch_one(pool)
    .await?;

    Ok(notification)
}

pub async fn find_notification_by_id(
    pool: &PgPool,
    id: i64,
) -> Result<Option<Notification>, sqlx::Error> {
    let notification = sqlx::query_as::<_, Notification>(
        r#"
        SELECT id, user_id, message, kind, is_read, created_at
        FROM notifications
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(notification)
}

pub async fn list_notifications(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Notification>, sqlx::Error> {
    let notifications = sqlx::query_as::<_, Notification>(
        r#"
        SELECT id, user_id, message, kind, is_read, created_at
        FROM notifications
        ORDER BY created_at DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(notifications)
}

pub async fn replace_notification(
    pool: &PgPool,
    id: i64,
    user_id: &str,
    message: &str,
    kind: &str,
    is_read: bool,
) -> Result<Option<Notification>, sqlx::Error> {
    let notification = sqlx::query_as::<_, Notification>(
        r#"
        UPDATE notifications
        SET user_id = $2, message = $3, kind = $4, is_read = $5
        WHERE id = $1
        RETURNING id, user_id, message, kind, is_read, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(message)
    .bind(kind)
    .bind(is_read)
    .fetch_optional(pool)
    .await?;

    Ok(notification)
}

pub async fn update_notification(
    pool: &PgPool,
    id: i64,
    user_id: Option<&str>,
    message: Option<&str>,
    kind: Option<&str>,
    is_read: Option<bool>,
) -> Result<Option<Notification>, sqlx::Error> {
    let notification = sqlx::query_as::<_, Notification>(
        r#"
        UPDATE notifications
        SET user_id = COALESCE($2, user_id),
            message = COALESCE($3, message),
            kind = COALESCE($4, kind),
            is_read = COALESCE($5, is_read)
        WHERE id = $1
        RETURNING id, user_id, message, kind, is_read, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(message)
    .bind(kind)
    .bind(is_read)
    .fetch_optional(pool)
    .await?;

    Ok(notification)
}

pub async fn delete_notification(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Idempotent: marking an already-read notification is a no-op that still
/// returns the row.
pub async fn mark_read(pool: &PgPool, id: i64) -> Result<Option<Notification>, sqlx::Error> {
    let notification = sqlx::query_as::<_, Notification>(
        r#"
        UPDATE notifications
        SET is_read = TRUE
        WHERE id = $1
        RETURNING id, user_id, message, kind, is_read, created_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(notification)
}
