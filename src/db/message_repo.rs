use crate::models::Message;
use sqlx::PgPool;

// ============================================
// Message queries
// ============================================

#[allow(clippy::too_many_arguments)]
pub async fn create_message(
    pool: &PgPool,
    sender_id: &str,
    recipient_id: &str,
    subject: &str,
    content: &str,
    is_read: bool,
    is_draft: bool,
    scheduled_for: Option<chrono::DateTime<chrono::Utc>>,
    reply_to_id: Option<i64>,
    forwarded_from_id: Option<i64>,
) -> Result<Message, sqlx::Error> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (sender_id, recipient_id, subject, content, is_read,
                              is_draft, scheduled_for, reply_to_id, forwarded_from_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, sender_id, recipient_id, subject, content, sent_at,
                  is_read, read_at, is_edited, edited_at, is_draft,
                  scheduled_for, reply_to_id, forwarded_from_id, deleted_for_everyone
        "#,
    )
    .bind(sender_id)
    .bind(recipient_id)
    .bind(subject)
    .bind(content)
    .bind(is_read)
    .bind(is_draft)
    .bind(scheduled_for)
    .bind(reply_to_id)
    .bind(forwarded_from_id)
    .fetch_one(pool)
    .await?;

    Ok(message)
}

pub async fn find_message_by_id(pool: &PgPool, id: i64) -> Result<Option<Message>, sqlx::Error> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        SELECT id, sender_id, recipient_id, subject, content, sent_at,
               is_read, read_at, is_edited, edited_at, is_draft,
               scheduled_for, reply_to_id, forwarded_from_id, deleted_for_everyone
        FROM messages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(message)
}

pub async fn list_messages(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Message>, sqlx::Error> {
    let messages = sqlx::query_as::<_, Message>(
        r#"
        SELECT id, sender_id, recipient_id, subject, content, sent_at,
               is_read, read_at, is_edited, edited_at, is_draft,
               scheduled_for, reply_to_id, forwarded_from_id, deleted_for_everyone
        FROM messages
        ORDER BY sent_at DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(messages)
}

/// Messages visible to one user: sent or received by them, minus the ones
/// they deleted for themselves. Rows deleted for everyone stay listed with
/// their placeholder content.
pub async fn list_messages_for_user(
    pool: &PgPool,
    user_id: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<Message>, sqlx::Error> {
    let messages = sqlx::query_as::<_, Message>(
        r#"
        SELECT m.id, m.sender_id, m.recipient_id, m.subject, m.content, m.sent_at,
               m.is_read, m.read_at, m.is_edited, m.edited_at, m.is_draft,
               m.scheduled_for, m.reply_to_id, m.forwarded_from_id, m.deleted_for_everyone
        FROM messages m
        WHERE (m.sender_id = $1 OR m.recipient_id = $1)
          AND NOT EXISTS (
              SELECT 1 FROM message_deletions d
              WHERE d.message_id = m.id AND d.user_id = $1
          )
        ORDER BY m.sent_at DESC, m.id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(messages)
}

/// Full replacement of the creation-shaped fields. Edit and deletion flags
/// are owned by their actions and never rewritten here.
#[allow(clippy::too_many_arguments)]
pub async fn replace_message(
    pool: &PgPool,
    id: i64,
    sender_id: &str,
    recipient_id: &str,
    subject: &str,
    content: &str,
    is_read: bool,
    is_draft: bool,
    scheduled_for: Option<chrono::DateTime<chrono::Utc>>,
    reply_to_id: Option<i64>,
    forwarded_from_id: Option<i64>,
) -> Result<Option<Message>, sqlx::Error> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        UPDATE messages
        SET sender_id = $2,
            recipient_id = $3,
            subject = $4,
            content = $5,
            is_read = $6,
            is_draft = $7,
            scheduled_for = $8,
            reply_to_id = $9,
            forwarded_from_id = $10
        WHERE id = $1
        RETURNING id, sender_id, recipient_id, subject, content, sent_at,
                  is_read, read_at, is_edited, edited_at, is_draft,
                  scheduled_for, reply_to_id, forwarded_from_id, deleted_for_everyone
        "#,
    )
    .bind(id)
    .bind(sender_id)
    .bind(recipient_id)
    .bind(subject)
    .bind(content)
    .bind(is_read)
    .bind(is_draft)
    .bind(scheduled_for)
    .bind(reply_to_id)
    .bind(forwarded_from_id)
    .fetch_optional(pool)
    .await?;

    Ok(message)
}

#[allow(clippy::too_many_arguments)]
pub async fn update_message(
    pool: &PgPool,
    id: i64,
    sender_id: Option<&str>,
    recipient_id: Option<&str>,
    subject: Option<&str>,
    content: Option<&str>,
    is_read: Option<bool>,
    is_draft: Option<bool>,
    scheduled_for: Option<chrono::DateTime<chrono::Utc>>,
    reply_to_id: Option<i64>,
    forwarded_from_id: Option<i64>,
) -> Result<Option<Message>, sqlx::Error> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        UPDATE messages
        SET sender_id = COALESCE($2, sender_id),
            recipient_id = COALESCE($3, recipient_id),
            subject = COALESCE($4, subject),
            content = COALESCE($5, content),
            is_read = COALESCE($6, is_read),
            is_draft = COALESCE($7, is_draft),
            scheduled_for = COALESCE($8, scheduled_for),
            reply_to_id = COALESCE($9, reply_to_id),
            forwarded_from_id = COALESCE($10, forwarded_from_id)
        WHERE id = $1
        RETURNING id, sender_id, recipient_id, subject, content, sent_at,
                  is_read, read_at, is_edited, edited_at, is_draft,
                  scheduled_for, reply_to_id, forwarded_from_id, deleted_for_everyone
        "#,
    )
    .bind(id)
    .bind(sender_id)
    .bind(recipient_id)
    .bind(subject)
    .bind(content)
    .bind(is_read)
    .bind(is_draft)
    .bind(scheduled_for)
    .bind(reply_to_id)
    .bind(forwarded_from_id)
    .fetch_optional(pool)
    .await?;

    Ok(message)
}

/// Hard delete. The soft variants live in the actions below.
pub async fn delete_message(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM messages WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// ============================================
// Message actions
// ============================================

/// Idempotent: `read_at` keeps the first read instant on repeat calls.
pub async fn mark_read(pool: &PgPool, id: i64) -> Result<Option<Message>, sqlx::Error> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        UPDATE messages
        SET is_read = TRUE,
            read_at = COALESCE(read_at, NOW())
        WHERE id = $1
        RETURNING id, sender_id, recipient_id, subject, content, sent_at,
                  is_read, read_at, is_edited, edited_at, is_draft,
                  scheduled_for, reply_to_id, forwarded_from_id, deleted_for_everyone
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(message)
}

pub async fn mark_unread(pool: &PgPool, id: i64) -> Result<Option<Message>, sqlx::Error> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        UPDATE messages
        SET is_read = FALSE,
            read_at = NULL
        WHERE id = $1
        RETURNING id, sender_id, recipient_id, subject, content, sent_at,
                  is_read, read_at, is_edited, edited_at, is_draft,
                  scheduled_for, reply_to_id, forwarded_from_id, deleted_for_everyone
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(message)
}

pub async fn edit_content(
    pool: &PgPool,
    id: i64,
    content: &str,
) -> Result<Option<Message>, sqlx::Error> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        UPDATE messages
        SET content = $2,
            is_edited = TRUE,
            edited_at = NOW()
        WHERE id = $1
        RETURNING id, sender_id, recipient_id, subject, content, sent_at,
                  is_read, read_at, is_edited, edited_at, is_draft,
                  scheduled_for, reply_to_id, forwarded_from_id, deleted_for_everyone
        "#,
    )
    .bind(id)
    .bind(content)
    .fetch_optional(pool)
    .await?;

    Ok(message)
}

/// Overwrites the content with the placeholder for every viewer. The row
/// itself survives so threads keep their shape.
pub async fn delete_for_everyone(
    pool: &PgPool,
    id: i64,
    placeholder: &str,
) -> Result<Option<Message>, sqlx::Error> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        UPDATE messages
        SET content = $2,
            deleted_for_everyone = TRUE
        WHERE id = $1
        RETURNING id, sender_id, recipient_id, subject, content, sent_at,
                  is_read, read_at, is_edited, edited_at, is_draft,
                  scheduled_for, reply_to_id, forwarded_from_id, deleted_for_everyone
        "#,
    )
    .bind(id)
    .bind(placeholder)
    .fetch_optional(pool)
    .await?;

    Ok(message)
}

/// Hides the message from one user's listing. Repeat calls are no-ops.
pub async fn add_deletion(
    pool: &PgPool,
    message_id: i64,
    user_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO message_deletions (message_id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (message_id, user_id) DO NOTHING
        "#,
    )
    .bind(message_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
