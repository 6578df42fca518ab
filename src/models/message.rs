use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// What delete-for-everyone leaves behind in place of the content.
pub const DELETED_MESSAGE_PLACEHOLDER: &str = "This message was deleted";

/// Direct message entity.
///
/// Deletion never removes the row: delete-for-everyone overwrites the
/// content with a fixed placeholder, and delete-for-me records the viewer
/// in the per-message exclusion set consulted by filtered listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub sender_id: String,
    pub recipient_id: String,
    pub subject: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub is_edited: bool,
    pub edited_at: Option<DateTime<Utc>>,
    pub is_draft: bool,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub reply_to_id: Option<i64>,
    pub forwarded_from_id: Option<i64>,
    pub deleted_for_everyone: bool,
}

impl Message {
    /// Seconds elapsed since the message was sent. Clamped at zero for
    /// scheduled rows whose sent_at sits in the future.
    pub fn seconds_since_sent(&self) -> i64 {
        (Utc::now() - self.sent_at).num_seconds().max(0)
    }
}

/// Wire shape for a message: the row plus the derived age field.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub sender_id: String,
    pub recipient_id: String,
    pub subject: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub is_edited: bool,
    pub edited_at: Option<DateTime<Utc>>,
    pub is_draft: bool,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub reply_to_id: Option<i64>,
    pub forwarded_from_id: Option<i64>,
    pub deleted_for_everyone: bool,
    pub seconds_since_sent: i64,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        let seconds_since_sent = m.seconds_since_sent();
        Self {
            id: m.id,
            sender_id: m.sender_id,
            recipient_id: m.recipient_id,
            subject: m.subject,
            content: m.content,
            sent_at: m.sent_at,
            is_read: m.is_read,
            read_at: m.read_at,
            is_edited: m.is_edited,
            edited_at: m.edited_at,
            is_draft: m.is_draft,
            scheduled_for: m.scheduled_for,
            reply_to_id: m.reply_to_id,
            forwarded_from_id: m.forwarded_from_id,
            deleted_for_everyone: m.deleted_for_everyone,
            seconds_since_sent,
        }
    }
}

/// Request body for sending a message (also the PUT replacement shape;
/// omitted flags fall back to their defaults)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMessageRequest {
    pub sender_id: String,
    pub recipient_id: String,
    #[validate(length(max = 255))]
    pub subject: String,
    pub content: String,
    pub is_read: Option<bool>,
    pub is_draft: Option<bool>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub reply_to_id: Option<i64>,
    pub forwarded_from_id: Option<i64>,
}

/// Request body for partially updating a message (PATCH)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMessageRequest {
    pub sender_id: Option<String>,
    pub recipient_id: Option<String>,
    #[validate(length(max = 255))]
    pub subject: Option<String>,
    pub content: Option<String>,
    pub is_read: Option<bool>,
    pub is_draft: Option<bool>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub reply_to_id: Option<i64>,
    pub forwarded_from_id: Option<i64>,
}

/// Request body for the edit action: rewrites the content and stamps the
/// edit metadata.
#[derive(Debug, Deserialize, Validate)]
pub struct EditMessageRequest {
    #[validate(length(min = 1))]
    pub content: String,
}

/// Identifies the acting user for per-viewer actions (delete-for-me).
#[derive(Debug, Deserialize)]
pub struct ActingUser {
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_seconds_since_sent_non_negative() {
        let msg = Message {
            id: 1,
            sender_id: "jane.doe".to_string(),
            recipient_id: "john_doe".to_string(),
            subject: "hi".to_string(),
            content: "hello".to_string(),
            sent_at: Utc::now() + Duration::hours(1),
            is_read: false,
            read_at: None,
            is_edited: false,
            edited_at: None,
            is_draft: false,
            scheduled_for: None,
            reply_to_id: None,
            forwarded_from_id: None,
            deleted_for_everyone: false,
        };
        assert_eq!(msg.seconds_since_sent(), 0);

        let sent = Message {
            sent_at: Utc::now() - Duration::minutes(2),
            ..msg
        };
        assert!(sent.seconds_since_sent() >= 119);
    }

    #[test]
    fn test_response_carries_age() {
        let msg = Message {
            id: 1,
            sender_id: "a._".to_string(),
            recipient_id: "b._".to_string(),
            subject: "s".to_string(),
            content: "c".to_string(),
            sent_at: Utc::now() - Duration::seconds(30),
            is_read: false,
            read_at: None,
            is_edited: false,
            edited_at: None,
            is_draft: false,
            scheduled_for: None,
            reply_to_id: None,
            forwarded_from_id: None,
            deleted_for_everyone: false,
        };
        let resp = MessageResponse::from(msg);
        assert!(resp.seconds_since_sent >= 29);
    }
}
