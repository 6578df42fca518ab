use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
    Success,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "INFO",
            NotificationKind::Warning => "WARNING",
            NotificationKind::Error => "ERROR",
            NotificationKind::Success => "SUCCESS",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "INFO" => Some(NotificationKind::Info),
            "WARNING" => Some(NotificationKind::Warning),
            "ERROR" => Some(NotificationKind::Error),
            "SUCCESS" => Some(NotificationKind::Success),
            _ => None,
        }
    }
}

impl Default for NotificationKind {
    fn default() -> Self {
        NotificationKind::Info
    }
}

/// Notification entity. New rows default to unread, kind INFO.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notification {
    pub id: i64,
    pub user_id: String,
    pub message: String,
    pub is_read: bool,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        NotificationKind::from_str(&self.kind).unwrap_or_default()
    }

    /// True while the notification is at most 24 hours old.
    pub fn is_recent(&self) -> bool {
        self.created_at >= Utc::now() - Duration::hours(24)
    }
}

/// Wire shape for a notification: the row plus the derived recency flag.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub user_id: String,
    pub message: String,
    pub is_read: bool,
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub is_recent: bool,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        let is_recent = n.is_recent();
        Self {
            id: n.id,
            user_id: n.user_id,
            message: n.message,
            is_read: n.is_read,
            kind: n.kind,
            created_at: n.created_at,
            is_recent,
        }
    }
}

/// Request body for creating a notification (also the PUT replacement
/// shape; omitted fields fall back to their defaults)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    pub user_id: String,
    #[validate(length(min = 1, max = 255))]
    pub message: String,
    pub kind: Option<NotificationKind>,
    pub is_read: Option<bool>,
}

/// Request body for partially updating a notification (PATCH)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateNotificationRequest {
    pub user_id: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub message: Option<String>,
    pub kind: Option<NotificationKind>,
    pub is_read: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            NotificationKind::Info,
            NotificationKind::Warning,
            NotificationKind::Error,
            NotificationKind::Success,
        ] {
            assert_eq!(NotificationKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(NotificationKind::from_str("DEBUG"), None);
    }

    #[test]
    fn test_kind_serde_uppercase() {
        let json = serde_json::to_string(&NotificationKind::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
    }

    #[test]
    fn test_recency_window() {
        let fresh = Notification {
            id: 1,
            user_id: "jane.doe".to_string(),
            message: "hi".to_string(),
            is_read: false,
            kind: "INFO".to_string(),
            created_at: Utc::now() - Duration::hours(1),
        };
        assert!(fresh.is_recent());

        let stale = Notification {
            created_at: Utc::now() - Duration::hours(25),
            ..fresh
        };
        assert!(!stale.is_recent());

        let resp = NotificationResponse::from(stale);
        assert!(!resp.is_recent);
    }
}
