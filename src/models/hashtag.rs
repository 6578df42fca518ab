use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::TargetKind;

/// Hashtag entity: a tag attached to one piece of content via the
/// generic (kind, id) reference. The same tag may appear on any number
/// of targets; one tag per target at most.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Hashtag {
    pub id: i64,
    pub tag: String,
    pub target_kind: String,
    pub target_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Hashtag {
    pub fn target_kind(&self) -> TargetKind {
        TargetKind::from_str(&self.target_kind).unwrap_or(TargetKind::Post)
    }
}

/// Request body for creating a hashtag (also the PUT replacement shape)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHashtagRequest {
    #[validate(length(min = 1, max = 100))]
    pub tag: String,
    pub target_kind: TargetKind,
    pub target_id: i64,
}

/// Request body for partially updating a hashtag (PATCH)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateHashtagRequest {
    #[validate(length(min = 1, max = 100))]
    pub tag: Option<String>,
    pub target_kind: Option<TargetKind>,
    pub target_id: Option<i64>,
}
