use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::TargetKind;

/// Comment entity. `parent_id` builds a reply tree; root comments carry
/// no parent.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub user_id: String,
    pub target_kind: String,
    pub target_id: i64,
    pub text: String,
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn target_kind(&self) -> TargetKind {
        TargetKind::from_str(&self.target_kind).unwrap_or(TargetKind::Post)
    }
}

/// Request body for creating a comment (also the PUT replacement shape)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    pub user_id: String,
    pub target_kind: TargetKind,
    pub target_id: i64,
    #[validate(length(min = 1, max = 200))]
    pub text: String,
    pub parent_id: Option<i64>,
}

/// Request body for partially updating a comment (PATCH)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    pub user_id: Option<String>,
    pub target_kind: Option<TargetKind>,
    pub target_id: Option<i64>,
    #[validate(length(min = 1, max = 200))]
    pub text: Option<String>,
    pub parent_id: Option<i64>,
}
