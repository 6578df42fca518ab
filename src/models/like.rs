use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::TargetKind;

/// Like entity. One row per (user, target); the unique index is the only
/// duplicate defence, so a concurrent double-like surfaces as a conflict.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Like {
    pub id: i64,
    pub user_id: String,
    pub target_kind: String,
    pub target_id: i64,
    pub liked_at: DateTime<Utc>,
}

impl Like {
    pub fn target_kind(&self) -> TargetKind {
        TargetKind::from_str(&self.target_kind).unwrap_or(TargetKind::Post)
    }
}

/// Request body for creating a like (also the PUT replacement shape)
#[derive(Debug, Deserialize)]
pub struct CreateLikeRequest {
    pub user_id: String,
    pub target_kind: TargetKind,
    pub target_id: i64,
}

/// Request body for partially updating a like (PATCH)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLikeRequest {
    pub user_id: Option<String>,
    pub target_kind: Option<TargetKind>,
    pub target_id: Option<i64>,
}
