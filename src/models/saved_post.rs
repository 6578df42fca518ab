use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Saved-post entity: a bookmark, unique per (post, user).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SavedPost {
    pub id: i64,
    pub post_id: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for saving a post (also the PUT replacement shape)
#[derive(Debug, Deserialize)]
pub struct CreateSavedPostRequest {
    pub post_id: i64,
    pub user_id: String,
}

/// Request body for partially updating a saved post (PATCH)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSavedPostRequest {
    pub post_id: Option<i64>,
    pub user_id: Option<String>,
}
