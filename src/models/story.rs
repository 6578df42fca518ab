use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// How long a story stays visible after creation
pub const STORY_TTL_HOURS: i64 = 24;

/// Story entity. `expires_at` is stamped once at creation
/// (creation instant + 24h) and never recomputed.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Story {
    pub id: i64,
    pub user_id: String,
    /// Opaque storage path, e.g. `images/story_pics/abc.jpg`
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Request body for creating a story (also the PUT replacement shape;
/// replacement leaves the original expiry untouched)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStoryRequest {
    pub user_id: String,
    #[validate(length(min = 1))]
    pub image: String,
}

/// Request body for partially updating a story (PATCH)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateStoryRequest {
    pub user_id: Option<String>,
    #[validate(length(min = 1))]
    pub image: Option<String>,
}
