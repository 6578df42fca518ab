use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Follow edge: `follower_id` follows `following_id`. Unique per pair;
/// nothing in the schema stops a user following themselves.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Follower {
    pub id: i64,
    pub follower_id: String,
    pub following_id: String,
    pub followed_at: DateTime<Utc>,
}

/// Request body for creating a follow edge (also the PUT replacement shape)
#[derive(Debug, Deserialize)]
pub struct CreateFollowerRequest {
    pub follower_id: String,
    pub following_id: String,
}

/// Request body for partially updating a follow edge (PATCH)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFollowerRequest {
    pub follower_id: Option<String>,
    pub following_id: Option<String>,
}
