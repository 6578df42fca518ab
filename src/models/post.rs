use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Post entity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: String,
    pub caption: String,
    pub created_at: DateTime<Utc>,
}

/// Image attached to a post. Rows are removed with their post.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PostImage {
    pub id: i64,
    pub post_id: i64,
    /// Opaque storage path, e.g. `images/post_pics/abc.jpg`
    pub image: String,
}

/// Wire shape for a post: the row plus derived engagement fields
/// computed at serialization time.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub id: i64,
    pub user_id: String,
    pub caption: String,
    pub created_at: DateTime<Utc>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub hashtags: Vec<String>,
    /// View tracking lives elsewhere; always reported as zero.
    pub views: i64,
}

impl PostDetail {
    pub fn from_parts(
        post: Post,
        likes_count: i64,
        comments_count: i64,
        hashtags: Vec<String>,
    ) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            caption: post.caption,
            created_at: post.created_at,
            likes_count,
            comments_count,
            hashtags,
            views: 0,
        }
    }
}

/// Request body for creating a post (also the PUT replacement shape,
/// minus `images`, which only applies at creation)
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    pub user_id: String,
    #[validate(length(max = 100))]
    pub caption: String,
    /// Optional image paths inserted together with the post
    pub images: Option<Vec<String>>,
}

/// Request body for partially updating a post (PATCH)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    pub user_id: Option<String>,
    #[validate(length(max = 100))]
    pub caption: Option<String>,
}

/// Request body for attaching an image to an existing post
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostImageRequest {
    #[validate(length(min = 1))]
    pub image: String,
}
