/// Story service - ephemeral content with a fixed expiry window
use crate::db::story_repo;
use crate::error::{AppError, Result};
use crate::models::{CreateStoryRequest, Story, UpdateStoryRequest};
use sqlx::PgPool;
use validator::Validate;

pub struct StoryService {
    pool: PgPool,
}

impl StoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a story. The expiry is derived from the creation instant and
    /// is not client-settable.
    pub async fn create_story(&self, req: CreateStoryRequest) -> Result<Story> {
        req.validate()?;

        let story = story_repo::create_story(&self.pool, &req.user_id, &req.image).await?;
        Ok(story)
    }

    pub async fn get_story(&self, id: i64) -> Result<Story> {
        story_repo::find_story_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("story {id} not found")))
    }

    pub async fn list_stories(&self, limit: i64, offset: i64) -> Result<Vec<Story>> {
        let stories = story_repo::list_stories(&self.pool, limit, offset).await?;
        Ok(stories)
    }

    pub async fn replace_story(&self, id: i64, req: CreateStoryRequest) -> Result<Story> {
        req.validate()?;

        story_repo::replace_story(&self.pool, id, &req.user_id, &req.image)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("story {id} not found")))
    }

    pub async fn update_story(&self, id: i64, req: UpdateStoryRequest) -> Result<Story> {
        req.validate()?;

        story_repo::update_story(&self.pool, id, req.user_id.as_deref(), req.image.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("story {id} not found")))
    }

    pub async fn delete_story(&self, id: i64) -> Result<()> {
        let deleted = story_repo::delete_story(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("story {id} not found")));
        }
        Ok(())
    }
}
