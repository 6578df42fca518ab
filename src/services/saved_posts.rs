/// Saved post service - a user's private bookmark shelf
use crate::db::saved_post_repo;
use crate::error::{AppError, Result};
use crate::models::{CreateSavedPostRequest, SavedPost, UpdateSavedPostRequest};
use sqlx::PgPool;

pub struct SavedPostService {
    pool: PgPool,
}

impl SavedPostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Save a post. Both sides are real foreign keys, so a dangling post
    /// or user is rejected by the database; a repeat save conflicts on the
    /// (post, user) unique constraint.
    pub async fn create_saved_post(&self, req: CreateSavedPostRequest) -> Result<SavedPost> {
        let saved =
            saved_post_repo::create_saved_post(&self.pool, req.post_id, &req.user_id).await?;
        Ok(saved)
    }

    pub async fn get_saved_post(&self, id: i64) -> Result<SavedPost> {
        saved_post_repo::find_saved_post_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("saved post {id} not found")))
    }

    pub async fn list_saved_posts(&self, limit: i64, offset: i64) -> Result<Vec<SavedPost>> {
        let saved = saved_post_repo::list_saved_posts(&self.pool, limit, offset).await?;
        Ok(saved)
    }

    pub async fn replace_saved_post(
        &self,
        id: i64,
        req: CreateSavedPostRequest,
    ) -> Result<SavedPost> {
        saved_post_repo::replace_saved_post(&self.pool, id, req.post_id, &req.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("saved post {id} not found")))
    }

    pub async fn update_saved_post(
        &self,
        id: i64,
        req: UpdateSavedPostRequest,
    ) -> Result<SavedPost> {
        saved_post_repo::update_saved_post(&self.pool, id, req.post_id, req.user_id.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("saved post {id} not found")))
    }

    pub async fn delete_saved_post(&self, id: i64) -> Result<()> {
        let deleted = saved_post_repo::delete_saved_post(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("saved post {id} not found")));
        }
        Ok(())
    }
}
