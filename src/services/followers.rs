/// Follower service - directed follow edges between users
use crate::db::follower_repo;
use crate::error::{AppError, Result};
use crate::models::{CreateFollowerRequest, Follower, UpdateFollowerRequest};
use sqlx::PgPool;

pub struct FollowerService {
    pool: PgPool,
}

impl FollowerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a follow edge. The pair is unique per direction; following
    /// yourself is not rejected here.
    pub async fn create_follower(&self, req: CreateFollowerRequest) -> Result<Follower> {
        let follower =
            follower_repo::create_follower(&self.pool, &req.follower_id, &req.following_id).await?;
        Ok(follower)
    }

    pub async fn get_follower(&self, id: i64) -> Result<Follower> {
        follower_repo::find_follower_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("follower {id} not found")))
    }

    pub async fn list_followers(&self, limit: i64, offset: i64) -> Result<Vec<Follower>> {
        let followers = follower_repo::list_followers(&self.pool, limit, offset).await?;
        Ok(followers)
    }

    pub async fn replace_follower(&self, id: i64, req: CreateFollowerRequest) -> Result<Follower> {
        follower_repo::replace_follower(&self.pool, id, &req.follower_id, &req.following_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("follower {id} not found")))
    }

    pub async fn update_follower(&self, id: i64, req: UpdateFollowerRequest) -> Result<Follower> {
        follower_repo::update_follower(
            &self.pool,
            id,
            req.follower_id.as_deref(),
            req.following_id.as_deref(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("follower {id} not found")))
    }

    pub async fn delete_follower(&self, id: i64) -> Result<()> {
        let deleted = follower_repo::delete_follower(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("follower {id} not found")));
        }
        Ok(())
    }
}
