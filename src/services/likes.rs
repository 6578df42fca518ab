/// Like service - one like per user per target
use crate::db::{like_repo, target_repo};
use crate::error::{AppError, Result};
use crate::models::{CreateLikeRequest, Like, TargetKind, UpdateLikeRequest};
use sqlx::PgPool;

pub struct LikeService {
    pool: PgPool,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a like. Duplicates are rejected by the unique constraint, so
    /// two racing requests resolve to one stored row and one conflict.
    pub async fn create_like(&self, req: CreateLikeRequest) -> Result<Like> {
        self.require_target(req.target_kind, req.target_id).await?;

        let like = like_repo::create_like(
            &self.pool,
            &req.user_id,
            req.target_kind.as_str(),
            req.target_id,
        )
        .await?;

        Ok(like)
    }

    pub async fn get_like(&self, id: i64) -> Result<Like> {
        like_repo::find_like_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("like {id} not found")))
    }

    pub async fn list_likes(&self, limit: i64, offset: i64) -> Result<Vec<Like>> {
        let likes = like_repo::list_likes(&self.pool, limit, offset).await?;
        Ok(likes)
    }

    pub async fn replace_like(&self, id: i64, req: CreateLikeRequest) -> Result<Like> {
        self.require_target(req.target_kind, req.target_id).await?;

        like_repo::replace_like(
            &self.pool,
            id,
            &req.user_id,
            req.target_kind.as_str(),
            req.target_id,
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("like {id} not found")))
    }

    pub async fn update_like(&self, id: i64, req: UpdateLikeRequest) -> Result<Like> {
        if req.target_kind.is_some() || req.target_id.is_some() {
            let existing = self.get_like(id).await?;
            let kind = req.target_kind.unwrap_or_else(|| existing.target_kind());
            let target_id = req.target_id.unwrap_or(existing.target_id);
            self.require_target(kind, target_id).await?;
        }

        like_repo::update_like(
            &self.pool,
            id,
            req.user_id.as_deref(),
            req.target_kind.map(|k| k.as_str()),
            req.target_id,
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("like {id} not found")))
    }

    pub async fn delete_like(&self, id: i64) -> Result<()> {
        let deleted = like_repo::delete_like(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("like {id} not found")));
        }
        Ok(())
    }

    async fn require_target(&self, kind: TargetKind, target_id: i64) -> Result<()> {
        let exists = target_repo::target_exists(&self.pool, kind, target_id).await?;
        if !exists {
            return Err(AppError::Reference(format!(
                "{} {} does not exist",
                kind.as_str(),
                target_id
            )));
        }
        Ok(())
    }
}
