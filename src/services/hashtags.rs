/// Hashtag service - tags attached to posts, comments, and stories
use crate::db::{hashtag_repo, target_repo};
use crate::error::{AppError, Result};
use crate::models::{CreateHashtagRequest, Hashtag, TargetKind, UpdateHashtagRequest};
use sqlx::PgPool;
use validator::Validate;

pub struct HashtagService {
    pool: PgPool,
}

impl HashtagService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach a tag to a target. The referenced row must exist at write
    /// time even though no foreign key holds it afterwards.
    pub async fn create_hashtag(&self, req: CreateHashtagRequest) -> Result<Hashtag> {
        req.validate()?;
        self.require_target(req.target_kind, req.target_id).await?;

        let hashtag = hashtag_repo::create_hashtag(
            &self.pool,
            &req.tag,
            req.target_kind.as_str(),
            req.target_id,
        )
        .await?;

        Ok(hashtag)
    }

    pub async fn get_hashtag(&self, id: i64) -> Result<Hashtag> {
        hashtag_repo::find_hashtag_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("hashtag {id} not found")))
    }

    pub async fn list_hashtags(&self, limit: i64, offset: i64) -> Result<Vec<Hashtag>> {
        let hashtags = hashtag_repo::list_hashtags(&self.pool, limit, offset).await?;
        Ok(hashtags)
    }

    pub async fn replace_hashtag(&self, id: i64, req: CreateHashtagRequest) -> Result<Hashtag> {
        req.validate()?;
        self.require_target(req.target_kind, req.target_id).await?;

        hashtag_repo::replace_hashtag(
            &self.pool,
            id,
            &req.tag,
            req.target_kind.as_str(),
            req.target_id,
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("hashtag {id} not found")))
    }

    pub async fn update_hashtag(&self, id: i64, req: UpdateHashtagRequest) -> Result<Hashtag> {
        req.validate()?;

        // Re-resolve the reference when the patch moves either half of it.
        if req.target_kind.is_some() || req.target_id.is_some() {
            let existing = self.get_hashtag(id).await?;
            let kind = req.target_kind.unwrap_or_else(|| existing.target_kind());
            let target_id = req.target_id.unwrap_or(existing.target_id);
            self.require_target(kind, target_id).await?;
        }

        hashtag_repo::update_hashtag(
            &self.pool,
            id,
            req.tag.as_deref(),
            req.target_kind.map(|k| k.as_str()),
            req.target_id,
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("hashtag {id} not found")))
    }

    pub async fn delete_hashtag(&self, id: i64) -> Result<()> {
        let deleted = hashtag_repo::delete_hashtag(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("hashtag {id} not found")));
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
