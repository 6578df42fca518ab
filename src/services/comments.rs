/// Comment service - comments and replies on posts, comments, and stories
use crate::db::{comment_repo, target_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, CreateCommentRequest, TargetKind, UpdateCommentRequest};
use sqlx::PgPool;
use validator::Validate;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a comment. The generic target is resolved explicitly; the
    /// parent reply link is a real foreign key and rejects on its own.
    pub async fn create_comment(&self, req: CreateCommentRequest) -> Result<Comment> {
        req.validate()?;
        self.require_target(req.target_kind, req.target_id).await?;

        let comment = comment_repo::create_comment(
            &self.pool,
            &req.user_id,
            req.target_kind.as_str(),
            req.target_id,
            &req.text,
            req.parent_id,
        )
        .await?;

        Ok(comment)
    }

    pub async fn get_comment(&self, id: i64) -> Result<Comment> {
        comment_repo::find_comment_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {id} not found")))
    }

    pub async fn list_comments(&self, limit: i64, offset: i64) -> Result<Vec<Comment>> {
        let comments = comment_repo::list_comments(&self.pool, limit, offset).await?;
        Ok(comments)
    }

    pub async fn replace_comment(&self, id: i64, req: CreateCommentRequest) -> Result<Comment> {
        req.validate()?;
        self.require_target(req.target_kind, req.target_id).await?;

        comment_repo::replace_comment(
            &self.pool,
            id,
            &req.user_id,
            req.target_kind.as_str(),
            req.target_id,
            &req.text,
            req.parent_id,
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("comment {id} not found")))
    }

    pub async fn update_comment(&self, id: i64, req: UpdateCommentRequest) -> Result<Comment> {
        req.validate()?;

        if req.target_kind.is_some() || req.target_id.is_some() {
            let existing = self.get_comment(id).await?;
            let kind = req.target_kind.unwrap_or_else(|| existing.target_kind());
            let target_id = req.target_id.unwrap_or(existing.target_id);
            self.require_target(kind, target_id).await?;
        }

        comment_repo::update_comment(
            &self.pool,
            id,
            req.user_id.as_deref(),
            req.target_kind.map(|k| k.as_str()),
            req.target_id,
            req.text.as_deref(),
            req.parent_id,
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("comment {id} not found")))
    }

    pub async fn delete_comment(&self, id: i64) -> Result<()> {
        let deleted = comment_repo::delete_comment(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("comment {id} not found")));
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
