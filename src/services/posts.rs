/// Post service - post CRUD, the derived detail view, and image rows
use crate::db::{comment_repo, hashtag_repo, like_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::{
    CreatePostImageRequest, CreatePostRequest, Post, PostDetail, PostImage, TargetKind,
    UpdatePostRequest,
};
use sqlx::PgPool;
use validator::Validate;

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post, with its image rows in the same transaction when the
    /// request carries any.
    pub async fn create_post(&self, req: CreatePostRequest) -> Result<PostDetail> {
        req.validate()?;

        let images = req.images.unwrap_or_default();
        let post = if images.is_empty() {
            post_repo::create_post(&self.pool, &req.user_id, &req.caption).await?
        } else {
            let (post, _) =
                post_repo::create_post_with_images(&self.pool, &req.user_id, &req.caption, &images)
                    .await?;
            post
        };

        // A row this fresh has no engagement yet.
        Ok(PostDetail::from_parts(post, 0, 0, Vec::new()))
    }

    pub async fn get_post(&self, id: i64) -> Result<PostDetail> {
        let post = post_repo::find_post_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;

        self.assemble(post).await
    }

    pub async fn list_posts(&self, limit: i64, offset: i64) -> Result<Vec<PostDetail>> {
        let posts = post_repo::list_posts(&self.pool, limit, offset).await?;

        let mut details = Vec::with_capacity(posts.len());
        for post in posts {
            details.push(self.assemble(post).await?);
        }
        Ok(details)
    }

    /// Full replacement of author and caption. Image rows are a
    /// sub-resource and are not rewritten here.
    pub async fn replace_post(&self, id: i64, req: CreatePostRequest) -> Result<PostDetail> {
        req.validate()?;

        let post = post_repo::replace_post(&self.pool, id, &req.user_id, &req.caption)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;

        self.assemble(post).await
    }

    pub async fn update_post(&self, id: i64, req: UpdatePostRequest) -> Result<PostDetail> {
        req.validate()?;

        let post = post_repo::update_post(
            &self.pool,
            id,
            req.user_id.as_deref(),
            req.caption.as_deref(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;

        self.assemble(post).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<()> {
        let deleted = post_repo::delete_post(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("post {id} not found")));
        }
        Ok(())
    }

    /// Attach the derived fields: like count, comment count and the tag
    /// strings referencing this post.
    async fn assemble(&self, post: Post) -> Result<PostDetail> {
        let kind = TargetKind::Post.as_str();
        let (likes_count, comments_count, hashtags) = futures::future::try_join3(
            like_repo::count_for_target(&self.pool, kind, post.id),
            comment_repo::count_for_target(&self.pool, kind, post.id),
            hashtag_repo::tags_for_target(&self.pool, kind, post.id),
        )
        .await?;

        Ok(PostDetail::from_parts(
            post,
            likes_count,
            comments_count,
            hashtags,
        ))
    }

    // ============================================
    // Image sub-resource
    // ============================================

    pub async fn list_images(&self, post_id: i64) -> Result<Vec<PostImage>> {
        self.require_post(post_id).await?;

        let images = post_repo::list_post_images(&self.pool, post_id).await?;
        Ok(images)
    }

    pub async fn add_image(&self, post_id: i64, req: CreatePostImageRequest) -> Result<PostImage> {
        req.validate()?;
        self.require_post(post_id).await?;

        let image = post_repo::create_post_image(&self.pool, post_id, &req.image).await?;
        Ok(image)
    }

    pub async fn remove_image(&self, post_id: i64, image_id: i64) -> Result<()> {
        self.require_post(post_id).await?;

        let deleted = post_repo::delete_post_image(&self.pool, post_id, image_id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!(
                "image {image_id} not found on post {post_id}"
            )));
        }
        Ok(())
    }

    async fn require_post(&self, id: i64) -> Result<()> {
        post_repo::find_post_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;
        Ok(())
    }
}
