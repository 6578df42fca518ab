/// Message service - direct messages, read state, edits, and the two
/// deletion flavours
use crate::db::message_repo;
use crate::error::{AppError, Result};
use crate::models::{
    CreateMessageRequest, EditMessageRequest, MessageResponse, UpdateMessageRequest,
    DELETED_MESSAGE_PLACEHOLDER,
};
use sqlx::PgPool;
use validator::Validate;

pub struct MessageService {
    pool: PgPool,
}

impl MessageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_message(&self, req: CreateMessageRequest) -> Result<MessageResponse> {
        req.validate()?;

        let message = message_repo::create_message(
            &self.pool,
            &req.sender_id,
            &req.recipient_id,
            &req.subject,
            &req.content,
            req.is_read.unwrap_or(false),
            req.is_draft.unwrap_or(false),
            req.scheduled_for,
            req.reply_to_id,
            req.forwarded_from_id,
        )
        .await?;

        Ok(message.into())
    }

    pub async fn get_message(&self, id: i64) -> Result<MessageResponse> {
        let message = message_repo::find_message_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("message {id} not found")))?;

        Ok(message.into())
    }

    /// Unfiltered listing, or one user's view when `user` is given. The
    /// filtered view excludes messages that user deleted for themselves.
    pub async fn list_messages(
        &self,
        user: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MessageResponse>> {
        let messages = match user {
            Some(user_id) => {
                message_repo::list_messages_for_user(&self.pool, user_id, limit, offset).await?
            }
            None => message_repo::list_messages(&self.pool, limit, offset).await?,
        };

        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }

    pub async fn replace_message(
        &self,
        id: i64,
        req: CreateMessageRequest,
    ) -> Result<MessageResponse> {
        req.validate()?;

        let message = message_repo::replace_message(
            &self.pool,
            id,
            &req.sender_id,
            &req.recipient_id,
            &req.subject,
            &req.content,
            req.is_read.unwrap_or(false),
            req.is_draft.unwrap_or(false),
            req.scheduled_for,
            req.reply_to_id,
            req.forwarded_from_id,
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("message {id} not found")))?;

        Ok(message.into())
    }

    pub async fn update_message(
        &self,
        id: i64,
        req: UpdateMessageRequest,
    ) -> Result<MessageResponse> {
        req.validate()?;

        let message = message_repo::update_message(
            &self.pool,
            id,
            req.sender_id.as_deref(),
            req.recipient_id.as_deref(),
            req.subject.as_deref(),
            req.content.as_deref(),
            req.is_read,
            req.is_draft,
            req.scheduled_for,
            req.reply_to_id,
            req.forwarded_from_id,
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("message {id} not found")))?;

        Ok(message.into())
    }

    pub async fn delete_message(&self, id: i64) -> Result<()> {
        let deleted = message_repo::delete_message(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("message {id} not found")));
        }
        Ok(())
    }

    // ============================================
    // Actions
    // ============================================

    pub async fn mark_read(&self, id: i64) -> Result<MessageResponse> {
        let message = message_repo::mark_read(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("message {id} not found")))?;

        Ok(message.into())
    }

    pub async fn mark_unread(&self, id: i64) -> Result<MessageResponse> {
        let message = message_repo::mark_unread(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("message {id} not found")))?;

        Ok(message.into())
    }

    pub async fn edit_message(&self, id: i64, req: EditMessageRequest) -> Result<MessageResponse> {
        req.validate()?;

        let message = message_repo::edit_content(&self.pool, id, &req.content)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("message {id} not found")))?;

        Ok(message.into())
    }

    /// Hide the message from one user's filtered listing. Repeat calls
    /// land on the exclusion row already in place.
    pub async fn delete_for_me(&self, id: i64, user_id: &str) -> Result<()> {
        message_repo::find_message_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("message {id} not found")))?;

        message_repo::add_deletion(&self.pool, id, user_id).await?;
        Ok(())
    }

    /// Blank the content for every viewer. The row survives so replies and
    /// forwards keep a valid anchor.
    pub async fn delete_for_everyone(&self, id: i64) -> Result<MessageResponse> {
        let message =
            message_repo::delete_for_everyone(&self.pool, id, DELETED_MESSAGE_PLACEHOLDER)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("message {id} not found")))?;

        Ok(message.into())
    }
}
