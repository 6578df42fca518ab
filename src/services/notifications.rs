/// Notification service - per-user notices with severity and read state
use crate::db::notification_repo;
use crate::error::{AppError, Result};
use crate::models::{CreateNotificationRequest, NotificationResponse, UpdateNotificationRequest};
use sqlx::PgPool;
use validator::Validate;

pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_notification(
        &self,
        req: CreateNotificationRequest,
    ) -> Result<NotificationResponse> {
        req.validate()?;

        let kind = req.kind.unwrap_or_default();
        let notification = notification_repo::create_notification(
            &self.pool,
            &req.user_id,
            &req.message,
            kind.as_str(),
            req.is_read.unwrap_or(false),
        )
        .await?;

        Ok(notification.into())
    }

    pub async fn get_notification(&self, id: i64) -> Result<NotificationResponse> {
        let notification = notification_repo::find_notification_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("notification {id} not found")))?;

        Ok(notification.into())
    }

    pub async fn list_notifications(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NotificationResponse>> {
        let notifications = notification_repo::list_notifications(&self.pool, limit, offset)
            .await?
            .into_iter()
            .map(NotificationResponse::from)
            .collect();

        Ok(notifications)
    }

    pub async fn replace_notification(
        &self,
        id: i64,
        req: CreateNotificationRequest,
    ) -> Result<NotificationResponse> {
        req.validate()?;

        let kind = req.kind.unwrap_or_default();
        let notification = notification_repo::replace_notification(
            &self.pool,
            id,
            &req.user_id,
            &req.message,
            kind.as_str(),
            req.is_read.unwrap_or(false),
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("notification {id} not found")))?;

        Ok(notification.into())
    }

    pub async fn update_notification(
        &self,
        id: i64,
        req: UpdateNotificationRequest,
    ) -> Result<NotificationResponse> {
        req.validate()?;

        let kind = req.kind.map(|k| k.as_str());
        let notification = notification_repo::update_notification(
            &self.pool,
            id,
            req.user_id.as_deref(),
            req.message.as_deref(),
            kind,
            req.is_read,
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("notification {id} not found")))?;

        Ok(notification.into())
    }

    pub async fn delete_notification(&self, id: i64) -> Result<()> {
        let deleted = notification_repo::delete_notification(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("notification {id} not found")));
        }
        Ok(())
    }

    /// Mark one notification read. Safe to repeat.
    pub async fn mark_read(&self, id: i64) -> Result<NotificationResponse> {
        let notification = notification_repo::mark_read(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("notification {id} not found")))?;

        Ok(notification.into())
    }
}
