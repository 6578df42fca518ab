/// Notification endpoints
use crate::error::Result;
use crate::handlers::Pagination;
use crate::models::{CreateNotificationRequest, UpdateNotificationRequest};
use crate::services::NotificationService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// POST /api/v1/notification
pub async fn create_notification(
    pool: web::Data<PgPool>,
    req: web::Json<CreateNotificationRequest>,
) -> Result<HttpResponse> {
    let service = NotificationService::new((**pool).clone());
    let notification = service.create_notification(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(notification))
}

/// GET /api/v1/notification
pub async fn list_notifications(
    pool: web::Data<PgPool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse> {
    let service = NotificationService::new((**pool).clone());
    let (limit, offset) = query.bounds();
    let notifications = service.list_notifications(limit, offset).await?;
    Ok(HttpResponse::Ok().json(notifications))
}

/// GET /api/v1/notification/{id}
pub async fn get_notification(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = NotificationService::new((**pool).clone());
    let notification = service.get_notification(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(notification))
}

/// PUT /api/v1/notification/{id}
pub async fn replace_notification(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CreateNotificationRequest>,
) -> Result<HttpResponse> {
    let service = NotificationService::new((**pool).clone());
    let notification = service
        .replace_notification(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(notification))
}

/// PATCH /api/v1/notification/{id}
pub async fn update_notification(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateNotificationRequest>,
) -> Result<HttpResponse> {
    let service = NotificationService::new((**pool).clone());
    let notification = service
        .update_notification(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(notification))
}

/// DELETE /api/v1/notification/{id}
pub async fn delete_notification(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = NotificationService::new((**pool).clone());
    service.delete_notification(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/v1/notification/{id}/read
pub async fn mark_as_read(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = NotificationService::new((**pool).clone());
    let notification = service.mark_read(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(notification))
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notification")
            .route("", web::post().to(create_notification))
            .route("", web::get().to(list_notifications))
            .route("/{id}", web::get().to(get_notification))
            .route("/{id}", web::put().to(replace_notification))
            .route("/{id}", web::patch().to(update_notification))
            .route("/{id}", web::delete().to(delete_notification))
            .route("/{id}/read", web::put().to(mark_as_read)),
    );
}
