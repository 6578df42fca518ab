/// Message endpoints, including read-state and deletion actions
use crate::error::Result;
use crate::handlers::page_bounds;
use crate::models::{ActingUser, CreateMessageRequest, EditMessageRequest, UpdateMessageRequest};
use crate::services::MessageService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

/// Listing filter: `user` narrows to one user's view of their inbox and
/// outbox.
#[derive(Debug, Default, Deserialize)]
pub struct MessageListQuery {
    pub user: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/message
pub async fn create_message(
    pool: web::Data<PgPool>,
    req: web::Json<CreateMessageRequest>,
) -> Result<HttpResponse> {
    let service = MessageService::new((**pool).clone());
    let message = service.create_message(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(message))
}

/// GET /api/v1/message?user=jane.doe
pub async fn list_messages(
    pool: web::Data<PgPool>,
    query: web::Query<MessageListQuery>,
) -> Result<HttpResponse> {
    let service = MessageService::new((**pool).clone());
    let (limit, offset) = page_bounds(query.limit, query.offset);
    let messages = service
        .list_messages(query.user.as_deref(), limit, offset)
        .await?;
    Ok(HttpResponse::Ok().json(messages))
}

/// GET /api/v1/message/{id}
pub async fn get_message(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = MessageService::new((**pool).clone());
    let message = service.get_message(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(message))
}

/// PUT /api/v1/message/{id}
pub async fn replace_message(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CreateMessageRequest>,
) -> Result<HttpResponse> {
    let service = MessageService::new((**pool).clone());
    let message = service
        .replace_message(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(message))
}

/// PATCH /api/v1/message/{id}
pub async fn update_message(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateMessageRequest>,
) -> Result<HttpResponse> {
    let service = MessageService::new((**pool).clone());
    let message = service
        .update_message(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(message))
}

/// DELETE /api/v1/message/{id}
pub async fn delete_message(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = MessageService::new((**pool).clone());
    service.delete_message(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/v1/message/{id}/read
pub async fn mark_as_read(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = MessageService::new((**pool).clone());
    let message = service.mark_read(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(message))
}

/// PUT /api/v1/message/{id}/unread
pub async fn mark_as_unread(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = MessageService::new((**pool).clone());
    let message = service.mark_unread(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(message))
}

/// POST /api/v1/message/{id}/edit
pub async fn edit_message(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<EditMessageRequest>,
) -> Result<HttpResponse> {
    let service = MessageService::new((**pool).clone());
    let message = service
        .edit_message(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(message))
}

/// POST /api/v1/message/{id}/delete-for-me
pub async fn delete_for_me(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<ActingUser>,
) -> Result<HttpResponse> {
    let service = MessageService::new((**pool).clone());
    service
        .delete_for_me(path.into_inner(), &req.user_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/v1/message/{id}/delete-for-everyone
pub async fn delete_for_everyone(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = MessageService::new((**pool).clone());
    let message = service.delete_for_everyone(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(message))
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/message")
            .route("", web::post().to(create_message))
            .route("", web::get().to(list_messages))
            .route("/{id}", web::get().to(get_message))
            .route("/{id}", web::put().to(replace_message))
            .route("/{id}", web::patch().to(update_message))
            .route("/{id}", web::delete().to(delete_message))
            .route("/{id}/read", web::put().to(mark_as_read))
            .route("/{id}/unread", web::put().to(mark_as_unread))
            .route("/{id}/edit", web::post().to(edit_message))
            .route("/{id}/delete-for-me", web::post().to(delete_for_me))
            .route(
                "/{id}/delete-for-everyone",
                web::post().to(delete_for_everyone),
            ),
    );
}
