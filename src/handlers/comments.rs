/// Comment endpoints
use crate::error::Result;
use crate::handlers::Pagination;
use crate::models::{CreateCommentRequest, UpdateCommentRequest};
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// POST /api/v1/comment
pub async fn create_comment(
    pool: web::Data<PgPool>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service.create_comment(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(comment))
}

/// GET /api/v1/comment
pub async fn list_comments(
    pool: web::Data<PgPool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let (limit, offset) = query.bounds();
    let comments = service.list_comments(limit, offset).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// GET /api/v1/comment/{id}
pub async fn get_comment(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service.get_comment(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// PUT /api/v1/comment/{id}
pub async fn replace_comment(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service
        .replace_comment(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// PATCH /api/v1/comment/{id}
pub async fn update_comment(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service
        .update_comment(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// DELETE /api/v1/comment/{id}
pub async fn delete_comment(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    service.delete_comment(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/comment")
            .route("", web::post().to(create_comment))
            .route("", web::get().to(list_comments))
            .route("/{id}", web::get().to(get_comment))
            .route("/{id}", web::put().to(replace_comment))
            .route("/{id}", web::patch().to(update_comment))
            .route("/{id}", web::delete().to(delete_comment)),
    );
}
