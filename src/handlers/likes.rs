/// Like endpoints
use crate::error::Result;
use crate::handlers::Pagination;
use crate::models::{CreateLikeRequest, UpdateLikeRequest};
use crate::services::LikeService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// POST /api/v1/like
pub async fn create_like(
    pool: web::Data<PgPool>,
    req: web::Json<CreateLikeRequest>,
) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    let like = service.create_like(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(like))
}

/// GET /api/v1/like
pub async fn list_likes(
    pool: web::Data<PgPool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    let (limit, offset) = query.bounds();
    let likes = service.list_likes(limit, offset).await?;
    Ok(HttpResponse::Ok().json(likes))
}

/// GET /api/v1/like/{id}
pub async fn get_like(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    let like = service.get_like(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(like))
}

/// PUT /api/v1/like/{id}
pub async fn replace_like(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CreateLikeRequest>,
) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    let like = service
        .replace_like(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(like))
}

/// PATCH /api/v1/like/{id}
pub async fn update_like(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateLikeRequest>,
) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    let like = service
        .update_like(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(like))
}

/// DELETE /api/v1/like/{id}
pub async fn delete_like(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    service.delete_like(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/like")
            .route("", web::post().to(create_like))
            .route("", web::get().to(list_likes))
            .route("/{id}", web::get().to(get_like))
            .route("/{id}", web::put().to(replace_like))
            .route("/{id}", web::patch().to(update_like))
            .route("/{id}", web::delete().to(delete_like)),
    );
}
