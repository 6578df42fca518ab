/// Follower endpoints
use crate::error::Result;
use crate::handlers::Pagination;
use crate::models::{CreateFollowerRequest, UpdateFollowerRequest};
use crate::services::FollowerService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// POST /api/v1/followers
pub async fn create_follower(
    pool: web::Data<PgPool>,
    req: web::Json<CreateFollowerRequest>,
) -> Result<HttpResponse> {
    let service = FollowerService::new((**pool).clone());
    let follower = service.create_follower(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(follower))
}

/// GET /api/v1/followers
pub async fn list_followers(
    pool: web::Data<PgPool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse> {
    let service = FollowerService::new((**pool).clone());
    let (limit, offset) = query.bounds();
    let followers = service.list_followers(limit, offset).await?;
    Ok(HttpResponse::Ok().json(followers))
}

/// GET /api/v1/followers/{id}
pub async fn get_follower(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = FollowerService::new((**pool).clone());
    let follower = service.get_follower(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(follower))
}

/// PUT /api/v1/followers/{id}
pub async fn replace_follower(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CreateFollowerRequest>,
) -> Result<HttpResponse> {
    let service = FollowerService::new((**pool).clone());
    let follower = service
        .replace_follower(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(follower))
}

/// PATCH /api/v1/followers/{id}
pub async fn update_follower(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateFollowerRequest>,
) -> Result<HttpResponse> {
    let service = FollowerService::new((**pool).clone());
    let follower = service
        .update_follower(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(follower))
}

/// DELETE /api/v1/followers/{id}
pub async fn delete_follower(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = FollowerService::new((**pool).clone());
    service.delete_follower(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/followers")
            .route("", web::post().to(create_follower))
            .route("", web::get().to(list_followers))
            .route("/{id}", web::get().to(get_follower))
            .route("/{id}", web::put().to(replace_follower))
            .route("/{id}", web::patch().to(update_follower))
            .route("/{id}", web::delete().to(delete_follower)),
    );
}
