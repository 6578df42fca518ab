/// Hashtag endpoints
use crate::error::Result;
use crate::handlers::Pagination;
use crate::models::{CreateHashtagRequest, UpdateHashtagRequest};
use crate::services::HashtagService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// POST /api/v1/hashtags
pub async fn create_hashtag(
    pool: web::Data<PgPool>,
    req: web::Json<CreateHashtagRequest>,
) -> Result<HttpResponse> {
    let service = HashtagService::new((**pool).clone());
    let hashtag = service.create_hashtag(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(hashtag))
}

/// GET /api/v1/hashtags
pub async fn list_hashtags(
    pool: web::Data<PgPool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse> {
    let service = HashtagService::new((**pool).clone());
    let (limit, offset) = query.bounds();
    let hashtags = service.list_hashtags(limit, offset).await?;
    Ok(HttpResponse::Ok().json(hashtags))
}

/// GET /api/v1/hashtags/{id}
pub async fn get_hashtag(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = HashtagService::new((**pool).clone());
    let hashtag = service.get_hashtag(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(hashtag))
}

/// PUT /api/v1/hashtags/{id}
pub async fn replace_hashtag(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CreateHashtagRequest>,
) -> Result<HttpResponse> {
    let service = HashtagService::new((**pool).clone());
    let hashtag = service
        .replace_hashtag(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(hashtag))
}

/// PATCH /api/v1/hashtags/{id}
pub async fn update_hashtag(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateHashtagRequest>,
) -> Result<HttpResponse> {
    let service = HashtagService::new((**pool).clone());
    let hashtag = service
        .update_hashtag(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(hashtag))
}

/// DELETE /api/v1/hashtags/{id}
pub async fn delete_hashtag(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = HashtagService::new((**pool).clone());
    service.delete_hashtag(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/hashtags")
            .route("", web::post().to(create_hashtag))
            .route("", web::get().to(list_hashtags))
            .route("/{id}", web::get().to(get_hashtag))
            .route("/{id}", web::put().to(replace_hashtag))
            .route("/{id}", web::patch().to(update_hashtag))
            .route("/{id}", web::delete().to(delete_hashtag)),
    );
}
