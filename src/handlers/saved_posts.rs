/// Saved post endpoints
use crate::error::Result;
use crate::handlers::Pagination;
use crate::models::{CreateSavedPostRequest, UpdateSavedPostRequest};
use crate::services::SavedPostService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// POST /api/v1/savedPost
pub async fn create_saved_post(
    pool: web::Data<PgPool>,
    req: web::Json<CreateSavedPostRequest>,
) -> Result<HttpResponse> {
    let service = SavedPostService::new((**pool).clone());
    let saved = service.create_saved_post(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(saved))
}

/// GET /api/v1/savedPost
pub async fn list_saved_posts(
    pool: web::Data<PgPool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse> {
    let service = SavedPostService::new((**pool).clone());
    let (limit, offset) = query.bounds();
    let saved = service.list_saved_posts(limit, offset).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// GET /api/v1/savedPost/{id}
pub async fn get_saved_post(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = SavedPostService::new((**pool).clone());
    let saved = service.get_saved_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// PUT /api/v1/savedPost/{id}
pub async fn replace_saved_post(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CreateSavedPostRequest>,
) -> Result<HttpResponse> {
    let service = SavedPostService::new((**pool).clone());
    let saved = service
        .replace_saved_post(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// PATCH /api/v1/savedPost/{id}
pub async fn update_saved_post(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateSavedPostRequest>,
) -> Result<HttpResponse> {
    let service = SavedPostService::new((**pool).clone());
    let saved = service
        .update_saved_post(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/v1/savedPost/{id}
pub async fn delete_saved_post(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = SavedPostService::new((**pool).clone());
    service.delete_saved_post(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/savedPost")
            .route("", web::post().to(create_saved_post))
            .route("", web::get().to(list_saved_posts))
            .route("/{id}", web::get().to(get_saved_post))
            .route("/{id}", web::put().to(replace_saved_post))
            .route("/{id}", web::patch().to(update_saved_post))
            .route("/{id}", web::delete().to(delete_saved_post)),
    );
}
