/// Story endpoints
use crate::error::Result;
use crate::handlers::Pagination;
use crate::models::{CreateStoryRequest, UpdateStoryRequest};
use crate::services::StoryService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// POST /api/v1/story
pub async fn create_story(
    pool: web::Data<PgPool>,
    req: web::Json<CreateStoryRequest>,
) -> Result<HttpResponse> {
    let service = StoryService::new((**pool).clone());
    let story = service.create_story(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(story))
}

/// GET /api/v1/story
pub async fn list_stories(
    pool: web::Data<PgPool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse> {
    let service = StoryService::new((**pool).clone());
    let (limit, offset) = query.bounds();
    let stories = service.list_stories(limit, offset).await?;
    Ok(HttpResponse::Ok().json(stories))
}

/// GET /api/v1/story/{id}
pub async fn get_story(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = StoryService::new((**pool).clone());
    let story = service.get_story(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(story))
}

/// PUT /api/v1/story/{id}
pub async fn replace_story(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CreateStoryRequest>,
) -> Result<HttpResponse> {
    let service = StoryService::new((**pool).clone());
    let story = service
        .replace_story(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(story))
}

/// PATCH /api/v1/story/{id}
pub async fn update_story(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdateStoryRequest>,
) -> Result<HttpResponse> {
    let service = StoryService::new((**pool).clone());
    let story = service
        .update_story(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(story))
}

/// DELETE /api/v1/story/{id}
pub async fn delete_story(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = StoryService::new((**pool).clone());
    service.delete_story(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/story")
            .route("", web::post().to(create_story))
            .route("", web::get().to(list_stories))
            .route("/{id}", web::get().to(get_story))
            .route("/{id}", web::put().to(replace_story))
            .route("/{id}", web::patch().to(update_story))
            .route("/{id}", web::delete().to(delete_story)),
    );
}
