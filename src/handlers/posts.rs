/// Post endpoints, including the image sub-resource
use crate::error::Result;
use crate::handlers::Pagination;
use crate::models::{CreatePostImageRequest, CreatePostRequest, UpdatePostRequest};
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// POST /api/v1/post
pub async fn create_post(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.create_post(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(post))
}

/// GET /api/v1/post
pub async fn list_posts(
    pool: web::Data<PgPool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let (limit, offset) = query.bounds();
    let posts = service.list_posts(limit, offset).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/v1/post/{id}
pub async fn get_post(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/v1/post/{id}
pub async fn replace_post(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service
        .replace_post(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PATCH /api/v1/post/{id}
pub async fn update_post(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service
        .update_post(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/v1/post/{id}
pub async fn delete_post(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    service.delete_post(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/v1/post/{id}/images
pub async fn list_images(pool: web::Data<PgPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let images = service.list_images(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(images))
}

/// POST /api/v1/post/{id}/images
pub async fn add_image(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CreatePostImageRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let image = service.add_image(path.into_inner(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(image))
}

/// DELETE /api/v1/post/{id}/images/{image_id}
pub async fn remove_image(
    pool: web::Data<PgPool>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let (post_id, image_id) = path.into_inner();
    service.remove_image(post_id, image_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/post")
            .route("", web::post().to(create_post))
            .route("", web::get().to(list_posts))
            .route("/{id}", web::get().to(get_post))
            .route("/{id}", web::put().to(replace_post))
            .route("/{id}", web::patch().to(update_post))
            .route("/{id}", web::delete().to(delete_post))
            .route("/{id}/images", web::get().to(list_images))
            .route("/{id}/images", web::post().to(add_image))
            .route("/{id}/images/{image_id}", web::delete().to(remove_image)),
    );
}
