/// User account endpoints
use crate::config::Config;
use crate::error::Result;
use crate::handlers::Pagination;
use crate::models::{CreateUserRequest, ReplaceUserRequest, UpdateUserRequest};
use crate::services::UserService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

fn service(pool: &web::Data<PgPool>, config: &web::Data<Config>) -> UserService {
    UserService::new((***pool).clone(), config.password.clone())
}

/// POST /api/v1/user
pub async fn create_user(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    let user = service(&pool, &config).create_user(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// GET /api/v1/user
pub async fn list_users(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse> {
    let (limit, offset) = query.bounds();
    let users = service(&pool, &config).list_users(limit, offset).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/v1/user/{id}
pub async fn get_user(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let user = service(&pool, &config).get_user(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// PUT /api/v1/user/{id}
pub async fn replace_user(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<String>,
    req: web::Json<ReplaceUserRequest>,
) -> Result<HttpResponse> {
    let user = service(&pool, &config)
        .replace_user(&path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

/// PATCH /api/v1/user/{id}
pub async fn update_user(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<String>,
    req: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse> {
    let user = service(&pool, &config)
        .update_user(&path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /api/v1/user/{id}
pub async fn delete_user(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    service(&pool, &config)
        .delete_user(&path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/user")
            .route("", web::post().to(create_user))
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(replace_user))
            .route("/{id}", web::patch().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}
