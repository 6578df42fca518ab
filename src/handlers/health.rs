/// Health endpoints: a database-touching readiness probe and a liveness
/// probe that answers as long as the process does.
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde_json::json;
use sqlx::PgPool;

pub async fn health(pool: web::Data<PgPool>) -> ActixResult<HttpResponse> {
    match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
        Ok(_) => Ok(HttpResponse::Ok().json(json!({
            "status": "healthy",
            "database": "up",
        }))),
        Err(e) => {
            tracing::error!(error = %e, "health check failed to reach database");
            Ok(HttpResponse::ServiceUnavailable().json(json!({
                "status": "unhealthy",
                "database": "down",
            })))
        }
    }
}

pub async fn live() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "status": "alive" })))
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/health")
            .route("", web::get().to(health))
            .route("/live", web::get().to(live)),
    );
}
