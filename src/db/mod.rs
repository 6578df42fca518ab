/// Database access layer
///
/// Pool construction, embedded migrations, and one repository module per
/// entity. Repository functions are free async functions over `&PgPool`
/// returning `sqlx::Error`; mapping onto API errors happens above.
pub mod comment_repo;
pub mod follower_repo;
pub mod hashtag_repo;
pub mod like_repo;
pub mod message_repo;
pub mod notification_repo;
pub mod post_repo;
pub mod saved_post_repo;
pub mod story_repo;
pub mod target_repo;
pub mod user_repo;

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    min_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(min_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
