/// Aperture API Library
///
/// A social backend in one binary: accounts, posts and their images,
/// hashtags, likes, comments, saved posts, follower edges, stories,
/// notifications, and direct messages over PostgreSQL.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: Entities, request bodies, and response shapes
/// - `services`: Business logic layer
/// - `db`: Connection pool, migrations, and repositories
/// - `validators`: Handle and password checks
/// - `security`: Password hashing
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod security;
pub mod services;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
