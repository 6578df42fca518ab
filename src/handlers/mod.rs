pub mod comments;
pub mod followers;
pub mod hashtags;
pub mod health;
pub mod likes;
pub mod messages;
pub mod notifications;
pub mod posts;
pub mod saved_posts;
pub mod stories;
pub mod users;

use actix_web::web;
use serde::Deserialize;

/// Listing query parameters shared by every collection endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp raw query values into a sane (limit, offset) pair.
pub fn page_bounds(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = offset.unwrap_or(0).max(0);
    (limit, offset)
}

impl Pagination {
    pub fn bounds(&self) -> (i64, i64) {
        page_bounds(self.limit, self.offset)
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    health::register_routes(cfg);
    users::register_routes(cfg);
    posts::register_routes(cfg);
    hashtags::register_routes(cfg);
    likes::register_routes(cfg);
    comments::register_routes(cfg);
    saved_posts::register_routes(cfg);
    followers::register_routes(cfg);
    stories::register_routes(cfg);
    notifications::register_routes(cfg);
    messages::register_routes(cfg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bounds_defaults() {
        assert_eq!(page_bounds(None, None), (DEFAULT_PAGE_SIZE, 0));
    }

    #[test]
    fn test_page_bounds_clamped() {
        assert_eq!(page_bounds(Some(10_000), Some(-5)), (MAX_PAGE_SIZE, 0));
        assert_eq!(page_bounds(Some(0), None), (1, 0));
        assert_eq!(page_bounds(Some(25), Some(50)), (25, 50));
    }
}
