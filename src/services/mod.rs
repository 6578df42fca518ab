pub mod comments;
pub mod followers;
pub mod hashtags;
pub mod likes;
pub mod messages;
pub mod notifications;
pub mod posts;
pub mod saved_posts;
pub mod stories;
pub mod users;

pub use comments::CommentService;
pub use followers::FollowerService;
pub use hashtags::HashtagService;
pub use likes::LikeService;
pub use messages::MessageService;
pub use notifications::NotificationService;
pub use posts::PostService;
pub use saved_posts::SavedPostService;
pub use stories::StoryService;
pub use users::UserService;
