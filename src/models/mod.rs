/// Data models for aperture-api
///
/// One module per entity: the database row struct, its wire DTOs, and
/// any enums the entity stores as text codes.
pub mod comment;
pub mod follower;
pub mod hashtag;
pub mod like;
pub mod message;
pub mod notification;
pub mod post;
pub mod saved_post;
pub mod story;
pub mod target;
pub mod user;

pub use comment::{Comment, CreateCommentRequest, UpdateCommentRequest};
pub use follower::{CreateFollowerRequest, Follower, UpdateFollowerRequest};
pub use hashtag::{CreateHashtagRequest, Hashtag, UpdateHashtagRequest};
pub use like::{CreateLikeRequest, Like, UpdateLikeRequest};
pub use message::{
    ActingUser, CreateMessageRequest, EditMessageRequest, Message, MessageResponse,
    UpdateMessageRequest, DELETED_MESSAGE_PLACEHOLDER,
};
pub use notification::{
    CreateNotificationRequest, Notification, NotificationKind, NotificationResponse,
    UpdateNotificationRequest,
};
pub use post::{
    CreatePostImageRequest, CreatePostRequest, Post, PostDetail, PostImage, UpdatePostRequest,
};
pub use saved_post::{CreateSavedPostRequest, SavedPost, UpdateSavedPostRequest};
pub use story::{CreateStoryRequest, Story, UpdateStoryRequest, STORY_TTL_HOURS};
pub use target::TargetKind;
pub use user::{
    CreateUserRequest, Gender, ReplaceUserRequest, UpdateUserRequest, User, DEFAULT_PROFILE_PIC,
};
