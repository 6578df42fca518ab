//! Database-backed service tests
//!
//! Run with a disposable PostgreSQL instance:
//! `DATABASE_URL=postgres://... cargo test -- --ignored`
//!
//! Coverage:
//! - User lifecycle: policy-checked creation, hashing, patch vs replace,
//!   cascade behaviour on account deletion
//! - Post detail assembly and the cascade asymmetry between owned rows
//!   (images, saves) and generic engagement rows (likes, comments, tags)
//! - Duplicate-write conflicts on likes, saves, and follow edges
//! - Story expiry stamping
//! - Notification and message read-state actions, message edit and both
//!   deletion flavours
//!
//! Fixtures are keyed by random handles so tests do not collide; each test
//! cleans up by deleting its users, which cascades to everything they own.

use aperture_api::config::PasswordPolicy;
use aperture_api::db::{self, comment_repo, hashtag_repo, like_repo, post_repo, user_repo};
use aperture_api::models::{
    CreateCommentRequest, CreateFollowerRequest, CreateHashtagRequest, CreateLikeRequest,
    CreateMessageRequest, CreateNotificationRequest, CreatePostRequest, CreateSavedPostRequest,
    CreateStoryRequest, CreateUserRequest, EditMessageRequest, NotificationKind, TargetKind,
    UpdateUserRequest, DELETED_MESSAGE_PLACEHOLDER,
};
use aperture_api::services::{
    CommentService, FollowerService, HashtagService, LikeService, MessageService,
    NotificationService, PostService, SavedPostService, StoryService, UserService,
};
use aperture_api::AppError;
use sqlx::PgPool;
use uuid::Uuid;

const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$RdescudvJCsgt3ubTmaaJObG";

async fn bootstrap_pool() -> PgPool {
    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL env var required for tests");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await
        .expect("failed to connect to DATABASE_URL");

    db::run_migrations(&pool).await.expect("run migrations");
    pool
}

/// Random handle in the allowed charset (lowercase letters only).
fn test_handle() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(12)
        .map(|c| {
            let v = c.to_digit(16).unwrap_or(0) as u8;
            (b'a' + v) as char
        })
        .collect()
}

/// Insert a user row directly, skipping the hashing cost.
async fn seed_user(pool: &PgPool) -> String {
    let handle = test_handle();
    let email = format!("{handle}@example.com");
    user_repo::create_user(
        pool,
        &handle,
        "Test User",
        DUMMY_HASH,
        &email,
        None,
        "P",
        "profile_pics/profile.png",
    )
    .await
    .expect("seed user");
    handle
}

async fn cleanup_users(pool: &PgPool, handles: &[&str]) {
    for handle in handles {
        let _ = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(handle)
            .execute(pool)
            .await;
    }
}

fn create_user_request(handle: &str) -> CreateUserRequest {
    CreateUserRequest {
        id: handle.to_string(),
        username: "Jane Doe".to_string(),
        password: "passw0rd".to_string(),
        email: format!("{handle}@example.com"),
        bio: None,
        gender: None,
        profile_pic: None,
    }
}

// ========== User tests ==========

#[tokio::test]
#[ignore]
async fn test_create_user_applies_defaults_and_hashes_password() {
    let pool = bootstrap_pool().await;
    let service = UserService::new(pool.clone(), PasswordPolicy::default());
    let handle = test_handle();

    let user = service
        .create_user(create_user_request(&handle))
        .await
        .expect("create user");

    assert_eq!(user.id, handle);
    assert_eq!(user.gender, "P");
    assert_eq!(user.profile_pic, "profile_pics/profile.png");
    assert!(user.bio.is_none());
    assert_ne!(user.password_hash, "passw0rd");
    assert!(user.password_hash.starts_with("$argon2"));

    let fetched = service.get_user(&handle).await.expect("get user");
    assert_eq!(fetched.email, format!("{handle}@example.com"));

    cleanup_users(&pool, &[&handle]).await;
}

#[tokio::test]
#[ignore]
async fn test_create_user_rejects_invalid_handle() {
    let pool = bootstrap_pool().await;
    let service = UserService::new(pool.clone(), PasswordPolicy::default());

    for bad in ["Jane.Doe", "jane6doe", "jane doe", "janedoejanedoejane"] {
        let err = service
            .create_user(create_user_request(bad))
            .await
            .expect_err("handle should be rejected");
        assert!(
            matches!(err, AppError::Validation(_)),
            "expected validation error for {bad:?}, got {err:?}"
        );
    }
}

#[tokio::test]
#[ignore]
async fn test_create_user_rejects_weak_password() {
    let pool = bootstrap_pool().await;
    let service = UserService::new(pool.clone(), PasswordPolicy::default());
    let handle = test_handle();

    for weak in ["sh0rt", "passwords", "12345678"] {
        let mut req = create_user_request(&handle);
        req.password = weak.to_string();
        let err = service
            .create_user(req)
            .await
            .expect_err("password should be rejected");
        assert!(matches!(err, AppError::Validation(_)));
    }
}

#[tokio::test]
#[ignore]
async fn test_duplicate_email_conflicts() {
    let pool = bootstrap_pool().await;
    let service = UserService::new(pool.clone(), PasswordPolicy::default());
    let first = test_handle();
    let second = test_handle();

    service
        .create_user(create_user_request(&first))
        .await
        .expect("create first user");

    let mut req = create_user_request(&second);
    req.email = format!("{first}@example.com");
    let err = service
        .create_user(req)
        .await
        .expect_err("duplicate email should conflict");
    assert!(matches!(err, AppError::Conflict(_)));

    cleanup_users(&pool, &[&first]).await;
}

#[tokio::test]
#[ignore]
async fn test_patch_without_password_keeps_stored_hash() {
    let pool = bootstrap_pool().await;
    let service = UserService::new(pool.clone(), PasswordPolicy::default());
    let handle = test_handle();

    let created = service
        .create_user(create_user_request(&handle))
        .await
        .expect("create user");

    let patched = service
        .update_user(
            &handle,
            UpdateUserRequest {
                username: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("patch user");

    assert_eq!(patched.username, "Renamed");
    assert_eq!(patched.password_hash, created.password_hash);

    let repatched = service
        .update_user(
            &handle,
            UpdateUserRequest {
                password: Some("newpassw0rd".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("patch password");
    assert_ne!(repatched.password_hash, created.password_hash);

    cleanup_users(&pool, &[&handle]).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_user_cascades_owned_rows() {
    let pool = bootstrap_pool().await;
    let users = UserService::new(pool.clone(), PasswordPolicy::default());
    let posts = PostService::new(pool.clone());
    let stories = StoryService::new(pool.clone());
    let notifications = NotificationService::new(pool.clone());
    let handle = seed_user(&pool).await;

    let post = posts
        .create_post(CreatePostRequest {
            user_id: handle.clone(),
            caption: "soon gone".to_string(),
            images: None,
        })
        .await
        .expect("create post");
    let story = stories
        .create_story(CreateStoryRequest {
            user_id: handle.clone(),
            image: "images/story_pics/a.jpg".to_string(),
        })
        .await
        .expect("create story");
    let notification = notifications
        .create_notification(CreateNotificationRequest {
            user_id: handle.clone(),
            message: "hello".to_string(),
            kind: None,
            is_read: None,
        })
        .await
        .expect("create notification");

    users.delete_user(&handle).await.expect("delete user");

    assert!(matches!(
        posts.get_post(post.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        stories.get_story(story.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        notifications.get_notification(notification.id).await,
        Err(AppError::NotFound(_))
    ));
}

// ========== Post tests ==========

#[tokio::test]
#[ignore]
async fn test_create_post_with_images() {
    let pool = bootstrap_pool().await;
    let posts = PostService::new(pool.clone());
    let handle = seed_user(&pool).await;

    let detail = posts
        .create_post(CreatePostRequest {
            user_id: handle.clone(),
            caption: "two frames".to_string(),
            images: Some(vec![
                "images/post_pics/a.jpg".to_string(),
                "images/post_pics/b.jpg".to_string(),
            ]),
        })
        .await
        .expect("create post");

    assert_eq!(detail.likes_count, 0);
    assert_eq!(detail.comments_count, 0);
    assert_eq!(detail.views, 0);
    assert!(detail.hashtags.is_empty());

    let images = posts.list_images(detail.id).await.expect("list images");
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].image, "images/post_pics/a.jpg");

    cleanup_users(&pool, &[&handle]).await;
}

#[tokio::test]
#[ignore]
async fn test_post_detail_reflects_engagement() {
    let pool = bootstrap_pool().await;
    let posts = PostService::new(pool.clone());
    let likes = LikeService::new(pool.clone());
    let comments = CommentService::new(pool.clone());
    let hashtags = HashtagService::new(pool.clone());
    let author = seed_user(&pool).await;
    let fan = seed_user(&pool).await;

    let post = posts
        .create_post(CreatePostRequest {
            user_id: author.clone(),
            caption: "sunset".to_string(),
            images: None,
        })
        .await
        .expect("create post");

    likes
        .create_like(CreateLikeRequest {
            user_id: fan.clone(),
            target_kind: TargetKind::Post,
            target_id: post.id,
        })
        .await
        .expect("like post");
    for text in ["wow", "stunning"] {
        comments
            .create_comment(CreateCommentRequest {
                user_id: fan.clone(),
                target_kind: TargetKind::Post,
                target_id: post.id,
                text: text.to_string(),
                parent_id: None,
            })
            .await
            .expect("comment on post");
    }
    hashtags
        .create_hashtag(CreateHashtagRequest {
            tag: "sunset".to_string(),
            target_kind: TargetKind::Post,
            target_id: post.id,
        })
        .await
        .expect("tag post");

    let detail = posts.get_post(post.id).await.expect("get post");
    assert_eq!(detail.likes_count, 1);
    assert_eq!(detail.comments_count, 2);
    assert_eq!(detail.hashtags, vec!["sunset".to_string()]);
    assert_eq!(detail.views, 0);

    cleanup_users(&pool, &[&author, &fan]).await;
}

#[tokio::test]
#[ignore]
async fn test_post_delete_cascades_owned_rows_but_not_engagement() {
    let pool = bootstrap_pool().await;
    let posts = PostService::new(pool.clone());
    let likes = LikeService::new(pool.clone());
    let comments = CommentService::new(pool.clone());
    let hashtags = HashtagService::new(pool.clone());
    let saves = SavedPostService::new(pool.clone());
    let author = seed_user(&pool).await;
    let fan = seed_user(&pool).await;

    let post = posts
        .create_post(CreatePostRequest {
            user_id: author.clone(),
            caption: "short lived".to_string(),
            images: Some(vec!["images/post_pics/x.jpg".to_string()]),
        })
        .await
        .expect("create post");

    let like = likes
        .create_like(CreateLikeRequest {
            user_id: fan.clone(),
            target_kind: TargetKind::Post,
            target_id: post.id,
        })
        .await
        .expect("like");
    let comment = comments
        .create_comment(CreateCommentRequest {
            user_id: fan.clone(),
            target_kind: TargetKind::Post,
            target_id: post.id,
            text: "nice".to_string(),
            parent_id: None,
        })
        .await
        .expect("comment");
    let hashtag = hashtags
        .create_hashtag(CreateHashtagRequest {
            tag: "gone".to_string(),
            target_kind: TargetKind::Post,
            target_id: post.id,
        })
        .await
        .expect("hashtag");
    let saved = saves
        .create_saved_post(CreateSavedPostRequest {
            post_id: post.id,
            user_id: fan.clone(),
        })
        .await
        .expect("save");

    posts.delete_post(post.id).await.expect("delete post");

    // Owned rows follow the post out.
    let images = post_repo::list_post_images(&pool, post.id)
        .await
        .expect("query images");
    assert!(images.is_empty());
    assert!(matches!(
        saves.get_saved_post(saved.id).await,
        Err(AppError::NotFound(_))
    ));

    // Generic engagement rows dangle.
    assert!(like_repo::find_like_by_id(&pool, like.id)
        .await
        .expect("query like")
        .is_some());
    assert!(comment_repo::find_comment_by_id(&pool, comment.id)
        .await
        .expect("query comment")
        .is_some());
    assert!(hashtag_repo::find_hashtag_by_id(&pool, hashtag.id)
        .await
        .expect("query hashtag")
        .is_some());

    cleanup_users(&pool, &[&author, &fan]).await;
}

#[tokio::test]
#[ignore]
async fn test_caption_over_limit_rejected() {
    let pool = bootstrap_pool().await;
    let posts = PostService::new(pool.clone());
    let handle = seed_user(&pool).await;

    let err = posts
        .create_post(CreatePostRequest {
            user_id: handle.clone(),
            caption: "x".repeat(101),
            images: None,
        })
        .await
        .expect_err("long caption should be rejected");
    assert!(matches!(err, AppError::Validation(_)));

    cleanup_users(&pool, &[&handle]).await;
}

// ========== Like tests ==========

#[tokio::test]
#[ignore]
async fn test_duplicate_like_conflicts() {
    let pool = bootstrap_pool().await;
    let posts = PostService::new(pool.clone());
    let likes = LikeService::new(pool.clone());
    let handle = seed_user(&pool).await;

    let post = posts
        .create_post(CreatePostRequest {
            user_id: handle.clone(),
            caption: "like me once".to_string(),
            images: None,
        })
        .await
        .expect("create post");

    let req = || CreateLikeRequest {
        user_id: handle.clone(),
        target_kind: TargetKind::Post,
        target_id: post.id,
    };
    likes.create_like(req()).await.expect("first like");
    let err = likes
        .create_like(req())
        .await
        .expect_err("second like should conflict");
    assert!(matches!(err, AppError::Conflict(_)));

    cleanup_users(&pool, &[&handle]).await;
}

#[tokio::test]
#[ignore]
async fn test_like_on_missing_target_rejected() {
    let pool = bootstrap_pool().await;
    let likes = LikeService::new(pool.clone());
    let handle = seed_user(&pool).await;

    let err = likes
        .create_like(CreateLikeRequest {
            user_id: handle.clone(),
            target_kind: TargetKind::Story,
            target_id: i64::MAX,
        })
        .await
        .expect_err("missing target should be rejected");
    assert!(matches!(err, AppError::Reference(_)));

    cleanup_users(&pool, &[&handle]).await;
}

// ========== Comment tests ==========

#[tokio::test]
#[ignore]
async fn test_deleting_comment_removes_replies() {
    let pool = bootstrap_pool().await;
    let posts = PostService::new(pool.clone());
    let comments = CommentService::new(pool.clone());
    let handle = seed_user(&pool).await;

    let post = posts
        .create_post(CreatePostRequest {
            user_id: handle.clone(),
            caption: "thread root".to_string(),
            images: None,
        })
        .await
        .expect("create post");

    let parent = comments
        .create_comment(CreateCommentRequest {
            user_id: handle.clone(),
            target_kind: TargetKind::Post,
            target_id: post.id,
            text: "parent".to_string(),
            parent_id: None,
        })
        .await
        .expect("create parent");
    let reply = comments
        .create_comment(CreateCommentRequest {
            user_id: handle.clone(),
            target_kind: TargetKind::Post,
            target_id: post.id,
            text: "reply".to_string(),
            parent_id: Some(parent.id),
        })
        .await
        .expect("create reply");

    comments
        .delete_comment(parent.id)
        .await
        .expect("delete parent");

    assert!(matches!(
        comments.get_comment(reply.id).await,
        Err(AppError::NotFound(_))
    ));

    cleanup_users(&pool, &[&handle]).await;
}

#[tokio::test]
#[ignore]
async fn test_comments_attach_to_comments_and_stories() {
    let pool = bootstrap_pool().await;
    let posts = PostService::new(pool.clone());
    let stories = StoryService::new(pool.clone());
    let comments = CommentService::new(pool.clone());
    let handle = seed_user(&pool).await;

    let post = posts
        .create_post(CreatePostRequest {
            user_id: handle.clone(),
            caption: "base".to_string(),
            images: None,
        })
        .await
        .expect("create post");
    let story = stories
        .create_story(CreateStoryRequest {
            user_id: handle.clone(),
            image: "images/story_pics/b.jpg".to_string(),
        })
        .await
        .expect("create story");

    let on_post = comments
        .create_comment(CreateCommentRequest {
            user_id: handle.clone(),
            target_kind: TargetKind::Post,
            target_id: post.id,
            text: "on post".to_string(),
            parent_id: None,
        })
        .await
        .expect("comment on post");

    let on_comment = comments
        .create_comment(CreateCommentRequest {
            user_id: handle.clone(),
            target_kind: TargetKind::Comment,
            target_id: on_post.id,
            text: "on comment".to_string(),
            parent_id: None,
        })
        .await
        .expect("comment on comment");
    assert_eq!(on_comment.target_kind, "comment");

    let on_story = comments
        .create_comment(CreateCommentRequest {
            user_id: handle.clone(),
            target_kind: TargetKind::Story,
            target_id: story.id,
            text: "on story".to_string(),
            parent_id: None,
        })
        .await
        .expect("comment on story");
    assert_eq!(on_story.target_kind, "story");

    cleanup_users(&pool, &[&handle]).await;
}

// ========== Saved post and follower tests ==========

#[tokio::test]
#[ignore]
async fn test_duplicate_save_conflicts() {
    let pool = bootstrap_pool().await;
    let posts = PostService::new(pool.clone());
    let saves = SavedPostService::new(pool.clone());
    let handle = seed_user(&pool).await;

    let post = posts
        .create_post(CreatePostRequest {
            user_id: handle.clone(),
            caption: "bookmark".to_string(),
            images: None,
        })
        .await
        .expect("create post");

    saves
        .create_saved_post(CreateSavedPostRequest {
            post_id: post.id,
            user_id: handle.clone(),
        })
        .await
        .expect("first save");
    let err = saves
        .create_saved_post(CreateSavedPostRequest {
            post_id: post.id,
            user_id: handle.clone(),
        })
        .await
        .expect_err("second save should conflict");
    assert!(matches!(err, AppError::Conflict(_)));

    cleanup_users(&pool, &[&handle]).await;
}

#[tokio::test]
#[ignore]
async fn test_follow_edge_unique_per_direction() {
    let pool = bootstrap_pool().await;
    let follows = FollowerService::new(pool.clone());
    let alice = seed_user(&pool).await;
    let bob = seed_user(&pool).await;

    follows
        .create_follower(CreateFollowerRequest {
            follower_id: alice.clone(),
            following_id: bob.clone(),
        })
        .await
        .expect("follow");
    let err = follows
        .create_follower(CreateFollowerRequest {
            follower_id: alice.clone(),
            following_id: bob.clone(),
        })
        .await
        .expect_err("duplicate follow should conflict");
    assert!(matches!(err, AppError::Conflict(_)));

    // The reverse direction is a distinct edge.
    follows
        .create_follower(CreateFollowerRequest {
            follower_id: bob.clone(),
            following_id: alice.clone(),
        })
        .await
        .expect("follow back");

    cleanup_users(&pool, &[&alice, &bob]).await;
}

#[tokio::test]
#[ignore]
async fn test_save_requires_existing_post() {
    let pool = bootstrap_pool().await;
    let saves = SavedPostService::new(pool.clone());
    let handle = seed_user(&pool).await;

    let err = saves
        .create_saved_post(CreateSavedPostRequest {
            post_id: i64::MAX,
            user_id: handle.clone(),
        })
        .await
        .expect_err("saving a missing post should fail");
    assert!(matches!(err, AppError::Reference(_)));

    cleanup_users(&pool, &[&handle]).await;
}

// ========== Story tests ==========

#[tokio::test]
#[ignore]
async fn test_story_expiry_is_creation_plus_24h() {
    let pool = bootstrap_pool().await;
    let stories = StoryService::new(pool.clone());
    let handle = seed_user(&pool).await;

    let story = stories
        .create_story(CreateStoryRequest {
            user_id: handle.clone(),
            image: "images/story_pics/c.jpg".to_string(),
        })
        .await
        .expect("create story");

    let window = story.expires_at - story.created_at;
    assert_eq!(window.num_seconds(), 24 * 3600);

    // Replacing the image must not restart the clock.
    let replaced = stories
        .replace_story(
            story.id,
            CreateStoryRequest {
                user_id: handle.clone(),
                image: "images/story_pics/d.jpg".to_string(),
            },
        )
        .await
        .expect("replace story");
    assert_eq!(replaced.expires_at, story.expires_at);
    assert_eq!(replaced.image, "images/story_pics/d.jpg");

    cleanup_users(&pool, &[&handle]).await;
}

// ========== Notification tests ==========

#[tokio::test]
#[ignore]
async fn test_notification_defaults_and_mark_read_idempotent() {
    let pool = bootstrap_pool().await;
    let notifications = NotificationService::new(pool.clone());
    let handle = seed_user(&pool).await;

    let created = notifications
        .create_notification(CreateNotificationRequest {
            user_id: handle.clone(),
            message: "welcome aboard".to_string(),
            kind: None,
            is_read: None,
        })
        .await
        .expect("create notification");

    assert_eq!(created.kind, NotificationKind::Info.as_str());
    assert!(!created.is_read);
    assert!(created.is_recent);

    let read = notifications
        .mark_read(created.id)
        .await
        .expect("mark read");
    assert!(read.is_read);

    let read_again = notifications
        .mark_read(created.id)
        .await
        .expect("mark read again");
    assert!(read_again.is_read);

    cleanup_users(&pool, &[&handle]).await;
}

// ========== Message tests ==========

fn message_between(sender: &str, recipient: &str, content: &str) -> CreateMessageRequest {
    CreateMessageRequest {
        sender_id: sender.to_string(),
        recipient_id: recipient.to_string(),
        subject: "hello".to_string(),
        content: content.to_string(),
        is_read: None,
        is_draft: None,
        scheduled_for: None,
        reply_to_id: None,
        forwarded_from_id: None,
    }
}

#[tokio::test]
#[ignore]
async fn test_message_read_state_actions() {
    let pool = bootstrap_pool().await;
    let messages = MessageService::new(pool.clone());
    let alice = seed_user(&pool).await;
    let bob = seed_user(&pool).await;

    let sent = messages
        .create_message(message_between(&alice, &bob, "first"))
        .await
        .expect("send message");
    assert!(!sent.is_read);
    assert!(sent.read_at.is_none());
    assert!(sent.seconds_since_sent >= 0);

    let read = messages.mark_read(sent.id).await.expect("mark read");
    assert!(read.is_read);
    let first_read_at = read.read_at.expect("read_at set");

    let read_again = messages.mark_read(sent.id).await.expect("mark read again");
    assert_eq!(read_again.read_at, Some(first_read_at));

    let unread = messages.mark_unread(sent.id).await.expect("mark unread");
    assert!(!unread.is_read);
    assert!(unread.read_at.is_none());

    cleanup_users(&pool, &[&alice, &bob]).await;
}

#[tokio::test]
#[ignore]
async fn test_message_edit_stamps_metadata() {
    let pool = bootstrap_pool().await;
    let messages = MessageService::new(pool.clone());
    let alice = seed_user(&pool).await;
    let bob = seed_user(&pool).await;

    let sent = messages
        .create_message(message_between(&alice, &bob, "draft wording"))
        .await
        .expect("send message");
    assert!(!sent.is_edited);

    let edited = messages
        .edit_message(
            sent.id,
            EditMessageRequest {
                content: "final wording".to_string(),
            },
        )
        .await
        .expect("edit message");
    assert_eq!(edited.content, "final wording");
    assert!(edited.is_edited);
    assert!(edited.edited_at.is_some());

    cleanup_users(&pool, &[&alice, &bob]).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_for_everyone_blanks_content_keeps_row() {
    let pool = bootstrap_pool().await;
    let messages = MessageService::new(pool.clone());
    let alice = seed_user(&pool).await;
    let bob = seed_user(&pool).await;

    let sent = messages
        .create_message(message_between(&alice, &bob, "regrettable"))
        .await
        .expect("send message");

    let deleted = messages
        .delete_for_everyone(sent.id)
        .await
        .expect("delete for everyone");
    assert_eq!(deleted.content, DELETED_MESSAGE_PLACEHOLDER);
    assert!(deleted.deleted_for_everyone);

    // Still fetchable for every viewer.
    let fetched = messages.get_message(sent.id).await.expect("get message");
    assert_eq!(fetched.content, DELETED_MESSAGE_PLACEHOLDER);

    cleanup_users(&pool, &[&alice, &bob]).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_for_me_hides_from_one_listing_only() {
    let pool = bootstrap_pool().await;
    let messages = MessageService::new(pool.clone());
    let alice = seed_user(&pool).await;
    let bob = seed_user(&pool).await;

    let sent = messages
        .create_message(message_between(&alice, &bob, "now you see me"))
        .await
        .expect("send message");

    messages
        .delete_for_me(sent.id, &alice)
        .await
        .expect("delete for me");
    // Idempotent on repeat.
    messages
        .delete_for_me(sent.id, &alice)
        .await
        .expect("delete for me again");

    let alice_view = messages
        .list_messages(Some(&alice), 50, 0)
        .await
        .expect("alice listing");
    assert!(alice_view.iter().all(|m| m.id != sent.id));

    let bob_view = messages
        .list_messages(Some(&bob), 50, 0)
        .await
        .expect("bob listing");
    assert!(bob_view.iter().any(|m| m.id == sent.id));

    cleanup_users(&pool, &[&alice, &bob]).await;
}

#[tokio::test]
#[ignore]
async fn test_message_listing_filters_by_user() {
    let pool = bootstrap_pool().await;
    let messages = MessageService::new(pool.clone());
    let alice = seed_user(&pool).await;
    let bob = seed_user(&pool).await;
    let carol = seed_user(&pool).await;

    let ab = messages
        .create_message(message_between(&alice, &bob, "a to b"))
        .await
        .expect("send a->b");
    let bc = messages
        .create_message(message_between(&bob, &carol, "b to c"))
        .await
        .expect("send b->c");

    let alice_view = messages
        .list_messages(Some(&alice), 50, 0)
        .await
        .expect("alice listing");
    assert!(alice_view.iter().any(|m| m.id == ab.id));
    assert!(alice_view.iter().all(|m| m.id != bc.id));

    let bob_view = messages
        .list_messages(Some(&bob), 50, 0)
        .await
        .expect("bob listing");
    assert!(bob_view.iter().any(|m| m.id == ab.id));
    assert!(bob_view.iter().any(|m| m.id == bc.id));

    cleanup_users(&pool, &[&alice, &bob, &carol]).await;
}
