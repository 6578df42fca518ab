/// User service - account creation, profile reads and updates
use crate::config::PasswordPolicy;
use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::models::{
    CreateUserRequest, ReplaceUserRequest, UpdateUserRequest, User, DEFAULT_PROFILE_PIC,
};
use crate::security;
use crate::validators;
use sqlx::PgPool;
use validator::Validate;

pub struct UserService {
    pool: PgPool,
    policy: PasswordPolicy,
}

impl UserService {
    pub fn new(pool: PgPool, policy: PasswordPolicy) -> Self {
        Self { pool, policy }
    }

    /// Create a user. The handle doubles as the primary key; the raw
    /// password is checked against the configured policy and only its
    /// Argon2 hash is stored.
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        req.validate()?;
        validators::validate_password(&req.password, &self.policy).map_err(AppError::Validation)?;

        let password_hash = security::hash_password(&req.password)?;
        let gender = req.gender.unwrap_or_default();
        let profile_pic = req.profile_pic.as_deref().unwrap_or(DEFAULT_PROFILE_PIC);

        let user = user_repo::create_user(
            &self.pool,
            &req.id,
            &req.username,
            &password_hash,
            &req.email,
            req.bio.as_deref(),
            gender.as_str(),
            profile_pic,
        )
        .await?;

        Ok(user)
    }

    pub async fn get_user(&self, id: &str) -> Result<User> {
        user_repo::find_user_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {id} not found")))
    }

    pub async fn list_users(&self, limit: i64, offset: i64) -> Result<Vec<User>> {
        let users = user_repo::list_users(&self.pool, limit, offset).await?;
        Ok(users)
    }

    /// Full replacement. The handle is immutable; a password in the body
    /// re-hashes, an absent one keeps the stored hash.
    pub async fn replace_user(&self, id: &str, req: ReplaceUserRequest) -> Result<User> {
        req.validate()?;

        let existing = self.get_user(id).await?;
        let password_hash = match req.password.as_deref() {
            Some(password) => {
                validators::validate_password(password, &self.policy)
                    .map_err(AppError::Validation)?;
                security::hash_password(password)?
            }
            None => existing.password_hash,
        };
        let gender = req.gender.unwrap_or_default();
        let profile_pic = req.profile_pic.as_deref().unwrap_or(DEFAULT_PROFILE_PIC);

        user_repo::replace_user(
            &self.pool,
            id,
            &req.username,
            &password_hash,
            &req.email,
            req.bio.as_deref(),
            gender.as_str(),
            profile_pic,
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id} not found")))
    }

    pub async fn update_user(&self, id: &str, req: UpdateUserRequest) -> Result<User> {
        req.validate()?;

        let password_hash = match req.password.as_deref() {
            Some(password) => {
                validators::validate_password(password, &self.policy)
                    .map_err(AppError::Validation)?;
                Some(security::hash_password(password)?)
            }
            None => None,
        };
        let gender = req.gender.map(|g| g.as_str().to_string());

        user_repo::update_user(
            &self.pool,
            id,
            req.username.as_deref(),
            password_hash.as_deref(),
            req.email.as_deref(),
            req.bio.as_deref(),
            gender.as_deref(),
            req.profile_pic.as_deref(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id} not found")))
    }

    /// Deleting a user cascades through every owning foreign key: posts,
    /// engagement rows, saved posts, follow edges, stories, notifications
    /// and messages all go with the account.
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        let deleted = user_repo::delete_user(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("user {id} not found")));
        }
        Ok(())
    }
}
