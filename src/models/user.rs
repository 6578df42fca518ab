use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Where a freshly created account's profile picture points before the
/// user uploads one.
pub const DEFAULT_PROFILE_PIC: &str = "profile_pics/profile.png";

/// Gender choice stored as a single-character code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "P")]
    PreferNotToSay,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::PreferNotToSay => "P",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            "P" => Some(Gender::PreferNotToSay),
            _ => None,
        }
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::PreferNotToSay
    }
}

/// User entity
///
/// The primary key is the handle the user picked at registration
/// (lowercase letters, dots, underscores; at most 15 characters).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Argon2 PHC string. Never serialized back to clients.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: String,
    pub bio: Option<String>,
    pub gender: String,
    pub profile_pic: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn gender(&self) -> Gender {
        Gender::from_str(&self.gender).unwrap_or_default()
    }
}

/// Request body for creating a user
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        length(min = 1, max = 15),
        custom(function = "crate::validators::validate_handle_shape_validator")
    )]
    pub id: String,
    #[validate(length(min = 1, max = 20))]
    pub username: String,
    /// Raw password; checked against the configured policy, then hashed.
    pub password: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 100))]
    pub bio: Option<String>,
    pub gender: Option<Gender>,
    pub profile_pic: Option<String>,
}

/// Request body for replacing a user (PUT)
///
/// The handle is immutable; it comes from the path. Omitted optional
/// fields are reset to their defaults. A present password is re-checked
/// and re-hashed; an absent one keeps the stored hash.
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceUserRequest {
    #[validate(length(min = 1, max = 20))]
    pub username: String,
    pub password: Option<String>,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 100))]
    pub bio: Option<String>,
    pub gender: Option<Gender>,
    pub profile_pic: Option<String>,
}

/// Request body for partially updating a user (PATCH)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 20))]
    pub username: Option<String>,
    pub password: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 100))]
    pub bio: Option<String>,
    pub gender: Option<Gender>,
    pub profile_pic: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::Male.as_str(), "M");
        assert_eq!(Gender::from_str("P"), Some(Gender::PreferNotToSay));
        assert_eq!(Gender::from_str("X"), None);
        assert_eq!(Gender::default(), Gender::PreferNotToSay);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: "jane.doe".to_string(),
            username: "Jane".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            email: "jane@example.com".to_string(),
            bio: None,
            gender: "P".to_string(),
            profile_pic: DEFAULT_PROFILE_PIC.to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(json.contains("jane.doe"));
    }

    #[test]
    fn test_create_request_validation() {
        let req = CreateUserRequest {
            id: "jane.doe".to_string(),
            username: "Jane".to_string(),
            password: "password1".to_string(),
            email: "jane@example.com".to_string(),
            bio: None,
            gender: None,
            profile_pic: None,
        };
        assert!(req.validate().is_ok());

        let bad = CreateUserRequest {
            id: "Jane9".to_string(),
            ..req
        };
        assert!(bad.validate().is_err());
    }
}
