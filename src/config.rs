/// Configuration management for aperture-api
///
/// Loads configuration from environment variables.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Password complexity policy applied on user create/update
    pub password: PasswordPolicy,
    /// CORS configuration
    pub cors: CorsConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// HTTP port
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Min connections in pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Password complexity policy
///
/// The rules the original deployment shipped with (at least 8 characters,
/// at least one letter and one digit) are the defaults; each rule can be
/// tightened independently through the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub min_len: usize,
    pub require_letter: bool,
    pub require_digit: bool,
    pub require_upper: bool,
    pub require_lower: bool,
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_len: 8,
            require_letter: true,
            require_digit: true,
            require_upper: false,
            require_lower: false,
            require_special: false,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or "*"
    pub allowed_origins: String,
}

// Default values
fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
        };

        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL")
                .context("DATABASE_URL environment variable not set")?,
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_max_connections),
            min_connections: std::env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_min_connections),
        };

        let defaults = PasswordPolicy::default();
        let password = PasswordPolicy {
            min_len: std::env::var("PASSWORD_MIN_LEN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_len),
            require_letter: env_bool("PASSWORD_REQUIRE_LETTER", defaults.require_letter),
            require_digit: env_bool("PASSWORD_REQUIRE_DIGIT", defaults.require_digit),
            require_upper: env_bool("PASSWORD_REQUIRE_UPPER", defaults.require_upper),
            require_lower: env_bool("PASSWORD_REQUIRE_LOWER", defaults.require_lower),
            require_special: env_bool("PASSWORD_REQUIRE_SPECIAL", defaults.require_special),
        };

        let cors = CorsConfig {
            allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        };

        Ok(Config {
            app,
            database,
            password,
            cors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_overrides() {
        for var in [
            "APP_ENV",
            "APP_HOST",
            "PORT",
            "DB_MAX_CONNECTIONS",
            "DB_MIN_CONNECTIONS",
            "PASSWORD_MIN_LEN",
            "PASSWORD_REQUIRE_LETTER",
            "PASSWORD_REQUIRE_DIGIT",
            "PASSWORD_REQUIRE_UPPER",
            "PASSWORD_REQUIRE_LOWER",
            "PASSWORD_REQUIRE_SPECIAL",
            "CORS_ALLOWED_ORIGINS",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_default_values() {
        clear_overrides();
        std::env::set_var("DATABASE_URL", "postgres://test");

        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.min_connections, 5);
        assert_eq!(config.cors.allowed_origins, "*");

        std::env::remove_var("DATABASE_URL");
    }

    #[test]
    #[serial_test::serial]
    fn test_missing_database_url_is_an_error() {
        clear_overrides();
        std::env::remove_var("DATABASE_URL");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial_test::serial]
    fn test_policy_overrides_from_env() {
        clear_overrides();
        std::env::set_var("DATABASE_URL", "postgres://test");
        std::env::set_var("PASSWORD_MIN_LEN", "12");
        std::env::set_var("PASSWORD_REQUIRE_SPECIAL", "true");

        let config = Config::from_env().unwrap();
        assert_eq!(config.password.min_len, 12);
        assert!(config.password.require_special);
        assert!(config.password.require_letter);

        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("PASSWORD_MIN_LEN");
        std::env::remove_var("PASSWORD_REQUIRE_SPECIAL");
    }

    #[test]
    fn test_default_password_policy_matches_shipped_rules() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.min_len, 8);
        assert!(policy.require_letter);
        assert!(policy.require_digit);
        assert!(!policy.require_upper);
        assert!(!policy.require_lower);
        assert!(!policy.require_special);
    }
}
