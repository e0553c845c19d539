//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use quill_core::domain::SiteInfo;
use quill_infra::{DatabaseConfig, JwtConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs on the in-memory post store.
    pub database: Option<DatabaseConfig>,
    /// Upper bound for every post store call.
    pub gateway_timeout: Duration,
    pub auth: AuthConfig,
    pub site: SiteInfo,
    /// Pre-filled author on the admin form.
    pub default_author: String,
}

/// Admin account and session token settings.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub admin_email: String,
    /// Argon2 PHC string; takes precedence over `admin_password`.
    pub admin_password_hash: Option<String>,
    pub admin_password: Option<String>,
    pub jwt: JwtConfig,
}

fn var_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn string_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: var_or("DB_MAX_CONNECTIONS", 10),
            min_connections: var_or("DB_MIN_CONNECTIONS", 1),
        });

        let jwt_defaults = JwtConfig::default();
        let auth = AuthConfig {
            admin_email: string_or("ADMIN_EMAIL", "admin@example.com"),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").unwrap_or(jwt_defaults.secret),
                expiration_hours: var_or("JWT_EXPIRATION_HOURS", jwt_defaults.expiration_hours),
                issuer: env::var("JWT_ISSUER").unwrap_or(jwt_defaults.issuer),
            },
        };

        Self {
            host: string_or("HOST", "127.0.0.1"),
            port: var_or("PORT", 8080),
            database,
            gateway_timeout: Duration::from_secs(var_or("GATEWAY_TIMEOUT_SECS", 10)),
            auth,
            site: SiteInfo {
                name: string_or("SITE_NAME", "Quill"),
                description: string_or(
                    "SITE_DESCRIPTION",
                    "Articles, notes and essays from the Quill team.",
                ),
            },
            default_author: string_or("DEFAULT_AUTHOR", "Quill Team"),
        }
    }
}
