//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `postgres` - PostgreSQL post store via SeaORM
//! - `auth` - Argon2 passwords + JWT session tokens

pub mod gateway;
pub mod history;

#[cfg(feature = "postgres")]
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use gateway::{InMemoryPostGateway, TimeoutGateway};
pub use history::InMemoryHistory;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, SeaOrmPostGateway};

#[cfg(feature = "auth")]
pub use auth::{AdminAccount, Argon2PasswordService, JwtConfig, JwtTokenService, LocalIdentityProvider};
