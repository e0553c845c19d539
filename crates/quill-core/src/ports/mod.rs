//! Ports - trait definitions for external collaborators.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod gateway;
mod history;

pub use auth::{AuthError, IdentityProvider, PasswordService, TokenClaims, TokenService};
pub use gateway::{PostGateway, SortKey};
pub use history::History;
