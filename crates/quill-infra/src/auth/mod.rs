//! Authentication implementations.

mod credentials;
mod identity;
mod jwt;

pub use credentials::{AdminAccount, Argon2PasswordService};
pub use identity::LocalIdentityProvider;
pub use jwt::{JwtConfig, JwtTokenService};
