//! Admin credentials and Argon2 password hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use uuid::Uuid;

use quill_core::ports::{AuthError, PasswordService};

/// Argon2-based password service.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

/// The single account allowed into the admin surface.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub user_id: Uuid,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl AdminAccount {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Email comparison ignores ASCII case.
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    /// Accept only this account's email with a password matching its hash.
    pub fn check(
        &self,
        passwords: &dyn PasswordService,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        // Verify even on an email mismatch so both failures cost the same.
        let password_ok = passwords.verify(password, &self.password_hash)?;
        if password_ok && self.matches_email(email) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
