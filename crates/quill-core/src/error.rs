//! Domain-level error types.

use std::time::Duration;

use thiserror::Error;

use crate::ports::AuthError;

/// Domain errors - everything a post operation can surface to a view.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Entity not found: {entity_type} {key}")]
    NotFound {
        entity_type: &'static str,
        key: String,
    },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Gateway failure: {0}")]
    Gateway(#[from] GatewayError),
}

impl DomainError {
    pub fn post_not_found(key: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "post",
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Rejected post fields. Raised before any gateway call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Failures reported by the post store gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store query failed: {0}")]
    Query(String),

    #[error("Record not found")]
    NotFound,

    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),
}
