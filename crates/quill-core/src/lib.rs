//! # Quill Core
//!
//! The domain layer of the Quill blog: post lifecycle, slug derivation,
//! restricted markdown rendering and path-based view routing.
//! Persistence, identity and browser history are reached through ports only.

pub mod content;
pub mod domain;
pub mod error;
pub mod ports;
pub mod routing;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use content::{render_markdown, slugify};
pub use error::{DomainError, GatewayError, ValidationError};
pub use routing::{Location, Route, Router, View};
pub use services::{AppContext, PostRepository};
