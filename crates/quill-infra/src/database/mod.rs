//! PostgreSQL persistence via SeaORM.

mod connections;
pub mod entity;
mod gateway;

pub use connections::{DatabaseConfig, connect};
pub use gateway::SeaOrmPostGateway;
