//! Applies or reverts the post store schema.
//!
//! Reads `DATABASE_URL` (or `-u`) like any SeaORM migrator:
//! `migration up`, `migration down`, `migration status`.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    tracing::info!("Running Quill post store migrations");
    cli::run_cli(migration::Migrator).await;
}
