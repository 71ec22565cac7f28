//! Shared fixtures for unit tests: an in-memory SQLite database with the
//! schema applied.

use crate::{
    db,
    services::{content_service::ContentService, content_store::ContentStore},
};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::sync::Arc;

/// Single-connection pool so every query sees the same `:memory:` database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    db::ensure_schema(&pool).await.expect("apply schema");
    pool
}

pub async fn memory_store() -> ContentStore {
    ContentStore::new(Arc::new(memory_pool().await))
}

pub async fn memory_service() -> ContentService {
    ContentService::new(memory_store().await)
}
