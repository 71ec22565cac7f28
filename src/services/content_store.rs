//! src/services/content_store.rs
//!
//! ContentStore — parameterized CRUD over the `contents` table in SQLite.
//! This layer maps rows to and from `Content` and does nothing else: no
//! validation, no merging, no retries. Every call borrows one connection from
//! the shared pool for a single statement and hands it back on every path.

use crate::models::content::{Content, ContentInput};
use sqlx::{SqlitePool, types::Json};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Column list shared by every `SELECT`/`RETURNING` clause.
const CONTENT_COLUMNS: &str = "\
    id, title, subtitle, description, image_url, \
    duration_minutes, start_time, end_time, genres";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// ContentStore exposes the five storage primitives the service builds on:
/// - create (store assigns the id)
/// - read one / read all
/// - update (full-row replace, never a column patch)
/// - delete (hard delete)
///
/// Absence is reported as `None` and left for the caller to interpret.
#[derive(Clone)]
pub struct ContentStore {
    /// Shared SQLite connection pool.
    pub db: Arc<SqlitePool>,
}

impl ContentStore {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Insert a new row and return it with its freshly generated id.
    pub async fn create(&self, input: &ContentInput) -> StorageResult<Content> {
        let id = Uuid::new_v4();
        let query = format!(
            "INSERT INTO contents (\
                id, title, subtitle, description, image_url, \
                duration_minutes, start_time, end_time, genres\
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {CONTENT_COLUMNS}"
        );

        let content = sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.subtitle.as_deref())
            .bind(input.description.as_deref())
            .bind(input.image_url.as_deref())
            .bind(input.duration_minutes)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(Json(&input.genres))
            .fetch_one(&*self.db)
            .await?;

        debug!(content_id = %content.id, "inserted content row");
        Ok(content)
    }

    /// Look up a single row by id.
    pub async fn read(&self, id: Uuid) -> StorageResult<Option<Content>> {
        let query = format!("SELECT {CONTENT_COLUMNS} FROM contents WHERE id = ?");
        let content = sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .fetch_optional(&*self.db)
            .await?;
        Ok(content)
    }

    /// Full-table scan in insertion order. No paging.
    pub async fn read_all(&self) -> StorageResult<Vec<Content>> {
        let query = format!("SELECT {CONTENT_COLUMNS} FROM contents ORDER BY rowid ASC");
        let rows = sqlx::query_as::<_, Content>(&query)
            .fetch_all(&*self.db)
            .await?;
        Ok(rows)
    }

    /// Overwrite every mutable column of the row keyed by `id`.
    ///
    /// Fields that are `None` in `input` are written as NULL. Returns the row
    /// as stored after the write, or `None` when no row matched.
    pub async fn update(&self, id: Uuid, input: &ContentInput) -> StorageResult<Option<Content>> {
        let query = format!(
            "UPDATE contents SET \
                title = ?, subtitle = ?, description = ?, image_url = ?, \
                duration_minutes = ?, start_time = ?, end_time = ?, genres = ? \
             WHERE id = ? \
             RETURNING {CONTENT_COLUMNS}"
        );

        let content = sqlx::query_as::<_, Content>(&query)
            .bind(input.title.as_deref())
            .bind(input.subtitle.as_deref())
            .bind(input.description.as_deref())
            .bind(input.image_url.as_deref())
            .bind(input.duration_minutes)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(Json(&input.genres))
            .bind(id)
            .fetch_optional(&*self.db)
            .await?;

        if content.is_some() {
            debug!(content_id = %id, "replaced content row");
        }
        Ok(content)
    }

    /// Remove the row. Returns the id when a row was actually deleted.
    pub async fn delete(&self, id: Uuid) -> StorageResult<Option<Uuid>> {
        let result = sqlx::query("DELETE FROM contents WHERE id = ?")
            .bind(id)
            .execute(&*self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        debug!(content_id = %id, "deleted content row");
        Ok(Some(id))
    }

    /// Round-trip a trivial query to prove the database is reachable.
    pub async fn ping(&self) -> StorageResult<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&*self.db)
            .await?;
        Ok(())
    }
}
