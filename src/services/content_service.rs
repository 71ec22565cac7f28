//! ContentService — the entry point handlers and the genre reconciler call.
//!
//! Delegates straight to `ContentStore` and turns a missing row into
//! `ContentError::NotFound`. Storage failures pass through untouched.

use crate::{
    models::content::{Content, ContentInput, ValidationError},
    services::content_store::{ContentStore, StorageError},
};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content `{0}` not found")]
    NotFound(Uuid),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type ContentResult<T> = Result<T, ContentError>;

#[derive(Clone)]
pub struct ContentService {
    store: ContentStore,
}

impl ContentService {
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    /// Direct access to the gateway, used by the readiness probe.
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Every record in the catalog. May be empty.
    pub async fn get_many(&self) -> ContentResult<Vec<Content>> {
        let contents = self.store.read_all().await?;
        debug!(count = contents.len(), "listed contents");
        Ok(contents)
    }

    pub async fn get(&self, id: Uuid) -> ContentResult<Content> {
        self.store
            .read(id)
            .await?
            .ok_or(ContentError::NotFound(id))
    }

    pub async fn create(&self, input: &ContentInput) -> ContentResult<Content> {
        let content = self.store.create(input).await?;
        info!(content_id = %content.id, "content created");
        Ok(content)
    }

    /// Full replace. The caller supplies the complete desired state; anything
    /// absent from `input` is cleared.
    pub async fn update(&self, id: Uuid, input: &ContentInput) -> ContentResult<Content> {
        let content = self
            .store
            .update(id, input)
            .await?
            .ok_or(ContentError::NotFound(id))?;
        info!(content_id = %id, "content updated");
        Ok(content)
    }

    pub async fn delete(&self, id: Uuid) -> ContentResult<Uuid> {
        let deleted = self
            .store
            .delete(id)
            .await?
            .ok_or(ContentError::NotFound(id))?;
        info!(content_id = %deleted, "content deleted");
        Ok(deleted)
    }
}
