//! Genre add/remove with set semantics on top of the full-replace update.
//!
//! Each operation reads the current record, merges the requested tags into
//! its genre list, then writes the whole record back through
//! `ContentService::update`. Nothing locks the row between the read and the
//! write, so two concurrent mutations of the same record are last-write-wins.

use crate::{
    models::content::ContentInput,
    services::content_service::{ContentResult, ContentService},
};
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct GenreReconciler {
    service: ContentService,
}

impl GenreReconciler {
    pub fn new(service: ContentService) -> Self {
        Self { service }
    }

    /// Append every requested tag the record does not carry yet.
    ///
    /// Fails with `NotFound` before any write when the record is missing.
    pub async fn add_genres(&self, id: Uuid, requested: &[String]) -> ContentResult<()> {
        let content = self.service.get(id).await?;
        let mut input = ContentInput::from(content);
        merge_genres(&mut input.genres, requested);

        self.service.update(id, &input).await?;
        info!(content_id = %id, genres = ?input.genres, "genres added");
        Ok(())
    }

    /// Drop each requested tag from the record. Unknown tags are ignored.
    pub async fn remove_genres(&self, id: Uuid, requested: &[String]) -> ContentResult<()> {
        let content = self.service.get(id).await?;
        let mut input = ContentInput::from(content);
        strip_genres(&mut input.genres, requested);

        self.service.update(id, &input).await?;
        info!(content_id = %id, genres = ?input.genres, "genres removed");
        Ok(())
    }
}

/// Drop repeated entries, keeping the first occurrence of each tag. Returns
/// the set of tags that remain.
fn dedup_in_place(genres: &mut Vec<String>) -> HashSet<String> {
    let mut seen = HashSet::with_capacity(genres.len());
    genres.retain(|genre| seen.insert(genre.clone()));
    seen
}

/// Append requested tags in request order, skipping any already present.
///
/// Existing order is untouched. Duplicates already stored (possible after a
/// raw update) are collapsed first so the result is always a set.
pub fn merge_genres(genres: &mut Vec<String>, requested: &[String]) {
    let mut present = dedup_in_place(genres);
    for tag in requested {
        if present.insert(tag.clone()) {
            genres.push(tag.clone());
        }
    }
}

/// Remove each requested tag. After the dedup pass every tag occurs at most
/// once, so dropping all matches removes exactly the first occurrence.
pub fn strip_genres(genres: &mut Vec<String>, requested: &[String]) {
    dedup_in_place(genres);
    let unwanted: HashSet<&str> = requested.iter().map(String::as_str).collect();
    genres.retain(|genre| !unwanted.contains(genre.as_str()));
}
