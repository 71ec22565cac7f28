//! Shared state handed to every handler.

use crate::services::{content_service::ContentService, genre_reconciler::GenreReconciler};

#[derive(Clone)]
pub struct AppState {
    pub contents: ContentService,
    pub genres: GenreReconciler,
    /// Answer `GET /contents` with 404 instead of `[]` when the catalog is
    /// empty, for clients written against the legacy contract.
    pub empty_list_not_found: bool,
}

impl AppState {
    pub fn new(contents: ContentService, empty_list_not_found: bool) -> Self {
        Self {
            genres: GenreReconciler::new(contents.clone()),
            contents,
            empty_list_not_found,
        }
    }
}
