pub mod content_service;
pub mod content_store;
pub mod genre_reconciler;
