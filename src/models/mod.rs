//! Core data models for the content catalog.
//!
//! `Content` maps onto the `contents` table via `sqlx::FromRow` and
//! serializes as camelCase JSON via `serde`. `ContentInput` is the inbound
//! shape for create and full-replace update.

pub mod content;
