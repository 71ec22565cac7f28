//! Represents a catalog item and the payload used to create or replace one.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// A single catalog item as persisted in the `contents` table.
///
/// Every field except `id` is optional. `genres` keeps insertion order for
/// display but is treated as a set by the genre endpoints.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Assigned by the store on create, never changed afterwards.
    pub id: Uuid,

    pub title: Option<String>,

    pub subtitle: Option<String>,

    pub description: Option<String>,

    /// Artwork location, passed through untouched.
    pub image_url: Option<String>,

    /// Running time in minutes.
    pub duration_minutes: Option<i32>,

    /// Start of the scheduling window, stored with the offset it arrived in.
    pub start_time: Option<DateTime<FixedOffset>>,

    /// End of the scheduling window. Not checked against `start_time`.
    pub end_time: Option<DateTime<FixedOffset>>,

    /// Genre tags, stored as a JSON array in a single column.
    #[sqlx(json)]
    pub genres: Vec<String>,
}

/// Inbound record for `POST /contents` and `PATCH /contents/{id}`.
///
/// An update is a full replace: a field left out here is cleared on the
/// stored row, and a missing `genres` becomes an empty list.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub duration_minutes: Option<i32>,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// A rule violated by an inbound `ContentInput`.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("durationMinutes must be zero or positive, got {0}")]
    NegativeDuration(i32),
}

impl ContentInput {
    /// Check the input before it reaches the service.
    ///
    /// Only the duration sign is enforced; the scheduling window may be in
    /// any order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.duration_minutes {
            Some(minutes) if minutes < 0 => Err(ValidationError::NegativeDuration(minutes)),
            _ => Ok(()),
        }
    }
}

impl From<Content> for ContentInput {
    fn from(content: Content) -> Self {
        Self {
            title: content.title,
            subtitle: content.subtitle,
            description: content.description,
            image_url: content.image_url,
            duration_minutes: content.duration_minutes,
            start_time: content.start_time,
            end_time: content.end_time,
            genres: content.genres,
        }
    }
}
