// src/entity/note.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Attachment, GeoPoint};
use crate::error::{GeoNotesError, Result};

/// Shortest accepted title, in characters.
pub const MIN_TITLE_LEN: usize = 3;
/// Content stored when none is supplied.
pub const EMPTY_CONTENT: &str = "-";

/// A geolocated note. Immutable once built; see [`NoteDraft`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    id: i64,
    title: String,
    content: String,
    location: GeoPoint,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment: Option<Attachment>,
}

impl Note {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn location(&self) -> &GeoPoint {
        &self.location
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Case-sensitive substring match on title or content.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.title.contains(keyword) || self.content.contains(keyword)
    }
}

/// Newest `created_at` first; equal timestamps keep their input order.
pub fn newest_first(notes: &[Note]) -> Vec<&Note> {
    let mut sorted: Vec<&Note> = notes.iter().collect();
    sorted.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    sorted
}

/// Construction payload for a [`Note`]
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub location: Option<GeoPoint>,
    pub created_at: Option<DateTime<Utc>>,
    pub attachment: Option<Attachment>,
}

impl NoteDraft {
    pub fn new(id: i64, title: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id,
            title: Some(title.into()),
            location: Some(location),
            ..Self::default()
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Validate and apply defaults.
    ///
    /// The title must be non-blank and at least [`MIN_TITLE_LEN`] characters;
    /// it is kept as given. Content is trimmed, or [`EMPTY_CONTENT`] when
    /// absent. A missing timestamp becomes the current time.
    pub fn build(self) -> Result<Note> {
        let title = match self.title {
            Some(t) if !t.trim().is_empty() && t.chars().count() >= MIN_TITLE_LEN => t,
            _ => {
                return Err(GeoNotesError::InvalidNote(format!(
                    "title is required (at least {} characters)",
                    MIN_TITLE_LEN
                )))
            }
        };

        let content = match self.content {
            Some(c) => c.trim().to_string(),
            None => EMPTY_CONTENT.to_string(),
        };

        let location = self
            .location
            .ok_or_else(|| GeoNotesError::InvalidNote("location is required".to_string()))?;

        Ok(Note {
            id: self.id,
            title,
            content,
            location,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            attachment: self.attachment,
        })
    }
}
