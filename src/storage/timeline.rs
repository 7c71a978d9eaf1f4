use std::collections::HashMap;

use tracing::debug;

use crate::entity::{newest_first, GeoArea, Note};
use crate::error::{GeoNotesError, Result};
use crate::search::SearchFilter;

/// Insertion-ordered store of notes keyed by id.
///
/// Re-adding an id replaces the stored note in place; its position in
/// [`Timeline::notes`] stays where the id was first seen.
#[derive(Debug, Default)]
pub struct Timeline {
    notes: Vec<Note>,
    index: HashMap<i64, usize>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by id.
    pub fn add_note(&mut self, note: Note) {
        match self.index.get(&note.id()) {
            Some(&pos) => {
                debug!(id = note.id(), position = pos, "Overwriting note");
                self.notes[pos] = note;
            }
            None => {
                debug!(id = note.id(), position = self.notes.len(), "Adding note");
                self.index.insert(note.id(), self.notes.len());
                self.notes.push(note);
            }
        }
    }

    pub fn get_note(&self, id: i64) -> Option<&Note> {
        self.index.get(&id).map(|&pos| &self.notes[pos])
    }

    /// Like [`Timeline::get_note`] but absence is an error.
    pub fn require_note(&self, id: i64) -> Result<&Note> {
        self.get_note(id).ok_or(GeoNotesError::NotFound(id))
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Up to `n` notes, newest `created_at` first. Equal timestamps keep
    /// insertion order.
    pub fn latest(&self, n: usize) -> Vec<&Note> {
        let mut sorted = newest_first(&self.notes);
        sorted.truncate(n);
        sorted
    }

    pub fn filter_by_keyword(&self, keyword: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.matches_keyword(keyword))
            .collect()
    }

    pub fn filter_by_area(&self, area: &GeoArea) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| area.contains(n.location()))
            .collect()
    }

    /// Notes matching every constraint of `filter`, in insertion order.
    pub fn search(&self, filter: &SearchFilter) -> Vec<&Note> {
        self.notes.iter().filter(|n| filter.matches(n)).collect()
    }
}
