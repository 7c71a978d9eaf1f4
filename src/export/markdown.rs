// src/export/markdown.rs
//! Markdown outline export

use crate::entity::{newest_first, Note};

use super::utils::{format_coord, format_date};
use super::Exporter;

/// One bullet per note, newest first:
/// `- [ID 1] "Title" — (36.529700, -6.292700) — 2025-03-01`
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    fn render_line(note: &Note) -> String {
        format!(
            "- [ID {}] \"{}\" — ({}, {}) — {}",
            note.id(),
            note.title(),
            format_coord(note.location().lat()),
            format_coord(note.location().lon()),
            format_date(&note.created_at()),
        )
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, notes: &[Note]) -> String {
        newest_first(notes)
            .into_iter()
            .map(Self::render_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
