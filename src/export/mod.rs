// src/export/mod.rs
//! Export renderers
//!
//! Each exporter is a pure function of a note snapshot. Callers pass
//! [`crate::storage::Timeline::notes`] (or any slice) and get back the
//! rendered document.

mod json;
mod markdown;
pub mod utils;

use crate::entity::Note;

pub use self::json::JsonExporter;
pub use self::markdown::MarkdownExporter;
pub use self::utils::{format_coord, format_date, format_instant};

/// Renders a snapshot of notes into a document.
pub trait Exporter {
    fn export(&self, notes: &[Note]) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn exporter(&self) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Json => Box::new(JsonExporter),
            ExportFormat::Markdown => Box::new(MarkdownExporter),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!("Invalid export format: {}", s)),
        }
    }
}

/// Render `notes` in the given format.
pub fn export(format: ExportFormat, notes: &[Note]) -> String {
    format.exporter().export(notes)
}
