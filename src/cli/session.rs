// src/cli/session.rs
//! Interactive menu loop

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{info, warn};

use crate::config::Config;
use crate::entity::{Attachment, GeoPoint, Note, NoteDraft};
use crate::error::{GeoNotesError, Result};
use crate::export::{export, format_instant, ExportFormat};
use crate::search::SearchFilter;
use crate::storage::Timeline;

const MENU: &str = "\n--- Menu ---
1. Create a new note
2. List all notes
3. Show a note by ID
4. Filter notes by keyword
5. Advanced search (area + keyword)
6. Show latest notes
7. Export notes to JSON
8. Export notes to Markdown
9. Exit";

/// One menu session. Owns the timeline and the id counter.
///
/// Prompts and headers are written only when `interactive` is set, so a
/// scripted session prints results alone.
pub struct Session<R, W> {
    timeline: Timeline,
    next_id: i64,
    input: R,
    output: W,
    config: Config,
    interactive: bool,
    eof: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config, interactive: bool) -> Self {
        Self {
            timeline: Timeline::new(),
            next_id: 1,
            input,
            output,
            config,
            interactive,
            eof: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        if self.interactive && self.config.banner {
            writeln!(self.output, "--------------------------------------")?;
            writeln!(self.output, "  📝 Welcome to GeoNotes")?;
            writeln!(self.output, "--------------------------------------")?;
        }

        loop {
            if self.interactive {
                writeln!(self.output, "{}", MENU)?;
            }
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let outcome = match choice.trim().parse::<u32>() {
                Ok(9) => break,
                Ok(n) => self.dispatch(n),
                Err(_) => Err(GeoNotesError::InvalidInput(
                    "please enter a number".to_string(),
                )),
            };

            match outcome {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "Rejected input");
                    writeln!(self.output, "❌ {}", e)?;
                }
                Err(e) => return Err(e),
            }

            if self.eof {
                break;
            }
        }

        if self.interactive {
            writeln!(self.output, "Thanks for using GeoNotes! 👋")?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: u32) -> Result<()> {
        match choice {
            1 => self.create_note(),
            2 => self.list_notes(),
            3 => self.show_note(),
            4 => self.filter_notes(),
            5 => self.advanced_search(),
            6 => self.latest_notes(),
            7 => self.export_notes(ExportFormat::Json),
            8 => self.export_notes(ExportFormat::Markdown),
            other => Err(GeoNotesError::InvalidInput(format!(
                "unknown option {}",
                other
            ))),
        }
    }

    /// Read one line, printing `label` first in interactive mode.
    /// `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        if self.interactive {
            write!(self.output, "{}", label)?;
            self.output.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt_number<T: FromStr>(&mut self, label: &str, what: &str) -> Result<Option<T>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        parse_number(&raw, what).map(Some)
    }

    fn header(&mut self, title: &str) -> Result<()> {
        if self.interactive {
            writeln!(self.output, "\n--- {} ---", title)?;
        }
        Ok(())
    }

    fn create_note(&mut self) -> Result<()> {
        self.header("Create a new note")?;
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(());
        };
        let Some(content) = self.prompt("Content: ")? else {
            return Ok(());
        };
        let Some(lat) = self.prompt_number::<f64>("Latitude: ", "latitude")? else {
            return Ok(());
        };
        let Some(lon) = self.prompt_number::<f64>("Longitude: ", "longitude")? else {
            return Ok(());
        };
        let location = GeoPoint::new(lat, lon)?;
        let attachment = self.read_attachment()?;

        let mut draft = NoteDraft::new(self.next_id, title, location).content(content);
        if let Some(attachment) = attachment {
            draft = draft.attachment(attachment);
        }
        let note = draft.build()?;
        let id = note.id();

        self.timeline.add_note(note);
        self.next_id += 1;

        info!(id, "Created note");
        writeln!(self.output, "✅ Note {} created.", id)?;
        Ok(())
    }

    fn read_attachment(&mut self) -> Result<Option<Attachment>> {
        let Some(kind) = self.prompt("Attachment (photo/audio/link/video, blank for none): ")?
        else {
            return Ok(None);
        };
        let kind = kind.trim().to_lowercase();
        if kind.is_empty() {
            return Ok(None);
        }

        let url = self.prompt("URL: ")?.unwrap_or_default();
        let attachment = match kind.as_str() {
            "photo" => {
                let width = self.prompt_number("Width: ", "width")?.unwrap_or(0);
                let height = self.prompt_number("Height: ", "height")?.unwrap_or(0);
                Attachment::photo(url, width, height)?
            }
            "audio" => {
                let duration = self
                    .prompt_number("Duration (seconds): ", "duration")?
                    .unwrap_or(0);
                Attachment::audio(url, duration)?
            }
            "link" => {
                let label = self.prompt("Label (optional): ")?;
                Attachment::link(url, label)?
            }
            "video" => {
                let seconds = self
                    .prompt_number("Length (seconds): ", "length")?
                    .unwrap_or(0);
                Attachment::video(url, seconds)?
            }
            other => {
                return Err(GeoNotesError::InvalidInput(format!(
                    "unknown attachment kind '{}'",
                    other
                )))
            }
        };
        Ok(Some(attachment))
    }

    fn list_notes(&mut self) -> Result<()> {
        self.header("Available notes")?;
        if self.timeline.is_empty() {
            writeln!(self.output, "No notes yet.")?;
            return Ok(());
        }
        for note in self.timeline.notes() {
            let attachment = note
                .attachment()
                .map(Attachment::describe)
                .unwrap_or_else(|| "—".to_string());
            writeln!(
                self.output,
                "ID: {} | {} | {} | loc={} | att={}",
                note.id(),
                note.title(),
                note.content(),
                note.location().classify(),
                attachment
            )?;
        }
        Ok(())
    }

    fn show_note(&mut self) -> Result<()> {
        let Some(id) = self.prompt_number::<i64>("Note ID: ", "note id")? else {
            return Ok(());
        };
        let note = self.timeline.require_note(id)?;
        let json = serde_json::to_string_pretty(note)?;
        writeln!(self.output, "{}", json)?;
        Ok(())
    }

    fn filter_notes(&mut self) -> Result<()> {
        let Some(keyword) = self.prompt("Keyword to filter by: ")? else {
            return Ok(());
        };
        self.header("Search results")?;
        let found = self.timeline.filter_by_keyword(&keyword);
        if found.is_empty() {
            writeln!(self.output, "No notes found matching: {}", keyword)?;
            return Ok(());
        }
        write_summaries(&mut self.output, &found)
    }

    fn advanced_search(&mut self) -> Result<()> {
        let Some(min_lat) = self.prompt_number("Min latitude: ", "latitude")? else {
            return Ok(());
        };
        let Some(min_lon) = self.prompt_number("Min longitude: ", "longitude")? else {
            return Ok(());
        };
        let Some(max_lat) = self.prompt_number("Max latitude: ", "latitude")? else {
            return Ok(());
        };
        let Some(max_lon) = self.prompt_number("Max longitude: ", "longitude")? else {
            return Ok(());
        };
        let keyword = self
            .prompt("Keyword (blank for any): ")?
            .unwrap_or_default();

        let filter = SearchFilter::from_bounds(min_lat, min_lon, max_lat, max_lon, keyword)?;
        self.header("Search results")?;
        let found = self.timeline.search(&filter);
        if found.is_empty() {
            writeln!(self.output, "No notes found in that area.")?;
            return Ok(());
        }
        write_summaries(&mut self.output, &found)
    }

    fn latest_notes(&mut self) -> Result<()> {
        let label = format!("How many? [{}]: ", self.config.latest_default);
        let Some(raw) = self.prompt(&label)? else {
            return Ok(());
        };
        let n = if raw.trim().is_empty() {
            self.config.latest_default
        } else {
            // Zero or negative counts yield nothing
            usize::try_from(parse_number::<i64>(&raw, "count")?).unwrap_or(0)
        };

        self.header("Latest notes")?;
        for note in self.timeline.latest(n) {
            writeln!(
                self.output,
                "ID: {} | {} | {}",
                note.id(),
                note.title(),
                format_instant(&note.created_at())
            )?;
        }
        Ok(())
    }

    fn export_notes(&mut self, format: ExportFormat) -> Result<()> {
        self.header(&format!("Exporting notes to {}", format))?;
        let document = export(format, self.timeline.notes());
        info!(%format, notes = self.timeline.len(), "Exported notes");
        if document.is_empty() {
            return Ok(());
        }
        if document.ends_with('\n') {
            write!(self.output, "{}", document)?;
        } else {
            writeln!(self.output, "{}", document)?;
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(raw: &str, what: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| {
        GeoNotesError::InvalidInput(format!("expected a number for {}, got '{}'", what, raw.trim()))
    })
}

fn write_summaries<W: Write>(output: &mut W, notes: &[&Note]) -> Result<()> {
    for note in notes {
        writeln!(output, "ID: {} | {} | {}", note.id(), note.title(), note.content())?;
    }
    Ok(())
}
