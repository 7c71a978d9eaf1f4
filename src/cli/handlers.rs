use std::io::{self, Write};

use chrono::{Duration, Utc};
use tracing::info;

use crate::config::Config;
use crate::entity::{Attachment, GeoPoint, Note, NoteDraft};
use crate::error::Result;
use crate::export::{export, ExportFormat};
use crate::storage::Timeline;

use super::session::Session;

pub fn handle_interactive(config: &Config) -> Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    info!(interactive, "Starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config.clone(), interactive);
    session.run()
}

pub fn handle_examples(format: ExportFormat) -> Result<()> {
    let mut timeline = Timeline::new();
    for note in sample_notes()? {
        timeline.add_note(note);
    }

    let document = export(format, timeline.notes());
    let mut stdout = io::stdout().lock();
    if document.ends_with('\n') {
        write!(stdout, "{}", document)?;
    } else {
        writeln!(stdout, "{}", document)?;
    }
    Ok(())
}

/// The three demo notes, ids 1 to 3, one per attachment kind. Each is a
/// millisecond newer than the previous one.
pub fn sample_notes() -> Result<Vec<Note>> {
    let now = Utc::now();
    Ok(vec![
        NoteDraft::new(1, "Cádiz", GeoPoint::new(36.5297, -6.2927)?)
            .content("Playita")
            .created_at(now)
            .attachment(Attachment::photo("u", 2000, 1000)?)
            .build()?,
        NoteDraft::new(2, "Sevilla", GeoPoint::new(37.3826, -5.9963)?)
            .content("Triana")
            .created_at(now + Duration::milliseconds(1))
            .attachment(Attachment::audio("a", 320)?)
            .build()?,
        NoteDraft::new(3, "Córdoba", GeoPoint::new(37.8790, -4.7794)?)
            .content("Mezquita")
            .created_at(now + Duration::milliseconds(2))
            .attachment(Attachment::link("http://cordoba", Some("Oficial".to_string()))?)
            .build()?,
    ])
}
