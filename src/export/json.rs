// src/export/json.rs
//! Structured (JSON-shaped) export

use crate::entity::Note;

use super::utils::{format_coord, format_instant};
use super::Exporter;

/// Renders `{ "notes": [ ... ] }` with one block per note, highest id first.
///
/// Text fields are interpolated verbatim. Quotes, backslashes and control
/// characters in titles or content are NOT escaped, so the output is only
/// valid JSON for plain text. Consumers depend on this exact layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

impl JsonExporter {
    fn render_note(note: &Note) -> String {
        format!(
            "{{\n  \"id\": {},\n  \"title\": \"{}\",\n  \"content\": \"{}\",\n  \"location\": {{\n    \"lat\": {},\n    \"lon\": {} }},\n  \"createdAt\": \"{}\"\n}}\n",
            note.id(),
            note.title(),
            note.content(),
            format_coord(note.location().lat()),
            format_coord(note.location().lon()),
            format_instant(&note.created_at()),
        )
    }
}

impl Exporter for JsonExporter {
    fn export(&self, notes: &[Note]) -> String {
        let mut sorted: Vec<&Note> = notes.iter().collect();
        sorted.sort_by(|a, b| b.id().cmp(&a.id()));

        let body = sorted
            .into_iter()
            .map(Self::render_note)
            .collect::<Vec<_>>()
            .join(",\n");

        format!("{{ \"notes\": [ {} ] }}\n", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{GeoPoint, NoteDraft};
    use chrono::{Duration, TimeZone, Utc};

    fn sample(id: i64, title: &str, content: &str, minutes: i64) -> Note {
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        NoteDraft::new(id, title, GeoPoint::new(36.5297, -6.2927).unwrap())
            .content(content)
            .created_at(base + Duration::minutes(minutes))
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(JsonExporter.export(&[]), "{ \"notes\": [  ] }\n");
    }

    #[test]
    fn test_single_note_layout() {
        let out = JsonExporter.export(&[sample(1, "Cádiz", "Playita", 0)]);
        let expected = concat!(
            "{ \"notes\": [ {\n",
            "  \"id\": 1,\n",
            "  \"title\": \"Cádiz\",\n",
            "  \"content\": \"Playita\",\n",
            "  \"location\": {\n",
            "    \"lat\": 36.529700,\n",
            "    \"lon\": -6.292700 },\n",
            "  \"createdAt\": \"2025-03-01T09:00:00Z\"\n",
            "}\n",
            " ] }\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_orders_by_id_descending_not_time() {
        // Note 1 is the newest, yet it comes last
        let notes = vec![
            sample(1, "First", "a", 30),
            sample(10, "Tenth", "b", 0),
            sample(2, "Second", "c", 10),
        ];
        let out = JsonExporter.export(&notes);
        let p10 = out.find("\"id\": 10,").unwrap();
        let p2 = out.find("\"id\": 2,").unwrap();
        let p1 = out.find("\"id\": 1,").unwrap();
        assert!(p10 < p2 && p2 < p1);
        assert_eq!(out.matches("},\n{").count(), 0);
        assert_eq!(out.matches("}\n,\n{").count(), 2);
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let out = JsonExporter.export(&[sample(1, "Say \"hi\"", "-", 0)]);
        assert!(out.contains("\"title\": \"Say \"hi\"\","));
    }
}
