//! Search filters for the timeline.

use crate::entity::{GeoArea, GeoPoint, Note};
use crate::error::Result;

/// Combined advanced search: an optional bounding box and an optional
/// keyword, applied in conjunction.
///
/// An empty keyword is treated as "no keyword" and skips the text check.
#[derive(Debug, Default, Clone)]
pub struct SearchFilter {
    /// Notes must lie inside this box
    pub area: Option<GeoArea>,
    /// Case-sensitive substring of title or content
    pub keyword: String,
}

impl SearchFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an area filter from four raw bounds.
    pub fn from_bounds(
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
        keyword: impl Into<String>,
    ) -> Result<Self> {
        let area = GeoArea::new(GeoPoint::new(min_lat, min_lon)?, GeoPoint::new(max_lat, max_lon)?);
        Ok(Self {
            area: Some(area),
            keyword: keyword.into(),
        })
    }

    pub fn matches(&self, note: &Note) -> bool {
        let in_area = self
            .area
            .as_ref()
            .map_or(true, |area| area.contains(note.location()));
        in_area && (self.keyword.is_empty() || note.matches_keyword(&self.keyword))
    }
}
