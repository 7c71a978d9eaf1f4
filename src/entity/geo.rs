// src/entity/geo.rs
use serde::Serialize;

use crate::error::{GeoNotesError, Result};

/// A validated coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Build a point, rejecting latitudes outside [-90, 90], longitudes
    /// outside [-180, 180] and NaN.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoNotesError::InvalidCoordinate {
                axis: "latitude",
                value: lat,
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoNotesError::InvalidCoordinate {
                axis: "longitude",
                value: lon,
            });
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Region label for display. First match wins: origin, equator,
    /// Greenwich meridian, then the raw pair.
    pub fn classify(&self) -> String {
        match (self.lat, self.lon) {
            (lat, lon) if lat == 0.0 && lon == 0.0 => "ORIGIN".to_string(),
            (lat, _) if lat == 0.0 => "Equator".to_string(),
            (_, lon) if lon == 0.0 => "Greenwich".to_string(),
            (lat, lon) => format!("({},{})", lat, lon),
        }
    }
}

/// Bounding box used for spatial filtering.
///
/// Corners are not normalized: `top_left` must hold the lower latitude and
/// longitude bounds, `bottom_right` the upper ones. A reversed box matches
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoArea {
    pub top_left: GeoPoint,
    pub bottom_right: GeoPoint,
}

impl GeoArea {
    pub fn new(top_left: GeoPoint, bottom_right: GeoPoint) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Inclusive containment on raw bounds.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.top_left.lat
            && point.lat <= self.bottom_right.lat
            && point.lon >= self.top_left.lon
            && point.lon <= self.bottom_right.lon
    }
}
