use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoNotesError {
    #[error("Invalid {axis}: {value}")]
    InvalidCoordinate { axis: &'static str, value: f64 },

    #[error("Invalid attachment: {0}")]
    InvalidAttachment(String),

    #[error("Invalid note: {0}")]
    InvalidNote(String),

    #[error("Note not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeoNotesError {
    /// True for errors the menu loop reports and then keeps going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GeoNotesError::InvalidCoordinate { .. }
                | GeoNotesError::InvalidAttachment(_)
                | GeoNotesError::InvalidNote(_)
                | GeoNotesError::NotFound(_)
                | GeoNotesError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GeoNotesError>;
