// src/entity/attachment.rs
use serde::Serialize;

use crate::error::{GeoNotesError, Result};

/// Photos wider than this are labelled high definition.
pub const HD_WIDTH_THRESHOLD: i32 = 1920;
/// Audio longer than this many seconds reports its length in minutes.
pub const LONG_AUDIO_SECONDS: i32 = 300;
/// Video longer than this many seconds is labelled long.
pub const LONG_VIDEO_SECONDS: i32 = 120;

fn require_url(kind: &str, url: String) -> Result<String> {
    if url.trim().is_empty() {
        return Err(GeoNotesError::InvalidAttachment(format!(
            "{} url is required",
            kind
        )));
    }
    Ok(url)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Photo {
    url: String,
    width: i32,
    height: i32,
}

impl Photo {
    pub fn new(url: impl Into<String>, width: i32, height: i32) -> Result<Self> {
        let url = require_url("photo", url.into())?;
        if width <= 0 || height <= 0 {
            return Err(GeoNotesError::InvalidAttachment(format!(
                "invalid photo dimensions: {}x{}",
                width, height
            )));
        }
        Ok(Self { url, width, height })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Audio {
    url: String,
    /// Length in seconds
    duration: i32,
}

impl Audio {
    pub fn new(url: impl Into<String>, duration: i32) -> Result<Self> {
        let url = require_url("audio", url.into())?;
        if duration < 0 {
            return Err(GeoNotesError::InvalidAttachment(format!(
                "audio duration cannot be negative: {}",
                duration
            )));
        }
        Ok(Self { url, duration })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    url: String,
    label: Option<String>,
}

impl Link {
    /// A blank label is stored as absent.
    pub fn new(url: impl Into<String>, label: Option<String>) -> Result<Self> {
        let url = require_url("link", url.into())?;
        let label = label.filter(|l| !l.trim().is_empty());
        Ok(Self { url, label })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The label when present, otherwise the url.
    pub fn effective_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    url: String,
    seconds: i32,
}

impl Video {
    pub fn new(url: impl Into<String>, seconds: i32) -> Result<Self> {
        let url = require_url("video", url.into())?;
        if seconds < 0 {
            return Err(GeoNotesError::InvalidAttachment(format!(
                "video length cannot be negative: {}",
                seconds
            )));
        }
        Ok(Self { url, seconds })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn seconds(&self) -> i32 {
        self.seconds
    }
}

/// Media reference attached to a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Attachment {
    Photo(Photo),
    Audio(Audio),
    Link(Link),
    Video(Video),
}

impl Attachment {
    pub fn photo(url: impl Into<String>, width: i32, height: i32) -> Result<Self> {
        Photo::new(url, width, height).map(Attachment::Photo)
    }

    pub fn audio(url: impl Into<String>, duration: i32) -> Result<Self> {
        Audio::new(url, duration).map(Attachment::Audio)
    }

    pub fn link(url: impl Into<String>, label: Option<String>) -> Result<Self> {
        Link::new(url, label).map(Attachment::Link)
    }

    pub fn video(url: impl Into<String>, seconds: i32) -> Result<Self> {
        Video::new(url, seconds).map(Attachment::Video)
    }

    pub fn url(&self) -> &str {
        match self {
            Attachment::Photo(p) => p.url(),
            Attachment::Audio(a) => a.url(),
            Attachment::Link(l) => l.url(),
            Attachment::Video(v) => v.url(),
        }
    }

    /// Human label derived from the variant and its size/length thresholds.
    pub fn describe(&self) -> String {
        match self {
            Attachment::Photo(p) if p.width > HD_WIDTH_THRESHOLD => {
                format!("📷 High-definition photo ({} x {})", p.width, p.height)
            }
            Attachment::Photo(_) => "📷 Photo".to_string(),
            Attachment::Audio(a) if a.duration > LONG_AUDIO_SECONDS => {
                format!("🎵 Audio ({} min)", a.duration / 60)
            }
            Attachment::Audio(_) => "🎵 Audio".to_string(),
            Attachment::Link(l) => format!("🔗 {}", l.effective_label()),
            Attachment::Video(v) if v.seconds > LONG_VIDEO_SECONDS => "🎬 Long video".to_string(),
            Attachment::Video(_) => "🎬 Video".to_string(),
        }
    }
}

impl std::fmt::Display for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
