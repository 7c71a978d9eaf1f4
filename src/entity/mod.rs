mod attachment;
mod geo;
mod note;

pub use attachment::{
    Attachment, Audio, Link, Photo, Video, HD_WIDTH_THRESHOLD, LONG_AUDIO_SECONDS,
    LONG_VIDEO_SECONDS,
};
pub use geo::{GeoArea, GeoPoint};
pub use note::{newest_first, Note, NoteDraft, EMPTY_CONTENT, MIN_TITLE_LEN};
