mod timeline;

pub use timeline::Timeline;
