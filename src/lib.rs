pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod export;
pub mod search;
pub mod storage;

pub use config::Config;
pub use error::{GeoNotesError, Result};
pub use storage::Timeline;
