//! iTunes Playlister - iTunes playlist exports to portable playlists
//!
//! This library converts playlists exported from iTunes/Music as property
//! lists into M3U, M3U8 and XSPF playlists, optionally moving track
//! locations onto a different music folder.

pub mod error;
pub mod export;
pub mod itunes;
pub mod location;
pub mod model;
pub mod render;

pub use export::config::{ConvertConfig, OutputFormat};
pub use export::pipeline::{Conversion, ConversionPipeline};
