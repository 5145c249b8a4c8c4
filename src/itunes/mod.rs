//! iTunes library parsing
//!
//! Parses iTunes/Music property-list exports and extracts the ordered
//! track list of their first playlist.

mod document;
mod model;
mod tracks;

pub use document::{load_document, read_document};
pub use model::{LibraryDocument, PlaylistItem, PlaylistRecord};
pub use tracks::{extract_tracks, first_playlist, try_extract_tracks};
