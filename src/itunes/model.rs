//! Internal shape of an iTunes library property list

use crate::model::Track;
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level library document
///
/// Both tables default to empty so a document missing either key still
/// parses; the extractor decides what an empty table means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibraryDocument {
    /// Track records keyed by their decimal track ID
    #[serde(rename = "Tracks", default)]
    pub tracks: HashMap<String, Track>,

    /// Declared playlists, in document order
    #[serde(rename = "Playlists", default)]
    pub playlists: Vec<PlaylistRecord>,
}

/// Playlist entry as stored in the `Playlists` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistRecord {
    #[serde(rename = "Name", default)]
    pub name: String,

    #[serde(rename = "Playlist Items", default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlaylistItem {
    #[serde(rename = "Track ID")]
    pub track_id: u64,
}

impl LibraryDocument {
    /// Look up a track record by its numeric ID
    pub fn track(&self, id: u64) -> Option<&Track> {
        self.tracks.get(&id.to_string())
    }
}
