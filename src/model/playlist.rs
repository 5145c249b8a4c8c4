/// Represents a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Playlist entries (ordered)
    pub entries: Vec<PlaylistEntry>,
}

/// Entry in a playlist, referencing a track by ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    /// Track ID (key into the document's track table)
    pub track_id: u64,

    /// Position in playlist (0-based)
    pub position: u32,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Add a track to this playlist
    pub fn add_track(&mut self, track_id: u64) {
        let position = self.entries.len() as u32;
        self.entries.push(PlaylistEntry { track_id, position });
    }

    /// Track IDs in playlist order
    pub fn track_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|e| e.track_id)
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
