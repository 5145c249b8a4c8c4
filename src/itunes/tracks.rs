//! Track extraction
//!
//! Only the first playlist of a document is honoured, and output order is
//! always the playlist's item order, never the order of the track table.

use super::model::LibraryDocument;
use crate::error::ExtractError;
use crate::model::{Playlist, Track};

/// First declared playlist of the document
pub fn first_playlist(document: &LibraryDocument) -> Result<Playlist, ExtractError> {
    let record = document
        .playlists
        .first()
        .ok_or(ExtractError::NoPlaylists)?;

    if record.items.is_empty() {
        return Err(ExtractError::NoItems(record.name.clone()));
    }

    let mut playlist = Playlist::new(record.name.clone());
    for item in &record.items {
        playlist.add_track(item.track_id);
    }
    Ok(playlist)
}

/// Resolve the first playlist into its ordered track records
///
/// Extraction is all-or-nothing: a single dangling reference fails the
/// whole document.
pub fn try_extract_tracks(document: &LibraryDocument) -> Result<Vec<Track>, ExtractError> {
    let playlist = first_playlist(document)?;

    playlist
        .track_ids()
        .map(|id| {
            document
                .track(id)
                .cloned()
                .ok_or(ExtractError::DanglingTrack(id))
        })
        .collect()
}

/// Ordered tracks of the first playlist, or nothing if the document is
/// structurally incomplete
pub fn extract_tracks(document: &LibraryDocument) -> Vec<Track> {
    match try_extract_tracks(document) {
        Ok(tracks) => tracks,
        Err(e) => {
            log::debug!("No tracks extracted: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itunes::model::{PlaylistItem, PlaylistRecord};

    fn named(name: &str) -> Track {
        Track {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn document(order: &[u64]) -> LibraryDocument {
        let mut doc = LibraryDocument::default();
        doc.tracks.insert("1".to_string(), named("one"));
        doc.tracks.insert("2".to_string(), named("two"));
        doc.tracks.insert("3".to_string(), named("three"));
        doc.playlists.push(PlaylistRecord {
            name: "Mix".to_string(),
            items: order
                .iter()
                .map(|&track_id| PlaylistItem { track_id })
                .collect(),
        });
        doc
    }

    #[test]
    fn test_follows_playlist_order() {
        let tracks = extract_tracks(&document(&[3, 1, 2]));
        let names: Vec<_> = tracks.iter().map(Track::title).collect();
        assert_eq!(names, vec!["three", "one", "two"]);
    }

    #[test]
    fn test_only_first_playlist() {
        let mut doc = document(&[2]);
        doc.playlists.push(PlaylistRecord {
            name: "Other".to_string(),
            items: vec![PlaylistItem { track_id: 1 }],
        });

        let tracks = extract_tracks(&doc);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title(), "two");
    }

    #[test]
    fn test_no_playlists_is_empty() {
        let mut doc = document(&[1]);
        doc.playlists.clear();

        assert_eq!(try_extract_tracks(&doc), Err(ExtractError::NoPlaylists));
        assert!(extract_tracks(&doc).is_empty());
    }

    #[test]
    fn test_empty_playlist_is_empty() {
        let doc = document(&[]);
        assert_eq!(
            try_extract_tracks(&doc),
            Err(ExtractError::NoItems("Mix".to_string()))
        );
    }

    #[test]
    fn test_dangling_reference_discards_everything() {
        let doc = document(&[1, 99, 2]);
        assert_eq!(try_extract_tracks(&doc), Err(ExtractError::DanglingTrack(99)));
        assert!(extract_tracks(&doc).is_empty());
    }
}
