//! Property-list loader
//!
//! Accepts both the XML and the binary (`bplist00`) encodings; the `plist`
//! crate detects which one it is looking at.

use super::model::LibraryDocument;
use crate::error::LoadError;
use std::io::Cursor;
use std::path::Path;

/// Parse raw document bytes into a library document
pub fn load_document(bytes: &[u8]) -> Result<LibraryDocument, LoadError> {
    let document: LibraryDocument = plist::from_reader(Cursor::new(bytes))?;
    log::debug!(
        "Parsed property list: {} tracks, {} playlists",
        document.tracks.len(),
        document.playlists.len()
    );
    Ok(document)
}

/// Read and parse a library document from disk
pub fn read_document(path: &Path) -> Result<LibraryDocument, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_document(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple Computer//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>Major Version</key><integer>1</integer>
	<key>Date</key><date>2016-08-22T14:31:48Z</date>
	<key>Tracks</key>
	<dict>
		<key>17</key>
		<dict>
			<key>Track ID</key><integer>17</integer>
			<key>Name</key><string>Margaritaville</string>
			<key>Total Time</key><integer>250000</integer>
			<key>Date Added</key><date>2014-01-21T23:43:47Z</date>
			<key>Purchased</key><true/>
		</dict>
	</dict>
</dict>
</plist>
"#;

    #[test]
    fn test_load_xml_ignores_unknown_fields() {
        let document = load_document(MINIMAL.as_bytes()).unwrap();

        let track = document.track(17).unwrap();
        assert_eq!(track.name.as_deref(), Some("Margaritaville"));
        assert_eq!(track.total_time_ms, Some(250_000));
        assert!(track.artist.is_none());
        assert!(document.playlists.is_empty());
    }

    #[test]
    fn test_load_rejects_garbage() {
        assert!(matches!(
            load_document(b"definitely not a plist"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_document(Path::new("/nonexistent/Library.xml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
