use serde::Deserialize;

/// A single track as exported by the media library
///
/// Field names follow the library's property-list keys. Only the fields the
/// renderers consume are kept; everything else in the record is ignored on
/// load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Track {
    /// Track title
    #[serde(rename = "Name")]
    pub name: Option<String>,

    /// Performing artist
    #[serde(rename = "Artist")]
    pub artist: Option<String>,

    /// Album artist, first fallback for `artist`
    #[serde(rename = "Album Artist")]
    pub album_artist: Option<String>,

    /// Composer, second fallback for `artist`
    #[serde(rename = "Composer")]
    pub composer: Option<String>,

    /// Album name
    #[serde(rename = "Album")]
    pub album: Option<String>,

    /// File location, a percent-encoded `file://` URI as stored by the
    /// library, or a percent-encoded path once rewritten
    #[serde(rename = "Location")]
    pub location: Option<String>,

    /// Track duration in milliseconds
    #[serde(rename = "Total Time")]
    pub total_time_ms: Option<u64>,
}

impl Track {
    /// Artist to display for this track
    ///
    /// Resolution order is `Artist`, `Album Artist`, `Composer`, then the
    /// empty string. Empty values fall through to the next candidate.
    pub fn resolved_artist(&self) -> &str {
        [&self.artist, &self.album_artist, &self.composer]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    /// Title, or the empty string when the record has none
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Duration in whole seconds (truncated)
    pub fn duration_secs(&self) -> Option<u64> {
        self.total_time_ms.map(|ms| ms / 1000)
    }
}
