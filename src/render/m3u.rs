//! Extended M3U renderer
//!
//! Durations are whole seconds; titles, artists and locations are
//! percent-decoded and NFC-normalized.

use super::traits::{missing_field, PlaylistRenderer};
use crate::error::RenderError;
use crate::location::{normalize, percent_decode, strip_scheme};
use crate::model::Track;

const HEADER: &str = "#EXTM3U";

/// Line-oriented renderer shared by `.m3u` and `.m3u8` output
#[derive(Debug, Clone, Copy, Default)]
pub struct M3uRenderer;

impl M3uRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PlaylistRenderer for M3uRenderer {
    fn render_track(&self, track: &Track) -> Result<String, RenderError> {
        let location = track
            .location
            .as_deref()
            .ok_or_else(|| missing_field("Location", track))?;
        let seconds = track
            .duration_secs()
            .ok_or_else(|| missing_field("Total Time", track))?;

        let location = normalize(&percent_decode(strip_scheme(location)));
        let title = normalize(&percent_decode(track.title()));
        let artist = normalize(&percent_decode(track.resolved_artist()));

        Ok(format!("#EXTINF:{},{} - {}\n{}", seconds, artist, title, location))
    }

    fn render_list(&self, name: &str, fragments: &[String]) -> String {
        format!("{}\n#name={}\n{}\n", HEADER, name, fragments.join("\n"))
    }
}
