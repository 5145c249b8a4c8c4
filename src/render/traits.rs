//! Renderer trait definition

use crate::error::RenderError;
use crate::model::Track;

/// Playlist renderer trait - one implementation per output syntax
pub trait PlaylistRenderer {
    /// Render a single track into this format's track fragment
    fn render_track(&self, track: &Track) -> Result<String, RenderError>;

    /// Assemble already-rendered fragments into a complete document
    fn render_list(&self, name: &str, fragments: &[String]) -> String;

    /// Render a whole playlist
    ///
    /// The first track that cannot be rendered fails the whole document;
    /// there are no partial playlists.
    fn render_playlist(&self, name: &str, tracks: &[Track]) -> Result<String, RenderError> {
        let fragments = tracks
            .iter()
            .map(|track| self.render_track(track))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.render_list(name, &fragments))
    }
}

/// Error for a track lacking `field`
pub(crate) fn missing_field(field: &'static str, track: &Track) -> RenderError {
    RenderError::MissingField {
        field,
        title: track.title().to_string(),
    }
}
