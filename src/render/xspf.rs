//! XSPF renderer
//!
//! Durations stay in milliseconds, as XSPF expects. Only the location is
//! normalized; text fields are XML-escaped as-is.

use super::traits::{missing_field, PlaylistRenderer};
use crate::error::RenderError;
use crate::location::{normalize, percent_decode, percent_encode_path, strip_scheme};
use crate::model::Track;
use quick_xml::escape::partial_escape;

const XSPF_NAMESPACE: &str = "http://xspf.org/ns/0/";

/// XML Shareable Playlist Format renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct XspfRenderer;

impl XspfRenderer {
    pub fn new() -> Self {
        Self
    }
}

/// `file://` URI for a stored location, ready to embed in XML
fn location_uri(location: &str) -> String {
    let path = normalize(&percent_decode(strip_scheme(location)));
    format!("file://{}", partial_escape(percent_encode_path(&path).as_str()))
}

impl PlaylistRenderer for XspfRenderer {
    fn render_track(&self, track: &Track) -> Result<String, RenderError> {
        let location = track
            .location
            .as_deref()
            .ok_or_else(|| missing_field("Location", track))?;

        let duration = track
            .total_time_ms
            .map(|ms| ms.to_string())
            .unwrap_or_default();

        Ok(format!(
            "    <track>\n\
             \x20     <location>{}</location>\n\
             \x20     <title>{}</title>\n\
             \x20     <creator>{}</creator>\n\
             \x20     <album>{}</album>\n\
             \x20     <duration>{}</duration>\n\
             \x20   </track>",
            location_uri(location),
            partial_escape(track.title()),
            partial_escape(track.resolved_artist()),
            partial_escape(track.album.as_deref().unwrap_or("")),
            duration,
        ))
    }

    fn render_list(&self, _name: &str, fragments: &[String]) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <playlist version=\"1\" xmlns=\"{}\">\n\
             \x20 <trackList>\n\
             {}\n\
             \x20 </trackList>\n\
             </playlist>\n",
            XSPF_NAMESPACE,
            fragments.join("\n"),
        )
    }
}
