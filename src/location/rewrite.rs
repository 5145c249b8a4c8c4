//! Track location rewriting
//!
//! Moves a location from the source library's media root onto a new music
//! base path: strip scheme, decode, drop the media-root prefix, join onto
//! the base, encode.

use super::uri::{percent_decode, percent_encode_path, strip_scheme};
use crate::model::Track;
use regex::Regex;
use std::sync::LazyLock;

/// Per-user iTunes media root, macOS (`/Users/x/Music/iTunes/...`) or
/// Windows (`\Users\x\My Music\iTunes\...`)
static MEDIA_ROOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[\\/]Users[\\/][\w.\-]+[\\/]",
        r"(?:My )?Music[\\/]iTunes[\\/]",
        r"iTunes(?: |%20)Media[\\/]",
        r"(?:Music[\\/])?"
    ))
    .expect("media root pattern is valid")
});

/// Path suffix below the iTunes media root, if the path lives under one
pub fn strip_media_root(path: &str) -> Option<&str> {
    MEDIA_ROOT.find(path).map(|m| &path[m.end()..])
}

/// Rewrites track locations onto a target music base path
#[derive(Debug, Clone)]
pub struct LocationRewriter {
    /// Base path with trailing separators removed
    base: String,

    /// Segment separator used on the target side
    separator: char,
}

impl LocationRewriter {
    /// Create a rewriter for the given music base path
    ///
    /// The separator convention is taken from the base: backslashes or a
    /// bare drive letter (`D:`) select Windows style, anything else `/`.
    pub fn new(base: &str) -> Self {
        let separator = if is_windows_style(base) { '\\' } else { '/' };
        Self {
            base: base.trim_end_matches(['/', '\\']).to_string(),
            separator,
        }
    }

    /// Rewrite a single stored location
    ///
    /// Locations outside an iTunes media root keep their decoded path and
    /// are not joined onto the base.
    pub fn rewrite_path(&self, location: &str) -> String {
        let decoded = percent_decode(strip_scheme(location));

        let rewritten = match strip_media_root(&decoded) {
            Some(suffix) => self.join(suffix),
            None => {
                log::debug!("Location outside iTunes media root: {}", decoded);
                decoded
            }
        };

        percent_encode_path(&rewritten)
    }

    /// Rewrite the track's location, leaving every other field untouched
    pub fn rewrite(&self, mut track: Track) -> Track {
        if let Some(location) = track.location.take() {
            track.location = Some(self.rewrite_path(&location));
        }
        track
    }

    fn join(&self, suffix: &str) -> String {
        let suffix: String = suffix
            .chars()
            .map(|c| if c == '/' || c == '\\' { self.separator } else { c })
            .collect();
        format!("{}{}{}", self.base, self.separator, suffix)
    }
}

fn is_windows_style(base: &str) -> bool {
    if base.contains('\\') {
        return true;
    }
    let mut chars = base.chars();
    let drive = matches!(
        (chars.next(), chars.next()),
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic()
    );
    drive && !base.contains('/')
}
