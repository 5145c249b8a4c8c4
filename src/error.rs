//! Error types
//!
//! Loading, extraction and rendering failures are scoped to a single input
//! document and never abort a run. `ConvertError` is the only fatal kind.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or parse a property-list document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a valid property list: {0}")]
    Parse(#[from] plist::Error),
}

/// Structural problem found while walking a parsed document
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("document declares no playlists")]
    NoPlaylists,

    #[error("playlist '{0}' has no items")]
    NoItems(String),

    #[error("playlist references unknown track {0}")]
    DanglingTrack(u64),
}

/// A track is missing a field the target format cannot do without
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("track '{title}' is missing required field '{field}'")]
    MissingField { field: &'static str, title: String },
}

/// Fatal conversion failure, aborts the whole run
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{0:?} does not exist")]
    TargetNotFound(PathBuf),

    #[error("{0:?} is not a directory")]
    InvalidDestination(PathBuf),

    #[error("unknown output format '{0}' (expected m3u, m3u8 or xspf)")]
    UnknownFormat(String),

    #[error("failed to scan {path:?}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Why a single input document produced no playlist
///
/// These never abort a run; the document is reported and skipped.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("not a valid iTunes playlist file: {0}")]
    Load(#[from] LoadError),

    #[error("no tracks extracted: {0}")]
    Extract(#[from] ExtractError),

    #[error("cannot render playlist: {0}")]
    Render(#[from] RenderError),

    #[error("{0:?} is already the output of an earlier document")]
    DuplicateDestination(PathBuf),
}
