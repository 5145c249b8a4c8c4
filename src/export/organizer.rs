//! Input discovery and output file layout

use super::config::ConvertConfig;
use super::pipeline::Conversion;
use crate::error::ConvertError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions recognised as playlist documents when scanning a directory
const DOCUMENT_EXTENSIONS: &[&str] = &["xml", "plist"];

/// Where converted playlists are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// One `<name>.<ext>` file per input document inside this directory
    Directory(PathBuf),

    /// Exactly this file (single-document targets only)
    File(PathBuf),
}

/// Maps input documents to output files
#[derive(Debug, Clone)]
pub struct OutputOrganizer {
    destination: Destination,

    /// Output file extension (without the dot)
    extension: &'static str,
}

impl OutputOrganizer {
    /// Resolve the output destination for a conversion request
    ///
    /// Without an explicit output path, playlists land next to the target
    /// document (or inside the target directory). A non-directory output
    /// path is only accepted for a single-document target.
    pub fn new(config: &ConvertConfig) -> Result<Self, ConvertError> {
        let target = &config.target_path;

        let destination = match &config.output_path {
            None if target.is_dir() => Destination::Directory(target.clone()),
            None => Destination::Directory(parent_dir(target)),
            Some(output) if output.is_dir() => Destination::Directory(output.clone()),
            Some(output) if !target.is_dir() => Destination::File(output.clone()),
            Some(output) => return Err(ConvertError::InvalidDestination(output.clone())),
        };

        log::debug!("Output destination: {:?}", destination);

        Ok(Self {
            destination,
            extension: config.format.extension(),
        })
    }

    pub fn destination_kind(&self) -> &Destination {
        &self.destination
    }

    /// Output path for an input document
    pub fn destination(&self, source: &Path) -> PathBuf {
        match &self.destination {
            Destination::Directory(dir) => {
                dir.join(format!("{}.{}", list_name(source), self.extension))
            }
            Destination::File(file) => file.clone(),
        }
    }
}

/// Playlist name for an input document: its file stem
pub fn list_name(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Input documents for a target
///
/// A file target is its own sole document. A directory is scanned
/// non-recursively for visible `.xml`/`.plist` files, sorted by name.
pub fn source_documents(target: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !target.is_dir() {
        return Ok(vec![target.to_path_buf()]);
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(target)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ConvertError::Scan {
            path: target.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if path.is_file() && !is_hidden(path) && is_playlist_document(path) {
            documents.push(path.to_path_buf());
        } else {
            log::debug!("Ignoring {:?}", path);
        }
    }

    Ok(documents)
}

/// Write a converted playlist to its destination
///
/// Returns false without touching the filesystem when the conversion has
/// no contents.
pub fn write_conversion(conversion: &Conversion) -> Result<bool> {
    if conversion.is_empty() {
        log::info!(
            "No contents to write for {:?}, skipping",
            conversion.destination
        );
        return Ok(false);
    }

    if let Some(parent) = conversion.destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!(
                    "Failed to create directory {:?} for playlist {:?}",
                    parent, conversion.destination
                )
            })?;
        }
    }

    fs::write(&conversion.destination, &conversion.contents)
        .with_context(|| format!("Failed to write playlist {:?}", conversion.destination))?;

    log::debug!("Wrote {:?}", conversion.destination);
    Ok(true)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_playlist_document(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            DOCUMENT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
