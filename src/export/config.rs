//! Conversion configuration

use crate::error::ConvertError;
use crate::render::{M3uRenderer, PlaylistRenderer, XspfRenderer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Target playlist format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Extended M3U
    M3u,

    /// Extended M3U, UTF-8 (same syntax, `.m3u8` extension)
    M3u8,

    /// XML Shareable Playlist Format
    Xspf,
}

impl OutputFormat {
    /// Canonical file extension (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::M3u => "m3u",
            OutputFormat::M3u8 => "m3u8",
            OutputFormat::Xspf => "xspf",
        }
    }

    /// Renderer producing this format
    pub fn renderer(&self) -> Box<dyn PlaylistRenderer> {
        match self {
            OutputFormat::M3u | OutputFormat::M3u8 => Box::new(M3uRenderer::new()),
            OutputFormat::Xspf => Box::new(XspfRenderer::new()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m3u" => Ok(OutputFormat::M3u),
            "m3u8" => Ok(OutputFormat::M3u8),
            "xspf" => Ok(OutputFormat::Xspf),
            _ => Err(ConvertError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Configuration for a conversion run
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Exported playlist document, or a directory of them
    pub target_path: PathBuf,

    /// Output file or directory (None = alongside the target)
    pub output_path: Option<PathBuf>,

    /// Playlist format to produce
    pub format: OutputFormat,

    /// Music base path replacing the iTunes media folder (None = keep the
    /// original locations)
    pub music_path: Option<String>,
}

impl ConvertConfig {
    /// Create a new conversion configuration
    pub fn new(target_path: PathBuf, format: OutputFormat) -> Self {
        Self {
            target_path,
            output_path: None,
            format,
            music_path: None,
        }
    }

    /// Set the output file or directory
    pub fn with_output(mut self, output_path: PathBuf) -> Self {
        self.output_path = Some(output_path);
        self
    }

    /// Set the music base path used to rewrite track locations
    ///
    /// A blank path means no rewrite.
    pub fn with_music_path(mut self, music_path: String) -> Self {
        self.music_path = Some(music_path).filter(|base| !base.trim().is_empty());
        self
    }

    /// Check the request before any conversion work starts
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !self.target_path.exists() {
            return Err(ConvertError::TargetNotFound(self.target_path.clone()));
        }
        Ok(())
    }
}
