//! Main conversion pipeline orchestration

use super::config::ConvertConfig;
use super::organizer::{list_name, source_documents, OutputOrganizer};
use super::reporter::Reporter;
use crate::error::{ConvertError, DocumentError};
use crate::itunes::{read_document, try_extract_tracks};
use crate::location::LocationRewriter;
use crate::model::Track;
use crate::render::PlaylistRenderer;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of converting one input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Input document
    pub source: PathBuf,

    /// Where the playlist should be written
    pub destination: PathBuf,

    /// Rendered playlist, empty when the document could not be converted
    pub contents: String,

    /// Number of tracks rendered
    pub track_count: usize,
}

impl Conversion {
    /// Whether there is nothing to write
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Main conversion pipeline
pub struct ConversionPipeline<R: Reporter> {
    config: ConvertConfig,
    organizer: OutputOrganizer,
    renderer: Box<dyn PlaylistRenderer>,
    rewriter: Option<LocationRewriter>,
    reporter: R,
}

impl<R: Reporter> ConversionPipeline<R> {
    /// Create a new conversion pipeline
    ///
    /// Validates the request and resolves the output destination, so
    /// configuration mistakes fail here before any document is read.
    pub fn new(config: ConvertConfig, reporter: R) -> Result<Self, ConvertError> {
        config.validate()?;
        let organizer = OutputOrganizer::new(&config)?;
        let renderer = config.format.renderer();
        let rewriter = config
            .music_path
            .as_deref()
            .filter(|base| !base.trim().is_empty())
            .map(LocationRewriter::new);

        Ok(Self {
            config,
            organizer,
            renderer,
            rewriter,
            reporter,
        })
    }

    pub fn organizer(&self) -> &OutputOrganizer {
        &self.organizer
    }

    /// Convert every input document of the target
    ///
    /// Returns one entry per document, in input order. Documents that could
    /// not be converted have empty contents. When two documents map to the
    /// same output file (`Mix.xml` and `Mix.plist`), the first one wins.
    pub fn run(&self) -> Result<Vec<Conversion>, ConvertError> {
        let start = Instant::now();
        let target = &self.config.target_path;

        let sources = if target.is_dir() {
            self.reporter.scanning(target);
            let sources = source_documents(target)?;
            self.reporter.scanned(target, sources.len());
            sources
        } else {
            vec![target.clone()]
        };

        let total = sources.len();
        let mut claimed = HashSet::new();
        let conversions: Vec<Conversion> = sources
            .iter()
            .enumerate()
            .map(|(i, source)| {
                self.reporter.converting(source, i + 1, total);

                let destination = self.organizer.destination(source);
                if !claimed.insert(destination.clone()) {
                    let reason = DocumentError::DuplicateDestination(destination.clone());
                    self.reporter.skipped(source, &reason);
                    return Conversion {
                        source: source.clone(),
                        destination,
                        contents: String::new(),
                        track_count: 0,
                    };
                }

                self.convert_document(source)
            })
            .collect();

        let converted = conversions.iter().filter(|c| !c.is_empty()).count();
        self.reporter.finished(converted, total, start.elapsed());

        Ok(conversions)
    }

    /// Convert a single input document
    pub fn convert_document(&self, source: &Path) -> Conversion {
        let destination = self.organizer.destination(source);

        let (contents, track_count) = match self.render_document(source) {
            Ok((contents, track_count)) => {
                self.reporter.converted(source, track_count);
                (contents, track_count)
            }
            Err(reason) => {
                self.reporter.skipped(source, &reason);
                (String::new(), 0)
            }
        };

        Conversion {
            source: source.to_path_buf(),
            destination,
            contents,
            track_count,
        }
    }

    /// load -> extract -> rewrite -> render
    fn render_document(&self, source: &Path) -> Result<(String, usize), DocumentError> {
        let document = read_document(source)?;
        let tracks = try_extract_tracks(&document)?;
        let tracks = self.rewrite_locations(tracks);
        let contents = self
            .renderer
            .render_playlist(&list_name(source), &tracks)?;
        Ok((contents, tracks.len()))
    }

    fn rewrite_locations(&self, tracks: Vec<Track>) -> Vec<Track> {
        match &self.rewriter {
            Some(rewriter) => tracks.into_iter().map(|t| rewriter.rewrite(t)).collect(),
            None => tracks,
        }
    }
}
