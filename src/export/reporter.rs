//! Progress reporting
//!
//! The pipeline narrates what it does through a `Reporter`. Reporting never
//! changes control flow.

use crate::error::DocumentError;
use std::path::Path;
use std::time::Duration;

/// Receives progress events from a conversion run
///
/// Every method defaults to doing nothing.
pub trait Reporter {
    /// About to scan a directory for playlist documents
    fn scanning(&self, _dir: &Path) {}

    /// Directory scan finished
    fn scanned(&self, _dir: &Path, _found: usize) {}

    /// Starting document `index` of `total` (1-based)
    fn converting(&self, _source: &Path, _index: usize, _total: usize) {}

    /// Document converted successfully
    fn converted(&self, _source: &Path, _tracks: usize) {}

    /// Document produced no playlist
    fn skipped(&self, _source: &Path, _reason: &DocumentError) {}

    /// Run complete
    fn finished(&self, _converted: usize, _total: usize, _elapsed: Duration) {}
}

/// Reporter that stays quiet
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// Reporter that narrates through the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for LogReporter {
    fn scanning(&self, dir: &Path) {
        log::info!("{:?} is a directory, scanning for playlist files...", dir);
    }

    fn scanned(&self, _dir: &Path, found: usize) {
        log::info!("Found {} playlist file{}", found, plural(found));
    }

    fn converting(&self, source: &Path, index: usize, total: usize) {
        log::info!("[{}/{}] Converting {:?}", index, total, source);
    }

    fn converted(&self, source: &Path, tracks: usize) {
        log::info!("Converted {:?}: {} track{}", source, tracks, plural(tracks));
    }

    fn skipped(&self, source: &Path, reason: &DocumentError) {
        log::warn!("Skipping {:?}: {}", source, reason);
    }

    fn finished(&self, converted: usize, total: usize, elapsed: Duration) {
        log::info!(
            "All finished. Converted {} of {} file{} in {:.3} seconds",
            converted,
            total,
            plural(total),
            elapsed.as_secs_f64()
        );
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn scanning(&self, dir: &Path) {
        (**self).scanning(dir)
    }

    fn scanned(&self, dir: &Path, found: usize) {
        (**self).scanned(dir, found)
    }

    fn converting(&self, source: &Path, index: usize, total: usize) {
        (**self).converting(source, index, total)
    }

    fn converted(&self, source: &Path, tracks: usize) {
        (**self).converted(source, tracks)
    }

    fn skipped(&self, source: &Path, reason: &DocumentError) {
        (**self).skipped(source, reason)
    }

    fn finished(&self, converted: usize, total: usize, elapsed: Duration) {
        (**self).finished(converted, total, elapsed)
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
