//! Conversion orchestration and output layout

pub mod config;
pub mod organizer;
pub mod pipeline;
pub mod reporter;

pub use config::{ConvertConfig, OutputFormat};
pub use organizer::{write_conversion, Destination, OutputOrganizer};
pub use pipeline::{Conversion, ConversionPipeline};
pub use reporter::{LogReporter, Reporter, SilentReporter};
