//! Track location handling
//!
//! Percent-encoding helpers shared by the renderers, and the rewriter that
//! moves locations from the iTunes media root to a new music base.

mod rewrite;
mod uri;

pub use rewrite::{strip_media_root, LocationRewriter};
pub use uri::{normalize, percent_decode, percent_encode_path, strip_scheme};
