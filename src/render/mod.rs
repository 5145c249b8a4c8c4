//! Playlist rendering
//!
//! Each output syntax implements `PlaylistRenderer`, so the pipeline can
//! swap formats without knowing their details.

mod m3u;
mod traits;
mod xspf;

pub use m3u::M3uRenderer;
pub use traits::PlaylistRenderer;
pub use xspf::XspfRenderer;
