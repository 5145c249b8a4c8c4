//! Unified data model for playlist conversion
//!
//! These structures are independent of both the input property-list
//! layout and the output playlist syntax.

mod playlist;
mod track;

pub use playlist::{Playlist, PlaylistEntry};
pub use track::Track;
