//! Unified data model for DJ library representation
//!
//! This module defines data structures that are independent of
//! both the DJUCED database and the rekordbox XML format.

mod cue;
mod library;
mod path;
mod playlist;
mod track;

pub use cue::{Color, CuePoint, COLORS};
pub use library::{Library, Sample};
pub use path::TrackPath;
pub use playlist::Playlist;
pub use track::Track;
