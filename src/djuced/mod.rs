//! DJUCED library database
//!
//! DJUCED keeps its library in a SQLite database. Tracks are joined to
//! their cues, beat grids and playlist entries by absolute file path;
//! there are no declared foreign keys.

mod columns;
mod defaults;
mod reader;
mod schema;
mod writer;

pub use reader::parse_library;
pub use writer::write_library;

use crate::format::{LibraryReader, LibraryWriter};
use crate::model::Library;
use anyhow::Result;
use std::path::Path;

/// `playlists2.type` of a playlist row
const PLAYLIST_ROW: i64 = 0;

/// `playlists2.type` of a playlist membership row
const MEMBERSHIP_ROW: i64 = 3;

/// DJUCED database format
pub struct DjucedDatabase;

impl LibraryReader for DjucedDatabase {
    fn parse(&self, source: &Path) -> Result<Library> {
        parse_library(source)
    }
}

impl LibraryWriter for DjucedDatabase {
    fn write(&self, destination: &Path, library: &Library) -> Result<()> {
        write_library(destination, library)
    }
}
