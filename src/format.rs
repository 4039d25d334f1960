//! Format registry and the reader/writer seam
//!
//! Each on-disk format implements `LibraryReader` and `LibraryWriter`.
//! Components never talk to each other directly; everything flows
//! through a `Library`.

use crate::djuced::DjucedDatabase;
use crate::error::ConvertError;
use crate::model::Library;
use crate::rekordbox::RekordboxXml;
use anyhow::Result;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Loads a complete library from a source file
pub trait LibraryReader {
    fn parse(&self, source: &Path) -> Result<Library>;
}

/// Persists a complete library to a destination file
pub trait LibraryWriter {
    fn write(&self, destination: &Path, library: &Library) -> Result<()>;
}

/// Supported library formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// DJUCED SQLite database
    Djuced,

    /// rekordbox XML collection
    Rekordbox,
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Format::Djuced => "djuced",
            Format::Rekordbox => "rekordbox",
        }
    }

    pub fn reader(&self) -> Box<dyn LibraryReader> {
        match self {
            Format::Djuced => Box::new(DjucedDatabase),
            Format::Rekordbox => Box::new(RekordboxXml),
        }
    }

    pub fn writer(&self) -> Box<dyn LibraryWriter> {
        match self {
            Format::Djuced => Box::new(DjucedDatabase),
            Format::Rekordbox => Box::new(RekordboxXml),
        }
    }

    /// Whether `reader()` can actually load libraries of this format
    pub fn can_read(&self) -> bool {
        matches!(self, Format::Djuced)
    }
}

impl FromStr for Format {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "djuced" => Ok(Format::Djuced),
            "rekordbox" | "rb" => Ok(Format::Rekordbox),
            other => Err(ConvertError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
