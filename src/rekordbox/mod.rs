//! rekordbox XML collection
//!
//! Only writing is supported. The reader exists so the format can be
//! named as a source, and refuses before touching the file.

mod node;
mod values;
mod writer;

pub use node::{Element, Node, TreeWriter};
pub use values::{format_decimal, kind_for_extension, tonality};
pub use writer::{write_collection, write_xml};

use crate::error::ConvertError;
use crate::format::{LibraryReader, LibraryWriter};
use crate::model::Library;
use anyhow::Result;
use std::path::Path;

/// rekordbox XML format
pub struct RekordboxXml;

impl LibraryReader for RekordboxXml {
    fn parse(&self, _source: &Path) -> Result<Library> {
        Err(ConvertError::ReadNotSupported("rekordbox").into())
    }
}

impl LibraryWriter for RekordboxXml {
    fn write(&self, destination: &Path, library: &Library) -> Result<()> {
        write_xml(destination, library)
    }
}
