//! djconvert - DJ library converter
//!
//! Converts DJUCED library databases into rekordbox XML collections or
//! fresh DJUCED databases. All formats go through the common `model`.

pub mod convert;
pub mod djuced;
pub mod error;
pub mod format;
pub mod model;
pub mod rekordbox;
pub mod validation;

pub use convert::{ConversionConfig, ConversionPipeline};
pub use error::ConvertError;
pub use format::{Format, LibraryReader, LibraryWriter};
