//! Conversion error types
//!
//! Every error here aborts the conversion. Lossy fields that fall back to
//! defaults are not errors and never show up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// A row references a track path that is not in the tracks table
    #[error("{referenced_by} references track '{path}', which is not in the tracks table")]
    UnknownTrackPath {
        path: String,
        referenced_by: &'static str,
    },

    /// A playlist references a track id that is not in the library
    #[error("Playlist '{playlist}' references track id {track_id}, which is not in the library")]
    UnknownTrackId { playlist: String, track_id: i64 },

    #[error("Source database is missing required table '{0}'")]
    MissingTable(&'static str),

    /// The destination already contains a table this writer would create
    #[error("Destination already contains table '{0}'; refusing to merge into an existing library")]
    SchemaCollision(String),

    #[error("Unknown format '{0}' (expected one of: djuced, rekordbox, rb)")]
    UnknownFormat(String),

    #[error("Reading {0} libraries is not supported")]
    ReadNotSupported(&'static str),
}
