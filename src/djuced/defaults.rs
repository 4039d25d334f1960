//! Values for DJUCED columns this crate does not model
//!
//! DJUCED treats some of these columns as required even though their
//! meaning is unknown. The values are the most common ones found in real
//! DJUCED databases. A new DJUCED schema version should only need
//! changes here.

use rusqlite::types::{ToSql, ToSqlOutput, Value, ValueRef};

/// A fixed column value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sentinel {
    Null,
    Integer(i64),
    Real(f64),
    Text(&'static str),
}

impl ToSql for Sentinel {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match *self {
            Sentinel::Null => ToSqlOutput::Owned(Value::Null),
            Sentinel::Integer(i) => ToSqlOutput::Owned(Value::Integer(i)),
            Sentinel::Real(r) => ToSqlOutput::Owned(Value::Real(r)),
            Sentinel::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnDefault {
    pub column: &'static str,
    pub value: Sentinel,
}

const fn default(column: &'static str, value: Sentinel) -> ColumnDefault {
    ColumnDefault { column, value }
}

/// Unmodeled `tracks` columns
pub const TRACK_DEFAULTS: &[ColumnDefault] = &[
    // unknown
    default("smart_advisor", Sentinel::Null),
    // DJUCED's own "not measured" placeholder
    default("max_val_gain", Sentinel::Real(-9999.0)),
    // unknown
    default("rating", Sentinel::Integer(0)),
    // unknown
    default("tags_read", Sentinel::Integer(1)),
    // DJUCED regenerates the waveform on load
    default("waveform", Sentinel::Null),
    // not computed
    default("danceability", Sentinel::Real(1.0)),
    // unknown
    default("stores", Sentinel::Null),
];

/// Unmodeled `trackBeats` columns
pub const BEAT_DEFAULTS: &[ColumnDefault] = &[
    // meter encoding is unknown
    default("timesignature", Sentinel::Integer(0)),
];

/// Unmodeled `playlists2` columns, for both playlist and membership rows
pub const PLAYLIST_DEFAULTS: &[ColumnDefault] = &[
    // unknown, always '#' in DJUCED databases
    default("path", Sentinel::Text("#")),
];

/// `playlists2.data` of a playlist row (membership rows store the track path)
pub const PLAYLIST_ROW_DATA: &str = "";

/// Color index written for primary cues, since colors don't round trip
pub const PRIMARY_CUE_COLOR: i64 = 4;

/// Color index written for hot cues
pub const HOT_CUE_COLOR: i64 = 0;

/// `(key, group, keyval)` row identifying the schema version
pub const SCHEMA_VERSION: (&str, &str, &str) = ("DB_VERSION", "GENERAL", "0.059");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_to_sql() {
        assert_eq!(
            Sentinel::Null.to_sql().unwrap(),
            ToSqlOutput::Owned(Value::Null)
        );
        assert_eq!(
            Sentinel::Real(-9999.0).to_sql().unwrap(),
            ToSqlOutput::Owned(Value::Real(-9999.0))
        );
        assert_eq!(
            Sentinel::Text("#").to_sql().unwrap(),
            ToSqlOutput::Borrowed(ValueRef::Text(b"#"))
        );
    }

    #[test]
    fn test_default_columns_are_unique() {
        let mut columns: Vec<&str> = TRACK_DEFAULTS.iter().map(|d| d.column).collect();
        columns.sort_unstable();
        columns.dedup();
        assert_eq!(columns.len(), TRACK_DEFAULTS.len());
    }
}
