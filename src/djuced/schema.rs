//! DJUCED table layout
//!
//! Mirrors the tables DJUCED creates itself, including the ones this
//! crate never writes to, so DJUCED accepts the database as its own.

use super::defaults::ColumnDefault;
use anyhow::Result;
use rusqlite::types::ToSql;
use rusqlite::Connection;
use std::collections::HashSet;

pub struct TableDef {
    pub name: &'static str,
    pub ddl: &'static str,
}

pub const TABLES: &[TableDef] = &[
    TableDef {
        name: "playlists2",
        ddl: "CREATE TABLE playlists2(\
              name CHARACTER VARYING(100), \
              path CHARACTER VARYING(1024), \
              data CHARACTER VARYING(1024), \
              order_in_list INTEGER, type INTEGER)",
    },
    TableDef {
        name: "recordings",
        ddl: "CREATE TABLE recordings(\
              id INTEGER PRIMARY KEY AUTOINCREMENT, \
              recordId CHARACTER VARYING(100) )",
    },
    TableDef {
        name: "samples",
        ddl: "CREATE TABLE samples(\
              id INTEGER PRIMARY KEY AUTOINCREMENT, \
              sampleId CHARACTER VARYING(255) )",
    },
    TableDef {
        name: "tblAdmin",
        ddl: "CREATE TABLE 'tblAdmin' (\
              'key' TEXT PRIMARY KEY NOT NULL UNIQUE, \
              'group' TEXT NOT NULL DEFAULT GENERAL, \
              'keyval' TEXT)",
    },
    TableDef {
        name: "tblFolderScan",
        ddl: "CREATE TABLE 'tblFolderScan' (\
              Scan NUMERIC, \
              FolderID INTEGER PRIMARY KEY, \
              FolderPath TEXT, \
              DisplayName TEXT)",
    },
    TableDef {
        name: "trackBeats",
        ddl: "CREATE TABLE trackBeats(\
              id INTEGER PRIMARY KEY AUTOINCREMENT, \
              trackId CHARACTER VARYING(100), \
              beatpos DECIMAL(5,1), \
              timesignature INTEGER)",
    },
    TableDef {
        name: "trackCues",
        ddl: "CREATE TABLE trackCues(\
              id INTEGER PRIMARY KEY AUTOINCREMENT, \
              trackId CHARACTER VARYING(100), \
              cuename CHARACTER VARYING(100), \
              cuenumber INTEGER, \
              cuepos DECIMAL(5,1), \
              loopLength DECIMAL(5,1) DEFAULT 0, \
              cueColor INTEGER)",
    },
    TableDef {
        name: "tracks",
        ddl: "CREATE TABLE tracks(\
              id INTEGER PRIMARY KEY AUTOINCREMENT, \
              album CHARACTER VARYING(255), \
              albumartist CHARACTER VARYING(255), \
              artist CHARACTER VARYING(255), \
              bitrate INTEGER, \
              comment CHARACTER VARYING(100), \
              composer CHARACTER VARYING(255), \
              coverimage CHARACTER VARYING(255), \
              title CHARACTER VARYING(255), \
              smart_advisor INTEGER, \
              bpm DECIMAL(5,1), \
              max_val_gain FLOAT, \
              tracknumber INTEGER, \
              drive CHARACTER VARYING(16), \
              filepath CHARACTER VARYING(1024), \
              filename CHARACTER VARYING(255), \
              absolutepath CHARACTER VARYING(1024), \
              filetype CHARACTER VARYING(16), \
              key INTEGER DEFAULT - 1, \
              genre CHARACTER VARYING(100), \
              filesize INTEGER, \
              length DATETIME, \
              rating INTEGER, \
              filedate DATETIME, \
              year INTEGER, \
              playcount INTEGER, \
              first_played DATETIME, \
              last_played DATETIME, \
              first_seen DATETIME, \
              tags_read INTEGER, \
              waveform BLOB, \
              danceability FLOAT, \
              samplerate INTEGER, \
              stores CHARACTER VARYING(1024))",
    },
];

/// Created after the bulk inserts
pub const INDICES: &[&str] = &[
    "CREATE UNIQUE INDEX trackBeatsIndex ON trackBeats (trackId ASC)",
    "CREATE INDEX trackCuesIndex ON trackCues (trackId ASC)",
    "CREATE UNIQUE INDEX tracksIndex ON tracks (absolutepath ASC)",
];

/// Tables the reader cannot do without
pub const REQUIRED_TABLES: &[&str] = &[
    "trackBeats",
    "trackCues",
    "tracks",
    "playlists2",
    "samples",
];

/// Lowercased names of all tables in the database
pub fn existing_tables(conn: &Connection) -> Result<HashSet<String>> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .map(|name| name.map(|n| n.to_lowercase()))
        .collect::<rusqlite::Result<HashSet<_>>>()?;
    Ok(names)
}

/// Build an `INSERT` for the modeled columns followed by the defaulted ones
///
/// Only static identifiers end up in the SQL text; values are bound.
pub fn insert_statement(table: &str, columns: &[&str], defaults: &[ColumnDefault]) -> String {
    let names: Vec<&str> = columns
        .iter()
        .copied()
        .chain(defaults.iter().map(|d| d.column))
        .collect();
    let placeholders: Vec<String> = (1..=names.len()).map(|i| format!("?{}", i)).collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        names.join(", "),
        placeholders.join(", ")
    )
}

/// Append the default values to a row's modeled values, matching `insert_statement`
pub fn bind_with_defaults<'a>(
    modeled: &[&'a dyn ToSql],
    defaults: &'a [ColumnDefault],
) -> Vec<&'a dyn ToSql> {
    modeled
        .iter()
        .copied()
        .chain(defaults.iter().map(|d| &d.value as &dyn ToSql))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::djuced::defaults::TRACK_DEFAULTS;

    #[test]
    fn test_insert_statement() {
        let sql = insert_statement("samples", &["id", "sampleId"], &[]);
        assert_eq!(sql, "INSERT INTO samples (id, sampleId) VALUES (?1, ?2)");
    }

    #[test]
    fn test_insert_statement_appends_defaults() {
        let sql = insert_statement("tracks", &["id"], TRACK_DEFAULTS);
        assert!(sql.starts_with("INSERT INTO tracks (id, smart_advisor, max_val_gain"));
        assert!(sql.ends_with(&format!("?{})", TRACK_DEFAULTS.len() + 1)));
    }

    #[test]
    fn test_schema_creates_cleanly() {
        let conn = Connection::open_in_memory().unwrap();
        for table in TABLES {
            conn.execute(table.ddl, []).unwrap();
        }
        for index in INDICES {
            conn.execute(index, []).unwrap();
        }

        let tables = existing_tables(&conn).unwrap();
        for table in TABLES {
            assert!(tables.contains(&table.name.to_lowercase()), "{}", table.name);
        }
    }
}
