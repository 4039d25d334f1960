//! DJUCED database writer
//!
//! Creates a fresh schema and bulk-loads a library into it. Writing into a
//! database that already holds a DJUCED library is refused; there is no
//! merge.

use super::defaults::{
    BEAT_DEFAULTS, HOT_CUE_COLOR, PLAYLIST_DEFAULTS, PLAYLIST_ROW_DATA, PRIMARY_CUE_COLOR,
    SCHEMA_VERSION, TRACK_DEFAULTS,
};
use super::schema::{bind_with_defaults, existing_tables, insert_statement, INDICES, TABLES};
use super::{MEMBERSHIP_ROW, PLAYLIST_ROW};
use crate::error::ConvertError;
use crate::model::{Library, Sample, Track};
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::path::Path;

/// `tracks` columns filled from the model, in binding order
const TRACK_COLUMNS: &[&str] = &[
    "id",
    "album",
    "albumartist",
    "artist",
    "bitrate",
    "comment",
    "composer",
    "coverimage",
    "title",
    "bpm",
    "tracknumber",
    "drive",
    "filepath",
    "filename",
    "absolutepath",
    "filetype",
    "key",
    "genre",
    "filesize",
    "length",
    "filedate",
    "year",
    "playcount",
    "first_played",
    "last_played",
    "first_seen",
    "samplerate",
];

const FIRST_SEEN_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Write a complete DJUCED database
///
/// The file is created if it does not exist. Indices are built after all
/// rows are in.
pub fn write_library(path: &Path, library: &Library) -> Result<()> {
    log::info!("Writing DJUCED database: {:?}", path);
    log::info!("  Tracks: {}", library.track_count());
    log::info!("  Playlists: {}", library.playlist_count());
    log::info!("  Samples: {}", library.sample_count());

    let mut conn = Connection::open(path)
        .with_context(|| format!("Failed to create DJUCED database: {:?}", path))?;

    create_tables(&mut conn)?;
    insert_samples(&mut conn, library.samples()).context("Failed to write samples")?;
    insert_tracks(&mut conn, library.tracks()).context("Failed to write tracks")?;
    insert_cues(&mut conn, library.tracks()).context("Failed to write cues")?;
    insert_beats(&mut conn, library.tracks()).context("Failed to write beat grids")?;
    insert_playlists(&mut conn, library)?;
    insert_version_info(&conn).context("Failed to write schema version")?;
    create_indices(&conn)?;

    log::info!("DJUCED database written to: {:?}", path);
    Ok(())
}

fn create_tables(conn: &mut Connection) -> Result<()> {
    let existing = existing_tables(conn)?;
    if let Some(table) = TABLES
        .iter()
        .find(|t| existing.contains(&t.name.to_lowercase()))
    {
        return Err(ConvertError::SchemaCollision(table.name.to_string()).into());
    }

    let tx = conn.transaction()?;
    for table in TABLES {
        tx.execute(table.ddl, [])
            .with_context(|| format!("Failed to create table {}", table.name))?;
    }
    tx.commit()?;

    log::debug!("Created {} tables", TABLES.len());
    Ok(())
}

fn create_indices(conn: &Connection) -> Result<()> {
    for index in INDICES {
        conn.execute(index, [])
            .with_context(|| format!("Failed to create index: {}", index))?;
    }
    Ok(())
}

/// Samples get sequential ids starting at 1
fn insert_samples(conn: &mut Connection, samples: &[Sample]) -> Result<()> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&insert_statement("samples", &["id", "sampleId"], &[]))?;
        for (id, sample) in (1i64..).zip(samples) {
            stmt.execute(params![id, sample.fname])?;
        }
    }
    tx.commit()?;
    Ok(())
}

fn insert_tracks(conn: &mut Connection, tracks: &[Track]) -> Result<()> {
    let first_seen = chrono::Local::now().format(FIRST_SEEN_FORMAT).to_string();

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&insert_statement("tracks", TRACK_COLUMNS, TRACK_DEFAULTS))?;
        for track in tracks {
            let path = track.path();
            let year = track.year().parse::<i64>().ok();
            let values = bind_with_defaults(
                params![
                    track.id,
                    track.album,
                    track.albumartist,
                    track.artist,
                    track.bitrate,
                    track.comment,
                    track.composer,
                    track.cover_filepath,
                    track.title,
                    track.bpm,
                    track.tracknumber,
                    path.drive,
                    path.directory,
                    path.filename,
                    track.fname,
                    path.extension,
                    track.key,
                    track.genre,
                    track.filesize,
                    track.length,
                    track.last_modified,
                    year,
                    track.play_count,
                    track.first_played,
                    track.last_played,
                    first_seen,
                    track.samplerate,
                ],
                TRACK_DEFAULTS,
            );
            stmt.execute(values.as_slice())
                .with_context(|| format!("Failed to insert track {:?}", track.fname))?;
        }
    }
    tx.commit()?;

    log::debug!("Inserted {} tracks", tracks.len());
    Ok(())
}

/// One row per primary cue and hot cue; cue numbers are written as-is
fn insert_cues(conn: &mut Connection, tracks: &[Track]) -> Result<()> {
    let tx = conn.transaction()?;
    let mut cue_id = 1i64;
    {
        let mut stmt = tx.prepare(&insert_statement(
            "trackCues",
            &["id", "trackId", "cuename", "cuenumber", "cuepos", "loopLength", "cueColor"],
            &[],
        ))?;
        for track in tracks {
            if let Some(cue) = &track.cue {
                stmt.execute(params![
                    cue_id,
                    track.fname,
                    cue.name,
                    0i64,
                    cue.pos,
                    cue.loop_length,
                    PRIMARY_CUE_COLOR,
                ])?;
                cue_id += 1;
            }
            for cue in &track.hot_cues {
                stmt.execute(params![
                    cue_id,
                    track.fname,
                    cue.name,
                    cue.number,
                    cue.pos,
                    cue.loop_length,
                    HOT_CUE_COLOR,
                ])?;
                cue_id += 1;
            }
        }
    }
    tx.commit()?;

    log::debug!("Inserted {} cues", cue_id - 1);
    Ok(())
}

/// Every track gets a beat grid row, even without a known first beat
fn insert_beats(conn: &mut Connection, tracks: &[Track]) -> Result<()> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&insert_statement(
            "trackBeats",
            &["id", "trackId", "beatpos"],
            BEAT_DEFAULTS,
        ))?;
        for (id, track) in (1i64..).zip(tracks) {
            let values = bind_with_defaults(
                params![id, track.fname, track.first_beat_position],
                BEAT_DEFAULTS,
            );
            stmt.execute(values.as_slice())?;
        }
    }
    tx.commit()?;
    Ok(())
}

/// Playlist rows first, then membership rows with a zero-based sort key
fn insert_playlists(conn: &mut Connection, library: &Library) -> Result<()> {
    let fnames_by_id: HashMap<i64, &str> = library
        .tracks()
        .iter()
        .map(|t| (t.id, t.fname.as_str()))
        .collect();

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&insert_statement(
            "playlists2",
            &["name", "data", "order_in_list", "type"],
            PLAYLIST_DEFAULTS,
        ))?;

        for playlist in library.playlists() {
            let values = bind_with_defaults(
                params![
                    playlist.name,
                    PLAYLIST_ROW_DATA,
                    playlist.sort_order,
                    PLAYLIST_ROW
                ],
                PLAYLIST_DEFAULTS,
            );
            stmt.execute(values.as_slice())
                .with_context(|| format!("Failed to insert playlist {:?}", playlist.name))?;
        }

        for playlist in library.playlists() {
            for (position, track_id) in (0i64..).zip(&playlist.track_ids) {
                let fname =
                    fnames_by_id
                        .get(track_id)
                        .ok_or_else(|| ConvertError::UnknownTrackId {
                            playlist: playlist.name.clone(),
                            track_id: *track_id,
                        })?;
                let values = bind_with_defaults(
                    params![playlist.name, fname, position, MEMBERSHIP_ROW],
                    PLAYLIST_DEFAULTS,
                );
                stmt.execute(values.as_slice())?;
            }
        }
    }
    tx.commit()?;

    log::debug!("Inserted {} playlists", library.playlist_count());
    Ok(())
}

fn insert_version_info(conn: &Connection) -> Result<()> {
    let (key, group, keyval) = SCHEMA_VERSION;
    conn.execute(
        "INSERT INTO tblAdmin (\"key\", \"group\", \"keyval\") VALUES (?1, ?2, ?3)",
        params![key, group, keyval],
    )?;
    Ok(())
}
