//! DJUCED database reader
//!
//! Some columns are ignored because their meaning is unknown:
//! `trackBeats.timesignature`, `tracks.smart_advisor`, `tracks.max_val_gain`,
//! `tracks.rating`, `tracks.danceability` and `tracks.stores`. Cues numbered
//! 1000 and above, party playlists, recordings, `tblAdmin` and
//! `tblFolderScan` are skipped as well.

use super::columns::{SqlInt, SqlReal, SqlText};
use super::schema::{existing_tables, REQUIRED_TABLES};
use super::{MEMBERSHIP_ROW, PLAYLIST_ROW};
use crate::error::ConvertError;
use crate::model::{Color, CuePoint, Library, Playlist, Sample, Track};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OpenFlags};
use std::collections::HashMap;
use std::path::Path;

/// Per-path data waiting to be attached to its track
///
/// Built once per read and dropped after the tracks are assembled. Every
/// entry must be claimed by a track; leftovers point at unknown paths.
#[derive(Debug, Default)]
struct TrackJoins {
    starts: HashMap<String, f64>,
    cues: HashMap<String, CuePoint>,
    hot_cues: HashMap<String, Vec<CuePoint>>,
}

impl TrackJoins {
    fn attach(&mut self, track: &mut Track) {
        if let Some(start) = self.starts.remove(&track.fname) {
            track.first_beat_position = start;
        }
        track.cue = self.cues.remove(&track.fname);
        track.hot_cues = self.hot_cues.remove(&track.fname).unwrap_or_default();
    }

    /// Fail on the first entry no track claimed
    fn finish(self) -> Result<()> {
        let unclaimed = [
            ("trackBeats", self.starts.into_keys().min()),
            ("trackCues", self.cues.into_keys().chain(self.hot_cues.into_keys()).min()),
        ];

        for (table, path) in unclaimed {
            if let Some(path) = path {
                return Err(ConvertError::UnknownTrackPath {
                    path,
                    referenced_by: table,
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Parse a DJUCED database into a library
///
/// The database is opened read-only and closed before returning.
pub fn parse_library(path: &Path) -> Result<Library> {
    log::info!("Parsing DJUCED database from {:?}", path);

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("Failed to open DJUCED database: {:?}", path))?;

    let tables = existing_tables(&conn)?;
    for table in REQUIRED_TABLES {
        if !tables.contains(&table.to_lowercase()) {
            return Err(ConvertError::MissingTable(*table).into());
        }
    }

    let mut joins = TrackJoins {
        starts: read_starts(&conn).context("Failed to read trackBeats")?,
        ..TrackJoins::default()
    };
    read_cues(&conn, &mut joins).context("Failed to read trackCues")?;

    let (tracks, track_ids) = read_tracks(&conn, &mut joins).context("Failed to read tracks")?;
    joins.finish()?;

    let memberships = read_playlist_tracks(&conn, &track_ids)?;
    let playlists = read_playlists(&conn, memberships).context("Failed to read playlists")?;
    let samples = read_samples(&conn).context("Failed to read samples")?;

    let mut library = Library::new();
    for track in tracks {
        library.add_track(track);
    }
    for playlist in playlists {
        library.add_playlist(playlist);
    }
    for sample in samples {
        library.add_sample(sample);
    }

    log::info!(
        "Loaded library: {} tracks, {} playlists, {} samples",
        library.track_count(),
        library.playlist_count(),
        library.sample_count()
    );

    Ok(library)
}

/// First-beat offset per track path
fn read_starts(conn: &Connection) -> Result<HashMap<String, f64>> {
    let mut stmt = conn.prepare("SELECT trackId, beatpos FROM trackBeats ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, SqlText>("trackId")?.0,
            row.get::<_, SqlReal>("beatpos")?.0.unwrap_or(0.0),
        ))
    })?;

    let mut starts = HashMap::new();
    for row in rows {
        let (path, start) = row?;
        starts.insert(path, start);
    }

    log::debug!("Read {} beat grid starts", starts.len());
    Ok(starts)
}

/// Split cue rows into primary cues and hot cues, keyed by track path
fn read_cues(conn: &Connection, joins: &mut TrackJoins) -> Result<()> {
    let mut stmt = conn.prepare(
        "SELECT trackId, cuename, cuenumber, cuepos, loopLength, cueColor \
         FROM trackCues ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        let cue = CuePoint {
            pos: row.get::<_, SqlReal>("cuepos")?.0.unwrap_or(0.0),
            name: row.get::<_, Option<SqlText>>("cuename")?.map(|name| name.0),
            number: row.get::<_, SqlInt>("cuenumber")?.0,
            color: row.get::<_, SqlInt>("cueColor")?.0.and_then(Color::from_id),
            loop_length: row.get::<_, SqlReal>("loopLength")?.0.unwrap_or(0.0),
        };
        Ok((row.get::<_, SqlText>("trackId")?.0, cue))
    })?;

    let mut dropped = 0usize;
    for row in rows {
        let (path, cue) = row?;
        if cue.is_primary() {
            // A second primary cue for the same track replaces the first
            joins.cues.insert(path, cue);
        } else if cue.is_hot_cue() {
            joins.hot_cues.entry(path).or_default().push(cue);
        } else {
            log::debug!("Skipping cue {:?} of {:?}", cue.number, path);
            dropped += 1;
        }
    }

    log::debug!(
        "Read {} primary cues, {} tracks with hot cues ({} cues skipped)",
        joins.cues.len(),
        joins.hot_cues.len(),
        dropped
    );
    Ok(())
}

/// Read all tracks, plus their ids indexed by file path
fn read_tracks(
    conn: &Connection,
    joins: &mut TrackJoins,
) -> Result<(Vec<Track>, HashMap<String, i64>)> {
    let mut stmt = conn.prepare(
        "SELECT id, album, albumartist, artist, bitrate, comment, composer, coverimage, \
         title, bpm, tracknumber, absolutepath, key, genre, filesize, length, filedate, \
         year, playcount, first_played, last_played, samplerate \
         FROM tracks ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        let mut track = Track::new(
            row.get("id")?,
            row.get::<_, SqlText>("title")?.0,
            row.get::<_, SqlText>("absolutepath")?.0,
        );
        track.album = row.get::<_, SqlText>("album")?.0;
        track.albumartist = row.get::<_, SqlText>("albumartist")?.0;
        track.artist = row.get::<_, SqlText>("artist")?.0;
        track.bitrate = row.get::<_, SqlInt>("bitrate")?.0;
        track.comment = row.get::<_, SqlText>("comment")?.0;
        track.composer = row.get::<_, SqlText>("composer")?.0;
        track.cover_filepath = row.get::<_, SqlText>("coverimage")?.0;
        track.bpm = row.get::<_, SqlReal>("bpm")?.0.unwrap_or(Track::DEFAULT_BPM);
        track.tracknumber = row.get::<_, SqlInt>("tracknumber")?.0;
        track.key = row
            .get::<_, SqlInt>("key")?
            .0
            .map_or(0, |key| i32::try_from(key).unwrap_or(-1));
        track.genre = row.get::<_, SqlText>("genre")?.0;
        track.filesize = row.get::<_, SqlInt>("filesize")?.0;
        track.length = row.get::<_, SqlInt>("length")?.0;
        track.last_modified = row.get::<_, SqlText>("filedate")?.0;

        // Only the year is stored
        let year = row.get::<_, SqlText>("year")?.0;
        if !year.is_empty() {
            track.release_date = format!("{}-01-01", year);
        }

        track.play_count = row.get::<_, SqlInt>("playcount")?.0.unwrap_or(0);
        track.first_played = row.get::<_, SqlText>("first_played")?.0;
        track.last_played = row.get::<_, SqlText>("last_played")?.0;
        track.samplerate = row.get::<_, SqlInt>("samplerate")?.0;
        Ok(track)
    })?;

    let mut tracks = Vec::new();
    let mut track_ids = HashMap::new();
    for row in rows {
        let mut track = row?;
        joins.attach(&mut track);
        track_ids.insert(track.fname.clone(), track.id);
        tracks.push(track);
    }

    log::debug!("Read {} tracks", tracks.len());
    Ok((tracks, track_ids))
}

/// Member track ids per playlist name, in display order
fn read_playlist_tracks(
    conn: &Connection,
    track_ids: &HashMap<String, i64>,
) -> Result<HashMap<String, Vec<i64>>> {
    let mut stmt = conn.prepare(
        "SELECT name, data FROM playlists2 WHERE type = ?1 ORDER BY order_in_list, rowid",
    )?;
    let rows = stmt.query_map(params![MEMBERSHIP_ROW], |row| {
        Ok((
            row.get::<_, SqlText>("name")?.0,
            row.get::<_, SqlText>("data")?.0,
        ))
    })?;

    let mut memberships: HashMap<String, Vec<i64>> = HashMap::new();
    for row in rows {
        let (playlist, path) = row.context("Failed to read playlist entries")?;
        let track_id = *track_ids
            .get(&path)
            .ok_or(ConvertError::UnknownTrackPath {
                path,
                referenced_by: "playlists2",
            })?;
        memberships.entry(playlist).or_default().push(track_id);
    }
    Ok(memberships)
}

fn read_playlists(
    conn: &Connection,
    mut memberships: HashMap<String, Vec<i64>>,
) -> Result<Vec<Playlist>> {
    let mut stmt =
        conn.prepare("SELECT name, order_in_list FROM playlists2 WHERE type = ?1 ORDER BY rowid")?;
    let rows = stmt.query_map(params![PLAYLIST_ROW], |row| {
        Ok((
            row.get::<_, SqlText>("name")?.0,
            row.get::<_, SqlInt>("order_in_list")?.0,
        ))
    })?;

    let mut playlists = Vec::new();
    for row in rows {
        let (name, sort_order) = row?;
        let track_ids = memberships.remove(&name).unwrap_or_default();
        playlists.push(Playlist {
            name,
            sort_order,
            track_ids,
        });
    }

    for orphan in memberships.keys() {
        log::debug!("Skipping entries of unknown playlist {:?}", orphan);
    }
    Ok(playlists)
}

fn read_samples(conn: &Connection) -> Result<Vec<Sample>> {
    let mut stmt = conn.prepare("SELECT sampleId FROM samples ORDER BY id")?;
    let samples = stmt
        .query_map([], |row| Ok(Sample::new(row.get::<_, SqlText>(0)?.0)))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(samples)
}
