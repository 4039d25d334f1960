//! rekordbox XML writer
//!
//! Streams the collection straight to the sink: tracks first, then the
//! playlist tree. Nothing is buffered beyond the sink's own buffer.

use super::node::{Element, Node, TreeWriter};
use super::values::{format_decimal, kind_for_extension, tonality};
use crate::model::{CuePoint, Library, Playlist, Track};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const PLAYLISTS_VERSION: &str = "1.0.0";
const PRODUCT_NAME: &str = "rekordbox";
const PRODUCT_VERSION: &str = "5.4.3";
const PRODUCT_COMPANY: &str = "Pioneer DJ";

const LOCATION_PREFIX: &str = "file://localhost/";

/// Playlist tree node types
const NODE_FOLDER: u8 = 0;
const NODE_PLAYLIST: u8 = 1;

/// Write a library to a rekordbox XML file
pub fn write_xml(path: &Path, library: &Library) -> Result<()> {
    log::info!("Writing rekordbox XML: {:?}", path);
    log::info!("  Tracks: {}", library.track_count());
    log::info!("  Playlists: {}", library.playlist_count());

    let file = File::create(path)
        .with_context(|| format!("Failed to create rekordbox XML file: {:?}", path))?;

    let mut sink = write_collection(BufWriter::new(file), library)
        .with_context(|| format!("Failed to write rekordbox XML: {:?}", path))?;
    sink.flush()
        .with_context(|| format!("Failed to flush rekordbox XML: {:?}", path))?;

    log::info!("rekordbox XML written to: {:?}", path);
    Ok(())
}

/// Write the whole document to `sink` and hand the sink back
pub fn write_collection<W: Write>(sink: W, library: &Library) -> Result<W> {
    let mut doc = TreeWriter::new(sink);
    doc.declaration()?;

    let mut root = doc.open(Element::new("DJ_PLAYLISTS").attr("Version", PLAYLISTS_VERSION))?;
    root.leaf(
        Element::new("PRODUCT")
            .attr("Name", PRODUCT_NAME)
            .attr("Version", PRODUCT_VERSION)
            .attr("Company", PRODUCT_COMPANY),
    )?;

    let mut collection =
        root.child(Element::new("COLLECTION").attr("Entries", library.track_count()))?;
    for track in library.tracks() {
        write_track(&mut collection, track)?;
    }
    collection.close()?;

    let mut playlists = root.child(Element::new("PLAYLISTS"))?;
    let mut tree = playlists.child(
        Element::new("NODE")
            .attr("Type", NODE_FOLDER)
            .attr("Name", "ROOT")
            .attr("Count", library.playlist_count()),
    )?;
    for playlist in library.playlists() {
        write_playlist(&mut tree, playlist)?;
    }
    tree.close()?;
    playlists.close()?;
    root.close()?;

    Ok(doc.into_inner())
}

fn write_track<W: Write>(collection: &mut Node<'_, W>, track: &Track) -> Result<()> {
    let key = tonality(track.key);
    if key.is_none() {
        log::warn!(
            "Track {} has key {} outside 0..=23, leaving out its tonality",
            track.id,
            track.key
        );
    }

    let mut node = collection.child(
        Element::new("TRACK")
            .attr("TrackID", track.id)
            .attr("Name", &track.title)
            .attr("Artist", &track.artist)
            .attr("Composer", &track.composer)
            .attr("Album", &track.album)
            .attr("Genre", &track.genre)
            .attr("Kind", kind_for_extension(track.path().bare_extension()))
            .opt_attr("Size", track.filesize)
            .attr("TotalTime", track.length.unwrap_or(0))
            .attr("DiscNumber", 0)
            .attr("TrackNumber", track.tracknumber.unwrap_or(0))
            .attr("Year", track.year())
            .attr("AverageBpm", format_decimal(track.bpm))
            .attr("DateAdded", &track.last_modified)
            .opt_attr("BitRate", track.bitrate)
            .opt_attr("SampleRate", track.samplerate)
            .attr("Comments", &track.comment)
            .attr("PlayCount", track.play_count)
            .attr("Rating", 0)
            .attr("Location", format!("{}{}", LOCATION_PREFIX, track.fname))
            .opt_attr("Tonality", key),
    )?;

    node.leaf(
        Element::new("TEMPO")
            .attr("Inizio", format_decimal(track.first_beat_position))
            .attr("Bpm", format_decimal(track.bpm))
            .attr("Metro", "4/4")
            .attr("Battito", 1),
    )?;

    for cue in &track.hot_cues {
        node.leaf(position_mark(cue))?;
    }

    node.close()
}

/// rekordbox numbers hot cues from 0, DJUCED from 1
fn position_mark(cue: &CuePoint) -> Element {
    let end = (cue.loop_length != 0.0).then(|| format_decimal(cue.pos + cue.loop_length));

    Element::new("POSITION_MARK")
        .opt_attr("Name", cue.name.as_deref())
        .attr("Type", 0)
        .attr("Start", format_decimal(cue.pos))
        .opt_attr("End", end)
        .opt_attr("Num", cue.number.map(|n| n - 1))
}

fn write_playlist<W: Write>(tree: &mut Node<'_, W>, playlist: &Playlist) -> Result<()> {
    let mut node = tree.child(
        Element::new("NODE")
            .attr("Type", NODE_PLAYLIST)
            .attr("Entries", playlist.len())
            .attr("KeyType", 0)
            .attr("Name", &playlist.name),
    )?;
    for track_id in &playlist.track_ids {
        node.leaf(Element::new("TRACK").attr("Key", track_id))?;
    }
    node.close()
}
