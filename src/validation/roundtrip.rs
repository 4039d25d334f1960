//! Round-trip validation of written libraries

use crate::model::Library;
use anyhow::{bail, Result};

/// Check that `written` (read back from disk) carries the same library as `expected`
///
/// Only what the formats preserve is compared: counts, paths, cue counts
/// and playlist membership order. Cue colors and unmodeled columns are
/// expected to differ.
pub fn validate_roundtrip(expected: &Library, written: &Library) -> Result<()> {
    log::info!("Validating written library...");
    log::info!("  Tracks: {} (expected {})", written.track_count(), expected.track_count());
    log::info!(
        "  Playlists: {} (expected {})",
        written.playlist_count(),
        expected.playlist_count()
    );
    log::info!("  Samples: {} (expected {})", written.sample_count(), expected.sample_count());

    if written.track_count() != expected.track_count() {
        bail!(
            "Track count mismatch: wrote {}, read back {}",
            expected.track_count(),
            written.track_count()
        );
    }
    if written.playlist_count() != expected.playlist_count() {
        bail!(
            "Playlist count mismatch: wrote {}, read back {}",
            expected.playlist_count(),
            written.playlist_count()
        );
    }
    if written.sample_count() != expected.sample_count() {
        bail!(
            "Sample count mismatch: wrote {}, read back {}",
            expected.sample_count(),
            written.sample_count()
        );
    }

    for track in expected.tracks() {
        let Some(read) = written.get_track(track.id) else {
            bail!("Track {} ({:?}) is missing after writing", track.id, track.fname);
        };
        if read.fname != track.fname {
            bail!(
                "Track {} changed path: {:?} -> {:?}",
                track.id,
                track.fname,
                read.fname
            );
        }
        if read.cue.is_some() != track.cue.is_some() || read.hot_cues.len() != track.hot_cues.len()
        {
            bail!("Cue points of track {} ({:?}) did not survive", track.id, track.fname);
        }
    }

    for (expected_playlist, read) in expected.playlists().iter().zip(written.playlists()) {
        if expected_playlist.name != read.name || expected_playlist.track_ids != read.track_ids {
            bail!(
                "Playlist {:?} did not survive: expected {:?}, read back {:?} {:?}",
                expected_playlist.name,
                expected_playlist.track_ids,
                read.name,
                read.track_ids
            );
        }
    }

    log::info!("✅ Written library matches");
    Ok(())
}
