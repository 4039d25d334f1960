use super::{CuePoint, TrackPath};

/// Represents a single music track with all its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Library-wide identifier, used by playlists
    pub id: i64,

    /// Absolute path to the audio file
    pub fname: String,

    pub title: String,
    pub artist: String,
    pub album: String,
    pub albumartist: String,
    pub composer: String,
    pub tracknumber: Option<i64>,
    pub genre: String,

    /// `YYYY-MM-DD`, empty if unknown
    pub release_date: String,
    pub cover_filepath: String,
    pub comment: String,

    /// BPM (beats per minute)
    pub bpm: f64,

    /// Musical key: 0..=11 major keys starting at A, 12..=23 their minors
    pub key: i32,

    /// Track length in seconds
    pub length: Option<i64>,

    /// Position of the first beat in seconds
    pub first_beat_position: f64,

    pub play_count: i64,
    pub first_played: String,
    pub last_played: String,

    pub bitrate: Option<i64>,
    pub bitdepth: Option<i64>,
    pub samplerate: Option<i64>,

    /// File size in bytes
    pub filesize: Option<i64>,
    pub last_modified: String,

    /// Hot cues in source order (not sorted by slot)
    pub hot_cues: Vec<CuePoint>,

    /// The primary cue (number 0)
    pub cue: Option<CuePoint>,
}

impl Track {
    /// BPM used when the source has none
    pub const DEFAULT_BPM: f64 = 90.0;

    /// Create a track with default metadata
    pub fn new(id: i64, title: impl Into<String>, fname: impl Into<String>) -> Self {
        Self {
            id,
            fname: fname.into(),
            title: title.into(),
            artist: String::new(),
            album: String::new(),
            albumartist: String::new(),
            composer: String::new(),
            tracknumber: None,
            genre: String::new(),
            release_date: String::new(),
            cover_filepath: String::new(),
            comment: String::new(),
            bpm: Self::DEFAULT_BPM,
            key: 0,
            length: None,
            first_beat_position: 0.0,
            play_count: 0,
            first_played: String::new(),
            last_played: String::new(),
            bitrate: None,
            bitdepth: None,
            samplerate: None,
            filesize: None,
            last_modified: String::new(),
            hot_cues: Vec::new(),
            cue: None,
        }
    }

    /// Path components derived from `fname`
    pub fn path(&self) -> TrackPath<'_> {
        TrackPath::parse(&self.fname)
    }

    /// Release year, the leading component of `release_date`
    pub fn year(&self) -> &str {
        self.release_date.split('-').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_defaults() {
        let track = Track::new(7, "Song", "C:\\Music\\song.mp3");
        assert_eq!(track.bpm, 90.0);
        assert_eq!(track.key, 0);
        assert_eq!(track.first_beat_position, 0.0);
        assert!(track.cue.is_none());
        assert!(track.hot_cues.is_empty());
        assert_eq!(track.path().filename, "song.mp3");
    }

    #[test]
    fn test_year() {
        let mut track = Track::new(1, "Song", "/song.mp3");
        assert_eq!(track.year(), "");

        track.release_date = "2019-01-01".to_string();
        assert_eq!(track.year(), "2019");
    }
}
