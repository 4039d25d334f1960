use super::{Playlist, Track};

/// An audio sample, referenced only by its file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub fname: String,
}

impl Sample {
    pub fn new(fname: impl Into<String>) -> Self {
        Self {
            fname: fname.into(),
        }
    }
}

/// Complete DJ library containing tracks, playlists and samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    /// All tracks, in source order
    tracks: Vec<Track>,

    /// All playlists
    playlists: Vec<Playlist>,

    samples: Vec<Sample>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track to the library
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Add a playlist to the library
    pub fn add_playlist(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    pub fn add_sample(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Get a track by ID
    pub fn get_track(&self, id: i64) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Get all tracks
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Get all playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Total number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_creation() {
        let lib = Library::new();
        assert_eq!(lib.track_count(), 0);
        assert_eq!(lib.playlist_count(), 0);
        assert_eq!(lib.sample_count(), 0);
    }

    #[test]
    fn test_add_track() {
        let mut lib = Library::new();

        let mut track = Track::new(12, "Test Song", "C:\\Music\\test.mp3");
        track.artist = "Test Artist".to_string();
        track.bpm = 128.0;
        lib.add_track(track);

        assert_eq!(lib.track_count(), 1);
        assert!(lib.get_track(12).is_some());
        assert!(lib.get_track(13).is_none());
        assert_eq!(lib.get_track(12).unwrap().title, "Test Song");
    }

    #[test]
    fn test_add_playlist_and_sample() {
        let mut lib = Library::new();

        lib.add_playlist(Playlist::new("My Playlist"));
        lib.add_sample(Sample::new("C:\\Samples\\horn.wav"));

        assert_eq!(lib.playlist_count(), 1);
        assert_eq!(lib.playlists()[0].name, "My Playlist");
        assert_eq!(lib.samples()[0].fname, "C:\\Samples\\horn.wav");
    }
}
