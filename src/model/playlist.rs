/// Represents a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Playlist name, unique within a library
    pub name: String,

    /// Position among the playlists, if the source stores one
    pub sort_order: Option<i64>,

    /// Member track ids, in display order
    pub track_ids: Vec<i64>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sort_order: None,
            track_ids: Vec::new(),
        }
    }

    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Append a track to the end of this playlist
    pub fn add_track(&mut self, track_id: i64) {
        self.track_ids.push(track_id);
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.track_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.track_ids.is_empty()
    }
}
