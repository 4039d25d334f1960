/// Cue point palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub id: u8,
    pub hex_code: &'static str,
}

/// The fixed DJUCED cue color palette, indexed by color id
pub const COLORS: [Color; 9] = [
    Color { id: 0, hex_code: "3924FB" },
    Color { id: 1, hex_code: "69FFFE" },
    Color { id: 2, hex_code: "2D8B15" },
    Color { id: 3, hex_code: "59FD2F" },
    Color { id: 4, hex_code: "EE0C19" },
    Color { id: 5, hex_code: "F428FC" },
    Color { id: 6, hex_code: "FFFFFF" },
    Color { id: 7, hex_code: "F3AE29" },
    Color { id: 8, hex_code: "FBFD37" },
];

impl Color {
    /// Look up a palette entry by its id
    pub fn from_id(id: i64) -> Option<Color> {
        usize::try_from(id).ok().and_then(|idx| COLORS.get(idx)).copied()
    }
}

/// A marked position in a track
///
/// Number 0 is the primary cue, 1..=999 are hot cue slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CuePoint {
    /// Position in seconds
    pub pos: f64,

    pub name: Option<String>,

    pub number: Option<i64>,

    pub color: Option<Color>,

    /// Loop length, 0 when the cue is not a loop
    pub loop_length: f64,
}

impl CuePoint {
    /// Highest cue number that is still a hot cue
    pub const MAX_HOT_CUE: i64 = 999;

    /// Create a cue at the given position with the given number
    pub fn new(pos: f64, number: i64) -> Self {
        Self {
            pos,
            number: Some(number),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_loop_length(mut self, loop_length: f64) -> Self {
        self.loop_length = loop_length;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Whether this is the track's primary cue (number 0)
    pub fn is_primary(&self) -> bool {
        self.number == Some(0)
    }

    /// Whether this is a hot cue (number 1..=999)
    pub fn is_hot_cue(&self) -> bool {
        matches!(self.number, Some(n) if (1..=Self::MAX_HOT_CUE).contains(&n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup() {
        assert_eq!(Color::from_id(0).unwrap().hex_code, "3924FB");
        assert_eq!(Color::from_id(4).unwrap().hex_code, "EE0C19");
        assert_eq!(Color::from_id(8).unwrap().id, 8);
        assert!(Color::from_id(9).is_none());
        assert!(Color::from_id(-1).is_none());
    }

    #[test]
    fn test_cue_classification() {
        assert!(CuePoint::new(1.0, 0).is_primary());
        assert!(CuePoint::new(1.0, 1).is_hot_cue());
        assert!(CuePoint::new(1.0, 999).is_hot_cue());
        assert!(!CuePoint::new(1.0, 1000).is_hot_cue());
        assert!(!CuePoint::new(1.0, 1000).is_primary());
        assert!(!CuePoint::default().is_hot_cue());
    }
}
