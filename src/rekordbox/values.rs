//! Value conversions for rekordbox attributes

/// Pitch classes by `key % 12`, starting at A
const PITCH_CLASSES: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// rekordbox tonality for a key number
///
/// Keys 0..=11 are majors, 12..=23 their minors (suffix `m`). Anything
/// else has no tonality.
pub fn tonality(key: i32) -> Option<String> {
    let key = usize::try_from(key).ok().filter(|k| *k < 2 * PITCH_CLASSES.len())?;
    let pitch = PITCH_CLASSES[key % PITCH_CLASSES.len()];
    if key >= PITCH_CLASSES.len() {
        Some(format!("{}m", pitch))
    } else {
        Some(pitch.to_string())
    }
}

/// Whole numbers get two decimal places, everything else is printed as-is
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.2}", value)
    } else {
        value.to_string()
    }
}

/// rekordbox `Kind` label for a file extension (without dot)
pub fn kind_for_extension(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "wav" => "Wav-Datei",
        "mp3" => "Mp3-Datei",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tonality() {
        assert_eq!(tonality(0).as_deref(), Some("A"));
        assert_eq!(tonality(3).as_deref(), Some("C"));
        assert_eq!(tonality(11).as_deref(), Some("G#"));
        assert_eq!(tonality(12).as_deref(), Some("Am"));
        assert_eq!(tonality(23).as_deref(), Some("G#m"));
    }

    #[test]
    fn test_tonality_out_of_range() {
        assert_eq!(tonality(-1), None);
        assert_eq!(tonality(24), None);
        assert_eq!(tonality(36), None);
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(128.0), "128.00");
        assert_eq!(format_decimal(128.5), "128.5");
        assert_eq!(format_decimal(0.0), "0.00");
        assert_eq!(format_decimal(0.125), "0.125");
    }

    #[test]
    fn test_kind() {
        assert_eq!(kind_for_extension("wav"), "Wav-Datei");
        assert_eq!(kind_for_extension("MP3"), "Mp3-Datei");
        assert_eq!(kind_for_extension("flac"), "unknown");
        assert_eq!(kind_for_extension(""), "unknown");
    }
}
