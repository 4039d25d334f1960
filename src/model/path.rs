//! Derived path components for a track file name

/// A track path split into the components the DJUCED schema stores
///
/// Both `/` and `\` are accepted as separators since DJUCED libraries
/// usually come from Windows machines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPath<'a> {
    /// Drive prefix (first two characters, e.g. `C:`)
    pub drive: &'a str,

    /// Parent directory, without trailing separator
    pub directory: &'a str,

    /// File name including extension
    pub filename: &'a str,

    /// Extension including the leading dot, empty if there is none
    pub extension: &'a str,
}

impl<'a> TrackPath<'a> {
    pub fn parse(fname: &'a str) -> Self {
        let drive_end = fname
            .char_indices()
            .nth(2)
            .map(|(idx, _)| idx)
            .unwrap_or(fname.len());

        let (directory, filename) = match fname.rfind(['/', '\\']) {
            Some(idx) => (&fname[..idx], &fname[idx + 1..]),
            None => ("", fname),
        };

        // A leading dot marks a hidden file, not an extension
        let extension = match filename.rfind('.') {
            Some(idx) if filename[..idx].chars().any(|c| c != '.') => &filename[idx..],
            _ => "",
        };

        Self {
            drive: &fname[..drive_end],
            directory,
            filename,
            extension,
        }
    }

    /// Extension without the leading dot
    pub fn bare_extension(&self) -> &'a str {
        self.extension.trim_start_matches('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_path() {
        let parts = TrackPath::parse("C:\\Music\\House\\track.mp3");
        assert_eq!(parts.drive, "C:");
        assert_eq!(parts.directory, "C:\\Music\\House");
        assert_eq!(parts.filename, "track.mp3");
        assert_eq!(parts.extension, ".mp3");
        assert_eq!(parts.bare_extension(), "mp3");
    }

    #[test]
    fn test_forward_slashes() {
        let parts = TrackPath::parse("D:/Sets/intro.final.wav");
        assert_eq!(parts.drive, "D:");
        assert_eq!(parts.directory, "D:/Sets");
        assert_eq!(parts.filename, "intro.final.wav");
        assert_eq!(parts.extension, ".wav");
    }

    #[test]
    fn test_no_extension_or_directory() {
        let parts = TrackPath::parse("track");
        assert_eq!(parts.drive, "tr");
        assert_eq!(parts.directory, "");
        assert_eq!(parts.filename, "track");
        assert_eq!(parts.extension, "");

        let hidden = TrackPath::parse("/music/.hidden");
        assert_eq!(hidden.filename, ".hidden");
        assert_eq!(hidden.extension, "");
    }

    #[test]
    fn test_short_path() {
        let parts = TrackPath::parse("");
        assert_eq!(parts.drive, "");
        assert_eq!(parts.filename, "");
    }
}
