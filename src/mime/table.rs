// src/mime/table.rs
use super::MimeDetector;
use regex::Regex;

const MAPPINGS: &[(&str, &str)] = &[
    // Archive/compression
    (r"\.bz2$", "application/bzip2"),
    (r"\.bz$", "application/bzip"),
    (r"\.gz$", "application/gzip"),
    (r"\.tar$", "application/x-tar"),
    (r"\.zip$", "application/zip"),
    // Image
    (r"\.gif$", "image/gif"),
    (r"\.jpe?g$", "image/jpeg"),
    (r"\.png$", "image/png"),
    (r"\.svg$", "image/svg+xml"),
    // Text and documents
    (r"\.html?$", "text/html"),
    (r"\.odt$", "application/vnd.oasis.opendocument.text"),
    (r"\.pdf$", "application/pdf"),
    (r"\.rtf$", "text/rtf"),
    (r"\.sh$", "text/x-shellscript"),
    (r"\.txt$", "text/plain"),
    // Spreadsheet
    (r"\.csv$", "text/csv"),
    (r"\.ods$", "application/vnd.oasis.opendocument.spreadsheet"),
    // Presentation
    (r"\.odp$", "application/vnd.oasis.opendocument.presentation"),
    // Audio
    (r"\.flac$", "audio/flac"),
    (r"\.midi?$", "audio/midi"),
    (r"\.mp3$", "audio/mpeg"),
    (r"\.ogg$", "audio/ogg"),
    // Video
    (r"\.mkv$", "video/x-matroska"),
    (r"\.mp4$", "video/mp4"),
    // Font
    (r"\.otf$", "application/x-font-opentype"),
    (r"\.ttf$", "application/x-font-truetype"),
    (r"\.woff2$", "font/woff2"),
    (r"\.woff$", "font/woff"),
    // Executable
    (r"\.exe$", "application/vnd.microsoft.portable-executable"),
];

/// Built-in suffix table, matched case-insensitively in order.
pub struct ExtensionTable {
    rules: Vec<(Regex, &'static str)>,
}

impl ExtensionTable {
    pub fn new() -> Self {
        let rules = MAPPINGS
            .iter()
            .map(|(pattern, mime)| {
                let regex = Regex::new(&format!("(?i){pattern}"))
                    .expect("built-in mime patterns are valid");
                (regex, *mime)
            })
            .collect();
        ExtensionTable { rules }
    }
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MimeDetector for ExtensionTable {
    fn detect(&self, filename: &str) -> Option<String> {
        self.rules
            .iter()
            .find(|(regex, _)| regex.is_match(filename))
            .map(|(_, mime)| mime.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_suffix_decides() {
        let table = ExtensionTable::new();
        assert_eq!(table.detect("archive.tar.gz").as_deref(), Some("application/gzip"));
        assert_eq!(table.detect("archive.tar").as_deref(), Some("application/x-tar"));
        assert_eq!(table.detect("backup.tar.bz2").as_deref(), Some("application/bzip2"));
    }

    #[test]
    fn test_case_insensitive() {
        let table = ExtensionTable::new();
        assert_eq!(table.detect("notes.TXT").as_deref(), Some("text/plain"));
        assert_eq!(table.detect("Photo.JPEG").as_deref(), Some("image/jpeg"));
        assert_eq!(table.detect("INDEX.HTM").as_deref(), Some("text/html"));
    }

    #[test]
    fn test_optional_letter_patterns() {
        let table = ExtensionTable::new();
        assert_eq!(table.detect("a.jpg").as_deref(), Some("image/jpeg"));
        assert_eq!(table.detect("a.mid").as_deref(), Some("audio/midi"));
        assert_eq!(table.detect("a.midi").as_deref(), Some("audio/midi"));
        assert_eq!(table.detect("a.woff").as_deref(), Some("font/woff"));
        assert_eq!(table.detect("a.woff2").as_deref(), Some("font/woff2"));
    }

    #[test]
    fn test_suffix_must_be_at_end() {
        let table = ExtensionTable::new();
        assert_eq!(table.detect("unknownext.xyz"), None);
        assert_eq!(table.detect("txt"), None);
        assert_eq!(table.detect("notes.txt.orig"), None);
        assert_eq!(table.detect("setup.exe").as_deref(), Some("application/vnd.microsoft.portable-executable"));
    }
}
