// src/mime/mod.rs
pub mod guess;
pub mod table;

pub use guess::GuessDetector;
pub use table::ExtensionTable;

/// Maps a bare file name to a mime type. Never looks at file contents.
pub trait MimeDetector: Send + Sync {
    fn detect(&self, filename: &str) -> Option<String>;
}

/// Ordered chain of detectors; the first one that recognises a name wins.
pub struct MimeClassifier {
    detectors: Vec<Box<dyn MimeDetector>>,
}

impl MimeClassifier {
    /// Static extension table only.
    pub fn new() -> Self {
        let mut classifier = MimeClassifier { detectors: Vec::new() };
        classifier.register(Box::new(ExtensionTable::new()));
        classifier
    }

    /// The `mime_guess` database first, then the static table.
    pub fn with_guessing() -> Self {
        let mut classifier = MimeClassifier { detectors: Vec::new() };
        classifier.register(Box::new(GuessDetector));
        classifier.register(Box::new(ExtensionTable::new()));
        classifier
    }

    pub fn register(&mut self, detector: Box<dyn MimeDetector>) {
        self.detectors.push(detector);
    }

    pub fn classify(&self, filename: &str) -> Option<String> {
        self.detectors.iter().find_map(|detector| detector.detect(filename))
    }
}

impl Default for MimeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MimeClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MimeClassifier")
            .field("detectors", &self.detectors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl MimeDetector for Fixed {
        fn detect(&self, filename: &str) -> Option<String> {
            filename.ends_with(".md").then(|| self.0.to_string())
        }
    }

    #[test]
    fn test_default_classifier_uses_table() {
        let classifier = MimeClassifier::new();
        assert_eq!(classifier.classify("archive.tar.gz").as_deref(), Some("application/gzip"));
        assert_eq!(classifier.classify("notes.TXT").as_deref(), Some("text/plain"));
        assert_eq!(classifier.classify("unknownext.xyz"), None);
    }

    #[test]
    fn test_first_detector_wins() {
        let mut classifier = MimeClassifier { detectors: Vec::new() };
        classifier.register(Box::new(Fixed("text/markdown")));
        classifier.register(Box::new(ExtensionTable::new()));

        assert_eq!(classifier.classify("README.md").as_deref(), Some("text/markdown"));
        assert_eq!(classifier.classify("song.mp3").as_deref(), Some("audio/mpeg"));
        assert_eq!(classifier.classify("Makefile"), None);
    }

    #[test]
    fn test_guessing_classifier() {
        let classifier = MimeClassifier::with_guessing();
        assert_eq!(classifier.classify("photo.png").as_deref(), Some("image/png"));
        assert_eq!(classifier.classify("song.mp3").as_deref(), Some("audio/mpeg"));
        assert_eq!(classifier.classify("no_extension"), None);
    }
}
