// src/mime/guess.rs
use super::MimeDetector;

/// Extension lookup in the `mime_guess` database.
pub struct GuessDetector;

impl MimeDetector for GuessDetector {
    fn detect(&self, filename: &str) -> Option<String> {
        mime_guess::from_path(filename)
            .first_raw()
            .map(|mime| mime.to_string())
    }
}
