// src/filesystem/filter.rs
use regex::Regex;

/// `.` and `..` are never part of a listing.
pub fn is_interesting(name: &str) -> bool {
    name != "." && name != ".."
}

/// Ordered exclusion patterns. The first pattern that matches rejects the
/// name; a name no pattern matches is displayable.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    patterns: Vec<Regex>,
}

impl ExclusionRules {
    /// Dotfiles plus the listing's own index name.
    pub fn new(index_name: &str) -> Self {
        let patterns = vec![
            Regex::new(r"^\.").expect("dotfile pattern is valid"),
            Regex::new(&format!("^{}$", regex::escape(index_name)))
                .expect("escaped index name is a valid pattern"),
        ];
        ExclusionRules { patterns }
    }

    /// Appends user supplied patterns after the built-in ones.
    pub fn with_patterns<I, S>(mut self, extra: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in extra {
            self.patterns.push(Regex::new(pattern.as_ref())?);
        }
        Ok(self)
    }

    pub fn is_displayable(&self, name: &str) -> bool {
        !self.patterns.iter().any(|pattern| pattern.is_match(name))
    }
}
