// src/listing/sort.rs
use crate::filesystem::Entry;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Name,
    Size,
    Type,
    MimeType,
    Modified,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        SortBy::Name,
        SortBy::Size,
        SortBy::Type,
        SortBy::MimeType,
        SortBy::Modified,
    ];

    /// Value of the `sortby` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            SortBy::Name => "filename",
            SortBy::Size => "size",
            SortBy::Type => "type",
            SortBy::MimeType => "mimetype",
            SortBy::Modified => "mtime",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        SortBy::ALL.into_iter().find(|field| field.as_query() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_query(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Field and direction for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortBy,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            field: SortBy::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortState {
    pub fn new(field: SortBy, direction: SortDirection) -> Self {
        SortState { field, direction }
    }

    /// Reads `sortby`/`sortdir`. Missing or unrecognised values fall back to
    /// `filename`/`asc` independently.
    pub fn from_query(sortby: Option<&str>, sortdir: Option<&str>) -> Self {
        let defaults = SortState::default();
        SortState {
            field: sortby.and_then(SortBy::from_query).unwrap_or(defaults.field),
            direction: sortdir.and_then(SortDirection::from_query).unwrap_or(defaults.direction),
        }
    }

    /// State a column header link should switch to: the active column flips
    /// direction, any other column starts ascending.
    pub fn next_for(&self, field: SortBy) -> SortState {
        if field == self.field {
            SortState::new(field, self.direction.reversed())
        } else {
            SortState::new(field, SortDirection::Ascending)
        }
    }

    /// Total order over entries.
    ///
    /// Directories come first unless sorting by type. Sizes and times compare
    /// numerically (missing values first), names, types and mime types
    /// byte-wise. Descending reverses only the field comparison; ties are
    /// always broken by name ascending.
    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        if self.field != SortBy::Type {
            match (a.is_dir(), b.is_dir()) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }

        let primary = match self.field {
            SortBy::Name => raw_name(a).cmp(raw_name(b)),
            SortBy::Size => a.size.cmp(&b.size),
            SortBy::Type => a.kind.as_str().cmp(b.kind.as_str()),
            SortBy::MimeType => a
                .mime_type
                .as_deref()
                .unwrap_or("")
                .as_bytes()
                .cmp(b.mime_type.as_deref().unwrap_or("").as_bytes()),
            SortBy::Modified => a.modified.cmp(&b.modified),
        };

        let primary = match self.direction {
            SortDirection::Ascending => primary,
            SortDirection::Descending => primary.reverse(),
        };

        primary.then_with(|| raw_name(a).cmp(raw_name(b)))
    }

    pub fn sort(&self, entries: &mut [Entry]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}

fn raw_name(entry: &Entry) -> &[u8] {
    entry.file_name.as_encoded_bytes()
}
