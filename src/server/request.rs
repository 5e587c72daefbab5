// src/server/request.rs
use crate::error::ListingError;
use crate::filesystem::ExclusionRules;
use crate::utils::encode_segment;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// A request path mapped onto the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub fs_path: PathBuf,
    /// Decoded segments below the document root, as raw names.
    pub segments: Vec<OsString>,
}

impl Target {
    /// Decoded URL path of the target as a directory, e.g. `/docs/`.
    pub fn dir_url(&self) -> String {
        self.join_segments(|segment| segment.to_string_lossy().into_owned())
    }

    /// Canonical encoded URL path of the target as a directory. Always
    /// starts with exactly one `/`.
    pub fn dir_href(&self) -> String {
        self.join_segments(|segment| encode_segment(segment.as_encoded_bytes()))
    }

    fn join_segments(&self, render: impl Fn(&OsStr) -> String) -> String {
        let mut url = String::from("/");
        for segment in &self.segments {
            url.push_str(&render(segment));
            url.push('/');
        }
        url
    }
}

/// Maps the path part of a request URI to a filesystem path under `root`.
///
/// Empty and `.` segments are ignored. A segment that cannot be decoded,
/// that is `..`, that would not be a single path component, or that the
/// exclusion rules hide makes the whole path not found.
pub fn resolve(root: &Path, raw_path: &str, rules: &ExclusionRules) -> Result<Target, ListingError> {
    let not_found = || ListingError::NotFound(PathBuf::from(raw_path));

    let mut fs_path = root.to_path_buf();
    let mut segments = Vec::new();

    for raw in raw_path.split('/') {
        if raw.is_empty() || raw == "." {
            continue;
        }
        let segment = decode_segment(raw).ok_or_else(not_found)?;
        if !is_plain_segment(&segment) || !rules.is_displayable(&segment.to_string_lossy()) {
            return Err(not_found());
        }
        fs_path.push(&segment);
        segments.push(segment);
    }

    Ok(Target { fs_path, segments })
}

#[cfg(unix)]
fn decode_segment(raw: &str) -> Option<OsString> {
    use std::os::unix::ffi::OsStringExt;
    Some(OsString::from_vec(urlencoding::decode_binary(raw.as_bytes()).into_owned()))
}

#[cfg(not(unix))]
fn decode_segment(raw: &str) -> Option<OsString> {
    urlencoding::decode(raw).ok().map(|segment| OsString::from(segment.into_owned()))
}

fn is_plain_segment(segment: &OsStr) -> bool {
    if segment.as_encoded_bytes().contains(&0) {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
