// src/utils/formatter.rs
use chrono::{DateTime, Utc};
use std::ffi::OsStr;

const SIZE_UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Binary-prefixed size rounded half-up to one decimal, with a trailing
/// `.0` dropped: `1536` -> `1.5 KiB`, `1024` -> `1 KiB`.
pub fn human_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let bytes = u128::from(bytes);
    let mut unit = 0;
    let mut divisor: u128 = 1;
    while unit + 1 < SIZE_UNITS.len() && bytes / divisor >= 1024 {
        divisor *= 1024;
        unit += 1;
    }

    let mut tenths = (bytes * 10 + divisor / 2) / divisor;
    // 1023.95 KiB rounds to 1024.0; show it as 1 MiB instead.
    if tenths >= 10240 && unit + 1 < SIZE_UNITS.len() {
        divisor *= 1024;
        unit += 1;
        tenths = (bytes * 10 + divisor / 2) / divisor;
    }

    match tenths % 10 {
        0 => format!("{} {}", tenths / 10, SIZE_UNITS[unit]),
        frac => format!("{}.{} {}", tenths / 10, frac, SIZE_UNITS[unit]),
    }
}

pub fn format_modified(modified: &DateTime<Utc>) -> String {
    modified.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Percent-encodes one path segment from its raw bytes.
///
/// Bytes outside printable ASCII are encoded, so non-UTF-8 names survive the
/// round trip through the URL. `:` is encoded so a relative link can never
/// be read as a scheme, and `\` so it is never read as a separator. Markup
/// characters pass through; the template HTML-escapes them.
pub fn encode_segment(raw: &[u8]) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for &byte in raw {
        match byte {
            b'%' | b'#' | b'?' | b':' | b'\\' | b'/' => push_escaped(&mut encoded, byte),
            0x20..=0x7e => encoded.push(char::from(byte)),
            _ => push_escaped(&mut encoded, byte),
        }
    }
    encoded
}

fn push_escaped(out: &mut String, byte: u8) {
    out.push_str(&format!("%{byte:02X}"));
}

/// Relative link to an entry, built from the name as stored on disk.
pub fn entry_href(name: &OsStr, is_dir: bool) -> String {
    let mut href = encode_segment(name.as_encoded_bytes());
    if is_dir {
        href.push('/');
    }
    href
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_human_size_small_values() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(1), "1 B");
        assert_eq!(human_size(1023), "1023 B");
    }

    #[test]
    fn test_human_size_rounds_to_one_decimal() {
        assert_eq!(human_size(1024), "1 KiB");
        assert_eq!(human_size(1536), "1.5 KiB");
        assert_eq!(human_size(1100), "1.1 KiB");
        assert_eq!(human_size(5 * 1024 * 1024 + 300 * 1024), "5.3 MiB");
    }

    #[test]
    fn test_human_size_carries_into_next_unit() {
        assert_eq!(human_size(1024 * 1024 - 1), "1 MiB");
    }

    #[test]
    fn test_human_size_largest_value() {
        assert_eq!(human_size(u64::MAX), "16 EiB");
    }

    #[test]
    fn test_format_modified() {
        let time = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_modified(&time), "2024-03-09 07:05:01 UTC");
    }

    #[test]
    fn test_entry_href() {
        assert_eq!(entry_href(OsStr::new("notes.txt"), false), "notes.txt");
        assert_eq!(entry_href(OsStr::new("photos"), true), "photos/");
        assert_eq!(entry_href(OsStr::new("50% #1?.txt"), false), "50%25 %231%3F.txt");
        assert_eq!(entry_href(OsStr::new("<script>"), false), "<script>");
    }

    #[test]
    fn test_entry_href_never_starts_a_scheme() {
        assert_eq!(entry_href(OsStr::new("javascript:alert(1)"), false), "javascript%3Aalert(1)");
        assert_eq!(entry_href(OsStr::new("C:notes.txt"), false), "C%3Anotes.txt");
        assert_eq!(entry_href(OsStr::new(r"a\b"), true), "a%5Cb/");
    }

    #[test]
    fn test_entry_href_encodes_non_ascii_bytes() {
        assert_eq!(entry_href(OsStr::new("café.txt"), false), "caf%C3%A9.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_entry_href_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;
        let latin1 = OsStr::from_bytes(b"caf\xe9.txt");
        assert_eq!(entry_href(latin1, false), "caf%E9.txt");
    }
}
