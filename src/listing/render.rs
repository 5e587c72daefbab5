// src/listing/render.rs
use super::sort::{SortBy, SortState};
use super::Listing;
use crate::icons::{IconEmbedder, IconTarget, IconTheme};
use crate::utils::{entry_href, format_modified, human_size};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = "
.col-size { text-align: right; }
thead tr, tr:nth-child(even) { background-color: whitesmoke; }
";

const COLUMNS: [(SortBy, &str); 5] = [
    (SortBy::Name, "Name"),
    (SortBy::Size, "Size"),
    (SortBy::Type, "Type"),
    (SortBy::MimeType, "Mime type"),
    (SortBy::Modified, "Modified"),
];

struct Row {
    icon: Option<String>,
    href: String,
    name: String,
    size: String,
    kind: &'static str,
    mime: String,
    modified: String,
}

/// Link for a column header: the current path with the query replaced by
/// the sort state that clicking the column selects.
pub fn header_href(link_base: &str, current: SortState, field: SortBy) -> String {
    let next = current.next_for(field);
    format!(
        "{}?sortby={}&sortdir={}",
        link_base,
        next.field.as_query(),
        next.direction.as_query()
    )
}

/// Renders the page. Every entry in the listing produces exactly one row;
/// maud HTML-escapes every interpolated name and path.
pub fn render_listing(listing: &Listing, icons: &IconTheme) -> String {
    let mut embedder = IconEmbedder::new();

    let parent_icon = if listing.has_parent() {
        embedder.embed(&icons.resolve(IconTarget::Directory))
    } else {
        None
    };

    let rows: Vec<Row> = listing
        .entries
        .iter()
        .map(|entry| {
            let target = if entry.is_dir() {
                IconTarget::Directory
            } else {
                IconTarget::Mime(entry.mime_type.as_deref())
            };
            Row {
                icon: embedder.embed(&icons.resolve(target)),
                href: entry_href(&entry.file_name, entry.is_dir()),
                name: entry.name.clone(),
                size: entry.size.map(human_size).unwrap_or_default(),
                kind: entry.kind.as_str(),
                mime: entry.mime_type.clone().unwrap_or_default(),
                modified: entry.modified.as_ref().map(format_modified).unwrap_or_default(),
            }
        })
        .collect();

    page(listing, parent_icon.as_deref(), &rows).into_string()
}

fn icon(src: Option<&str>) -> Markup {
    html! {
        @if let Some(src) = src {
            img src=(src) alt="" style="vertical-align: middle";
        } @else {
            img alt="" style="vertical-align: middle";
        }
    }
}

fn page(listing: &Listing, parent_icon: Option<&str>, rows: &[Row]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Index of " (listing.url_path) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                @if listing.has_parent() {
                    p {
                        a href=".." { (icon(parent_icon)) " Parent directory" }
                    }
                }
                table {
                    thead {
                        tr {
                            th { "Icon" }
                            @for (field, label) in COLUMNS {
                                th { a href=(header_href(&listing.link_base, listing.sort, field)) { (label) } }
                            }
                        }
                    }
                    tbody {
                        @for row in rows {
                            tr {
                                td class="col-icon" { (icon(row.icon.as_deref())) }
                                td class="col-filename" { a href=(row.href) { (row.name) } }
                                td class="col-size" { (row.size) }
                                td class="col-type" { (row.kind) }
                                td class="col-mimetype" { (row.mime) }
                                td class="col-mtime" { (row.modified) }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            td colspan="6" {
                                (rows.len()) " entries"
                                @if listing.hidden_count > 0 {
                                    " (" (listing.hidden_count) " hidden)"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::{Entry, EntryKind};
    use crate::listing::SortDirection;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn entry(name: &str, kind: EntryKind, mime: Option<&str>) -> Entry {
        Entry {
            name: name.to_string(),
            file_name: name.into(),
            parent_path: "/docs/".to_string(),
            full_path: PathBuf::from("/srv/docs").join(name),
            kind,
            size: Some(1536),
            modified: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single(),
            mime_type: mime.map(str::to_string),
        }
    }

    fn listing(entries: Vec<Entry>, hidden_count: usize) -> Listing {
        Listing {
            url_path: "/docs/".to_string(),
            link_base: "/docs/".to_string(),
            sort: SortState::new(SortBy::Size, SortDirection::Ascending),
            entries,
            hidden_count,
        }
    }

    fn render(listing: &Listing) -> String {
        let temp = TempDir::new().unwrap();
        render_listing(listing, &IconTheme::new(temp.path(), "png"))
    }

    #[test]
    fn test_header_href_toggles_active_column() {
        let current = SortState::new(SortBy::Size, SortDirection::Ascending);
        assert_eq!(header_href("/docs/", current, SortBy::Size), "/docs/?sortby=size&sortdir=desc");
        assert_eq!(header_href("/docs/", current, SortBy::Name), "/docs/?sortby=filename&sortdir=asc");
    }

    #[test]
    fn test_row_contents() {
        let page = render(&listing(vec![entry("notes.txt", EntryKind::File, Some("text/plain"))], 0));

        assert!(page.contains("<title>Index of /docs/</title>"));
        assert!(page.contains(r#"<a href="notes.txt">notes.txt</a>"#));
        assert!(page.contains(r#"<td class="col-size">1.5 KiB</td>"#));
        assert!(page.contains(r#"<td class="col-type">file</td>"#));
        assert!(page.contains(r#"<td class="col-mimetype">text/plain</td>"#));
        assert!(page.contains(r#"<td class="col-mtime">2024-01-02 03:04:05 UTC</td>"#));
    }

    #[test]
    fn test_header_links_are_escaped_queries() {
        let page = render(&listing(Vec::new(), 0));

        assert!(page.contains("?sortby=size&amp;sortdir=desc\">Size</a>"));
        assert!(page.contains("?sortby=filename&amp;sortdir=asc\">Name</a>"));
        assert!(page.contains("?sortby=type&amp;sortdir=asc\">Type</a>"));
        assert!(page.contains("?sortby=mimetype&amp;sortdir=asc\">Mime type</a>"));
        assert!(page.contains("?sortby=mtime&amp;sortdir=asc\">Modified</a>"));
    }

    #[test]
    fn test_names_are_html_escaped() {
        let page = render(&listing(vec![entry("<script>alert(1)</script>", EntryKind::File, None)], 0));

        assert!(!page.contains("<script>"));
        assert!(page.contains(r#"href="&lt;script&gt;alert(1)&lt;"#));
        assert!(page.contains(">&lt;script&gt;alert(1)&lt;"));
    }

    #[test]
    fn test_scheme_like_names_stay_relative() {
        let page = render(&listing(vec![entry("javascript:alert(1)", EntryKind::File, None)], 0));

        assert!(page.contains(r#"<a href="javascript%3Aalert(1)">javascript:alert(1)</a>"#));
        assert!(!page.contains(r#"href="javascript:"#));
    }

    #[test]
    fn test_directory_link_has_trailing_slash() {
        let page = render(&listing(vec![entry("photos", EntryKind::Directory, None)], 0));
        assert!(page.contains(r#"<a href="photos/">photos</a>"#));
    }

    #[test]
    fn test_parent_link_only_below_root() {
        let nested = render(&listing(Vec::new(), 0));
        assert!(nested.contains("Parent directory"));

        let mut root = listing(Vec::new(), 0);
        root.url_path = "/".to_string();
        root.link_base = "/".to_string();
        assert!(!render(&root).contains("Parent directory"));
    }

    #[test]
    fn test_footer_counts() {
        let entries = vec![
            entry("a.txt", EntryKind::File, Some("text/plain")),
            entry("b.txt", EntryKind::File, Some("text/plain")),
        ];
        let page = render(&listing(entries.clone(), 3));
        assert!(page.contains("2 entries"));
        assert!(page.contains("(3 hidden)"));

        let page = render(&listing(entries, 0));
        assert!(page.contains("2 entries"));
        assert!(!page.contains("hidden)"));
    }

    #[test]
    fn test_missing_metadata_renders_empty_cells() {
        let mut degraded = entry("dangling", EntryKind::Other("link"), None);
        degraded.size = None;
        degraded.modified = None;
        let page = render(&listing(vec![degraded], 0));

        assert!(page.contains(r#"<td class="col-size"></td>"#));
        assert!(page.contains(r#"<td class="col-type">link</td>"#));
        assert!(page.contains(r#"<td class="col-mtime"></td>"#));
    }

    #[test]
    fn test_icons_are_inlined() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("places")).unwrap();
        std::fs::write(temp.path().join("places/folder.png"), b"abc").unwrap();
        let icons = IconTheme::new(temp.path(), "png");

        let page = render_listing(&listing(vec![entry("sub", EntryKind::Directory, None)], 0), &icons);

        assert!(page.contains("data:image/png;base64,YWJj"));
    }
}
