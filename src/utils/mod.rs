// src/utils/mod.rs
pub mod formatter;

pub use formatter::{encode_segment, entry_href, format_modified, human_size};
