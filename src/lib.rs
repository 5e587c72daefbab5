// src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod icons;
pub mod listing;
pub mod mime;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::ListingError;
pub use listing::{Indexer, Listing, SortBy, SortDirection, SortState};
