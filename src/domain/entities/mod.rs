//! Core domain entities.
//!
//! - [`UrlEntry`] - A stored mapping from a sequential short id to the original URL

pub mod url_entry;

pub use url_entry::UrlEntry;
