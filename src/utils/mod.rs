//! Utility functions for URL processing.
//!
//! - [`url_parser`] - Syntactic URL checks and host classification

pub mod url_parser;
