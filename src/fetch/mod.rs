// src/fetch/mod.rs
// =============================================================================
// Document retrieval: turns a URL or a file path into a parsed Document.
//
// Submodules:
// - source: decides whether user input is a URL or a path
// - fetcher: downloads / reads the HTML and parses it
//
// The analyser never calls into this module. Fetching happens first, and the
// finished tree is handed over.
// =============================================================================

mod fetcher;
mod source;

use std::path::PathBuf;

use thiserror::Error;

pub use fetcher::{FetchConfig, Fetcher};
pub use source::Source;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The input is neither a usable URL nor a path
    #[error("invalid source: {0}")]
    InvalidSource(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
