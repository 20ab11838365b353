// src/error.rs
// =============================================================================
// Error types for the grading pipeline.
//
// Errors fall into two tiers:
// - Existence errors: an input (checks file, HTML file, URL) is not there.
//   The CLI reports "<target> does not exist. Exiting." and exits with 1.
// - Everything else: malformed checks, unreadable files, HTTP failures while
//   downloading, or a selector the CSS parser rejects. The CLI prints the
//   error to stderr and exits with 2.
//
// The library returns these typed errors; only main.rs turns them into
// exit codes.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, GraderError>;

#[derive(Debug, Error)]
pub enum GraderError {
    /// A local file that must exist was not found
    #[error("{} does not exist", .target.display())]
    Missing { target: PathBuf },

    /// The URL probe got no response (bad URL or failed request)
    #[error("{url} does not exist ({reason})")]
    Unreachable { url: String, reason: String },

    /// A file could not be read after it passed the existence check
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The checks file is not a JSON array of strings
    #[error("invalid checks file {}: {source}", .path.display())]
    InvalidChecks {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Downloading the document failed
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The CSS parser rejected a selector from the checks file
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The HTTP client could not be built
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl GraderError {
    /// True for the "input does not exist" tier
    pub fn is_existence(&self) -> bool {
        matches!(self, GraderError::Missing { .. } | GraderError::Unreachable { .. })
    }

    /// The path or URL an existence error refers to, as the user typed it
    pub fn missing_target(&self) -> Option<String> {
        match self {
            GraderError::Missing { target } => Some(target.display().to_string()),
            GraderError::Unreachable { url, .. } => Some(url.clone()),
            _ => None,
        }
    }
}
