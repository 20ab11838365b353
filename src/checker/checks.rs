// src/checker/checks.rs
// =============================================================================
// Loads the checks file: a JSON array of CSS selector strings, e.g.
//
//   ["h1", "#test", "div.bg-primary"]
//
// The list comes back sorted so the result map (and the printed JSON) has a
// stable key order. Sorting does not change what gets evaluated.
// =============================================================================

use crate::error::{GraderError, Result};
use std::path::Path;
use tracing::info;

// Selectors to test, in ascending order
pub type CheckList = Vec<String>;

// Reads and parses the checks file
//
// The read is synchronous: it is small, and it must finish before the
// document is fetched anyway.
//
// Returns: the selectors sorted ascending (byte order of their UTF-8 text)
pub fn load_checks(path: impl AsRef<Path>) -> Result<CheckList> {
    let path = path.as_ref();

    let contents = std::fs::read(path).map_err(|source| GraderError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    // Vec<String> rejects objects, numbers, nested arrays and non-string items
    let mut checks: CheckList =
        serde_json::from_slice(&contents).map_err(|source| GraderError::InvalidChecks {
            path: path.to_path_buf(),
            source,
        })?;

    checks.sort();
    info!(count = checks.len(), path = %path.display(), "loaded checks");
    Ok(checks)
}
