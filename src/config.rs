// src/config.rs
// =============================================================================
// Run configuration: where the checks come from and which page to grade.
//
// A Config is built once per run (from the CLI, or by library callers) and
// never changes afterwards.
// =============================================================================

use crate::source::Source;
use std::path::PathBuf;

// Checks file used when --checks is not given
pub const CHECKS_FILE_DEFAULT: &str = "checks.json";

// HTML file used when neither --file nor --url is given
pub const HTML_FILE_DEFAULT: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the JSON array of selectors
    pub checks_path: PathBuf,
    /// Local HTML file to grade
    pub html_file: PathBuf,
    /// Remote page to grade; overrides html_file when set
    pub url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checks_path: PathBuf::from(CHECKS_FILE_DEFAULT),
            html_file: PathBuf::from(HTML_FILE_DEFAULT),
            url: None,
        }
    }
}

impl Config {
    /// The document source handed to the fetcher.
    /// The URL wins over the file whenever it is present.
    pub fn html_source(&self) -> Source {
        match &self.url {
            Some(url) => Source::Url(url.clone()),
            None => Source::from_path(&self.html_file),
        }
    }
}
