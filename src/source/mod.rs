// src/source/mod.rs
// =============================================================================
// This module retrieves the raw HTML to grade.
//
// A source string is either a URL or a local path:
// - Anything starting with "http" is downloaded (see http.rs)
// - Everything else is read from disk
//
// Submodules:
// - http: reqwest client, URL probe and page download
// =============================================================================

mod http;

pub use http::{build_client, fetch_page, probe_url};

use crate::error::{GraderError, Result};
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::debug;

// Where the HTML document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    // Classifies a source string
    //
    // The rule is a plain prefix test, so "https://..." and "http://..." are
    // URLs, and so is a local file literally named "httpdocs.html".
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http") {
            Source::Url(source.to_string())
        } else {
            Source::File(PathBuf::from(source))
        }
    }

    // Classifies a local path with the same prefix rule
    //
    // A path that is not valid UTF-8 cannot name a URL, so it stays a file
    // and keeps its exact bytes.
    pub fn from_path(path: &Path) -> Self {
        match path.to_str() {
            Some(text) => Source::parse(text),
            None => Source::File(path.to_path_buf()),
        }
    }
}

// Retrieves the full document for a source
//
// Local files are read as bytes and decoded leniently, so a stray invalid
// byte does not stop grading.
pub async fn fetch_document(client: &Client, source: &Source) -> Result<String> {
    match source {
        Source::Url(url) => {
            debug!(url = url.as_str(), "fetching remote document");
            fetch_page(client, url).await
        }
        Source::File(path) => {
            debug!(path = %path.display(), "reading local document");
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| GraderError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
