// src/checker/mod.rs
// =============================================================================
// This module grades an HTML document against a checks file.
//
// Submodules:
// - checks: Loads and sorts the selector list
// - html: Evaluates selectors against a parsed document
//
// This file (mod.rs) ties them to the document fetcher and exposes the
// programmatic entry point, check_html_file(). It does NOT verify that the
// inputs exist first; that is the resolver's job (see resolve.rs).
// =============================================================================

mod checks;
mod html;

pub use checks::{load_checks, CheckList};
pub use html::{evaluate_selectors, ResultMap};

use crate::error::Result;
use crate::source::{build_client, fetch_document, Source};
use reqwest::Client;
use std::path::Path;
use tracing::debug;

// Grades one HTML source against a checks file
//
// Parameters:
//   source: a URL (anything starting with "http") or a local path
//   checks_path: the JSON array of selectors
//
// Returns: the result map, keyed by sorted selector
pub async fn check_html_file(source: &str, checks_path: impl AsRef<Path>) -> Result<ResultMap> {
    let client = build_client()?;
    check_html_file_with_client(&client, source, checks_path).await
}

// Same as check_html_file(), reusing an existing HTTP client
pub async fn check_html_file_with_client(
    client: &Client,
    source: &str,
    checks_path: impl AsRef<Path>,
) -> Result<ResultMap> {
    check_source(client, &Source::parse(source), checks_path).await
}

// Grades an already classified source
//
// The CLI uses this so a --file path reaches the fetcher untouched.
pub async fn check_source(
    client: &Client,
    source: &Source,
    checks_path: impl AsRef<Path>,
) -> Result<ResultMap> {
    // Checks are loaded before any fetch starts
    let checks = load_checks(checks_path)?;

    debug!(?source, "resolved document source");
    let html = fetch_document(client, source).await?;

    evaluate_selectors(&html, &checks)
}
