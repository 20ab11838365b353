// src/source/http.rs
// =============================================================================
// HTTP side of the document fetcher.
//
// Key functionality:
// - Builds the reqwest client shared by the probe and the download
// - Probes a URL to decide whether it "exists" (GET, like a browser would)
// - Downloads a page body for grading
// - Turns reqwest failures into short, readable reasons
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling
// - match: To sort errors into categories
// =============================================================================

use crate::error::{GraderError, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

// Creates the HTTP client for one run
//
// No timeout is set on purpose: reqwest's defaults (and its default
// redirect policy of up to 10 hops) govern the request.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("html-grader/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(GraderError::Client)
}

// Checks that a URL answers at all
//
// Parameters:
//   client: reqwest HTTP client (borrowed, we don't own it)
//   url: the URL to probe, as the user typed it
//
// Returns: Ok(()) if the server sent any response, even 404 or 500;
//          GraderError::Unreachable for a bad URL or a failed request
pub async fn probe_url(client: &Client, url: &str) -> Result<()> {
    // Reject things that are not URLs at all before touching the network
    let parsed = Url::parse(url).map_err(|e| GraderError::Unreachable {
        url: url.to_string(),
        reason: format!("invalid URL: {}", e),
    })?;

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| GraderError::Unreachable {
            url: url.to_string(),
            reason: categorize_error(&e),
        })?;

    let status = response.status();
    if status.is_success() {
        debug!(url, status = status.as_u16(), "probe response");
    } else {
        warn!(url, status = %describe_status(status), "page answered with an error status");
    }

    Ok(())
}

// Downloads a page and returns its body as text
//
// Any status is accepted: the body of a 404 page is still HTML that can be
// graded. Only a failed transfer is an error.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let to_fetch_error = |source| GraderError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(to_fetch_error)?;

    let status = response.status();
    if !status.is_success() {
        warn!(url, status = status.as_u16(), "grading a non-success response");
    }

    // text() decodes using the charset from Content-Type, falling back to UTF-8
    let body = response.text().await.map_err(to_fetch_error)?;
    debug!(url, bytes = body.len(), "downloaded page");
    Ok(body)
}

// Short human-readable description of an HTTP status
fn describe_status(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
fn categorize_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string();

    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            "could not resolve hostname".to_string()
        } else {
            "connection failed".to_string()
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error".to_string()
    } else {
        error_string
    }
}
