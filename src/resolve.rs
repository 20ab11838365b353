// src/resolve.rs
// =============================================================================
// The input resolver: a gate that runs before any grading starts.
//
// It makes sure that:
// 1. The checks file exists on disk (always a local file, even if its name
//    starts with "http")
// 2. The page to grade exists: the URL answers, or the HTML file is on disk
//
// When --url is given the HTML file is never looked at.
//
// Failures come back as GraderError::Missing / Unreachable; the caller decides
// what to do with them (the CLI prints a message and exits with 1).
// =============================================================================

use crate::config::Config;
use crate::error::{GraderError, Result};
use crate::source::{probe_url, Source};
use reqwest::Client;
use std::path::Path;
use tracing::info;

// Fails with GraderError::Missing when nothing exists at `path`
pub fn assert_file_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        Ok(())
    } else {
        Err(GraderError::Missing {
            target: path.to_path_buf(),
        })
    }
}

// Fails with GraderError::Unreachable when the URL cannot be fetched
//
// An error status (404, 500, ...) still counts as existing: the server
// answered, and its page gets graded.
pub async fn assert_url_exists(client: &Client, url: &str) -> Result<()> {
    probe_url(client, url).await
}

// Runs the full gate for a configuration
//
// Returns: the source to grade (the URL if set, else the HTML file)
pub async fn resolve_inputs(client: &Client, config: &Config) -> Result<Source> {
    assert_file_exists(&config.checks_path)?;

    match &config.url {
        Some(url) => {
            assert_url_exists(client, url).await?;
            info!(url = url.as_str(), "grading remote page");
        }
        None => {
            assert_file_exists(&config.html_file)?;
            info!(path = %config.html_file.display(), "grading local file");
        }
    }

    Ok(config.html_source())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::build_client;
    use crate::test_support::{serve_pages, unused_address, write_file};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_file_exists() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "checks.json", "[]");
        assert!(assert_file_exists(&path).is_ok());
    }

    #[test]
    fn test_file_missing() {
        let err = assert_file_exists("missing.json").unwrap_err();
        assert!(err.is_existence());
        assert_eq!(err.missing_target().as_deref(), Some("missing.json"));
    }

    #[tokio::test]
    async fn test_resolve_local_file() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            checks_path: write_file(dir.path(), "checks.json", "[]"),
            html_file: write_file(dir.path(), "index.html", "<h1></h1>"),
            url: None,
        };
        let client = build_client().unwrap();
        let source = resolve_inputs(&client, &config).await.unwrap();
        assert_eq!(source, Source::File(config.html_file.clone()));
    }

    #[tokio::test]
    async fn test_missing_checks_checked_first() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            checks_path: dir.path().join("missing.json"),
            html_file: dir.path().join("also-missing.html"),
            url: None,
        };
        let client = build_client().unwrap();
        let err = resolve_inputs(&client, &config).await.unwrap_err();
        assert_eq!(
            err.missing_target(),
            Some(config.checks_path.display().to_string())
        );
    }

    #[tokio::test]
    async fn test_checks_path_is_never_a_url() {
        let config = Config {
            checks_path: PathBuf::from("http://localhost/checks.json"),
            ..Config::default()
        };
        let client = build_client().unwrap();
        let err = resolve_inputs(&client, &config).await.unwrap_err();
        assert!(matches!(err, GraderError::Missing { .. }));
    }

    #[tokio::test]
    async fn test_missing_html_file() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            checks_path: write_file(dir.path(), "checks.json", "[]"),
            html_file: dir.path().join("index.html"),
            url: None,
        };
        let client = build_client().unwrap();
        let err = resolve_inputs(&client, &config).await.unwrap_err();
        assert!(matches!(err, GraderError::Missing { .. }));
    }

    #[tokio::test]
    async fn test_url_overrides_missing_file() {
        let base = serve_pages(&[("/index.html", "<h1></h1>")]).await;
        let dir = TempDir::new().unwrap();
        let url = format!("{}/index.html", base);
        let config = Config {
            checks_path: write_file(dir.path(), "checks.json", "[]"),
            html_file: dir.path().join("never-read.html"),
            url: Some(url.clone()),
        };
        let client = build_client().unwrap();
        assert_eq!(
            resolve_inputs(&client, &config).await.unwrap(),
            Source::Url(url)
        );
    }

    #[tokio::test]
    async fn test_error_status_url_exists() {
        let base = serve_pages(&[]).await;
        let dir = TempDir::new().unwrap();
        let url = format!("{}/gone.html", base);
        let config = Config {
            checks_path: write_file(dir.path(), "checks.json", "[]"),
            html_file: dir.path().join("never-read.html"),
            url: Some(url.clone()),
        };
        let client = build_client().unwrap();
        assert_eq!(
            resolve_inputs(&client, &config).await.unwrap(),
            Source::Url(url)
        );
    }

    #[tokio::test]
    async fn test_unreachable_url_reports_url_not_file() {
        let dir = TempDir::new().unwrap();
        let url = format!("http://{}/index.html", unused_address().await);
        let config = Config {
            checks_path: write_file(dir.path(), "checks.json", "[]"),
            html_file: write_file(dir.path(), "index.html", "<h1></h1>"),
            url: Some(url.clone()),
        };
        let client = build_client().unwrap();
        let err = resolve_inputs(&client, &config).await.unwrap_err();
        assert!(matches!(err, GraderError::Unreachable { .. }));
        assert_eq!(err.missing_target(), Some(url));
    }
}
