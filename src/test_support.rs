// Shared fixtures for unit tests: a throwaway HTTP server and temp files.

use axum::{http::StatusCode, response::Html, routing::get, Router};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;

// Serves the given (path, html) pages on 127.0.0.1 and returns the base URL.
// Unknown paths answer 404 with a "not found" body.
pub async fn serve_pages(pages: &[(&str, &str)]) -> String {
    let mut router = Router::new();
    for (path, html) in pages {
        let html = html.to_string();
        router = router.route(path, get(move || async move { Html(html) }));
    }
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "not found") });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

// An address nothing is listening on.
pub async fn unused_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
