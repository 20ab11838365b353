// src/report.rs
// Renders a result map as pretty JSON with 4-space indentation.

use crate::checker::ResultMap;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub fn render_json(results: &ResultMap) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    results.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}
