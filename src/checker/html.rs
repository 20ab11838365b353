// src/checker/html.rs
// =============================================================================
// This module answers "does this selector match anything?" for an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// The parser is forgiving: any text becomes some document, so bad HTML never
// fails. Bad selectors do, and that error is passed back to the caller.
//
// Rust concepts:
// - BTreeMap: a map that keeps its keys sorted
// - Iterators: .select() yields matching elements lazily
// =============================================================================

use crate::error::{GraderError, Result};
use scraper::{Html, Selector};
use std::collections::BTreeMap;
use tracing::debug;

// Selector -> "matched at least one element", sorted by selector
pub type ResultMap = BTreeMap<String, bool>;

// Evaluates every selector against the document
//
// Parameters:
//   html: the raw page content (borrowed as &str)
//   checks: the selectors to test
//
// Returns: one entry per distinct selector; duplicates collapse into one key
//
// Example:
//   html = "<html><body><h1>hi</h1></body></html>"
//   checks = ["#test", "h1"]
//   result = {"#test": false, "h1": true}
pub fn evaluate_selectors(html: &str, checks: &[String]) -> Result<ResultMap> {
    // Each call gets its own parsed document; nothing is shared between runs
    let document = Html::parse_document(html);
    let mut results = ResultMap::new();

    for check in checks {
        let selector = Selector::parse(check).map_err(|e| GraderError::InvalidSelector {
            selector: check.clone(),
            reason: e.to_string(),
        })?;

        let matches = document.select(&selector).count();
        debug!(selector = check.as_str(), matches, "evaluated selector");

        // Only presence is reported, never the count
        results.insert(check.clone(), matches > 0);
    }

    Ok(results)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why BTreeMap instead of HashMap?
//    - HashMap iterates in an unpredictable order
//    - BTreeMap iterates in key order, so serde_json writes the keys sorted
//    - That makes the output byte-identical between runs
//
// 2. Why does Selector::parse need map_err?
//    - Its error borrows from the input string
//    - We turn it into an owned message so the error can leave this function
// -----------------------------------------------------------------------------
