// src/lib.rs
// =============================================================================
// html-grader: checks an HTML page for the presence of CSS selectors.
//
// Pipeline:
// 1. resolve   - make sure the checks file and the page exist
// 2. checker   - load the sorted selector list
// 3. source    - read the page from disk or download it
// 4. checker   - evaluate each selector, build selector -> bool
// 5. report    - render the map as JSON
//
// Library callers usually only need check_html_file().
// =============================================================================

pub mod checker;
pub mod config;
pub mod error;
pub mod report;
pub mod resolve;
pub mod source;

#[cfg(test)]
mod test_support;

pub use checker::{
    check_html_file, check_html_file_with_client, check_source, evaluate_selectors, load_checks,
    CheckList, ResultMap,
};
pub use config::Config;
pub use error::{GraderError, Result};
pub use report::render_json;
pub use resolve::resolve_inputs;
pub use source::Source;
