// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// All flags are optional:
//   -c, --checks <FILE>   checks file (default: checks.json)
//   -f, --file <FILE>     local HTML file (default: index.html)
//   -u, --url <URL>       remote page; wins over --file
//   -v, --verbose         more logging on stderr (repeatable)
// =============================================================================

use clap::{ArgAction, Parser};
use html_grader::config::{Config, CHECKS_FILE_DEFAULT, HTML_FILE_DEFAULT};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "html-grader",
    version,
    about = "Grade an HTML page for the presence of CSS selectors",
    long_about = "html-grader loads a JSON array of CSS selectors, checks each one against a local \
                  HTML file or a remote page, and prints a JSON map of selector -> present."
)]
pub struct Cli {
    /// Path to the checks file (a JSON array of CSS selectors)
    #[arg(short, long, value_name = "CHECK_FILE", default_value = CHECKS_FILE_DEFAULT)]
    pub checks: PathBuf,

    /// Path to the HTML file to grade
    #[arg(short, long, value_name = "HTML_FILE", default_value = HTML_FILE_DEFAULT)]
    pub file: PathBuf,

    /// URL of the page to grade (overrides --file)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Log more to stderr (-v = info, -vv = debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            checks_path: self.checks.clone(),
            html_file: self.file.clone(),
            url: self.url.clone(),
        }
    }
}
