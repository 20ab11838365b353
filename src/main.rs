// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only, stdout is reserved for the JSON result)
// 3. Check that the inputs exist, then grade the page
// 4. Print the JSON and exit with the proper code:
//      0 = graded, 1 = an input does not exist, 2 = any other error
//
// This is the only place that decides the exit status; the library just
// returns errors.
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use html_grader::{check_source, render_json, resolve_inputs, source, GraderError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            // Malformed checks, bad selectors, failed downloads...
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Runs the whole pipeline
// Returns:
//   Ok(0) = result printed
//   Ok(1) = checks file, HTML file or URL does not exist
//   Err   = anything else
async fn run(cli: &Cli) -> Result<i32> {
    let config = cli.config();
    let client = source::build_client()?;

    // Nothing else runs until the inputs are known to exist
    let html_source = match resolve_inputs(&client, &config).await {
        Ok(html_source) => html_source,
        Err(e) => return report_missing(e),
    };

    let results = check_source(&client, &html_source, &config.checks_path).await?;

    println!("{}", render_json(&results)?);
    Ok(0)
}

// Existence errors get the short message on stdout and exit code 1;
// every other error is passed up
fn report_missing(error: GraderError) -> Result<i32> {
    if !error.is_existence() {
        return Err(error.into());
    }

    tracing::debug!(%error, "input check failed");
    println!("{} does not exist. Exiting.", error.missing_target().unwrap_or_default());
    Ok(1)
}

// Logs go to stderr. RUST_LOG wins when set; otherwise -v picks the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
