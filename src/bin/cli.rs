//! school-meta CLI
//!
//! Prints one line of JSON on stdout per invocation; logs go to stderr.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use school_meta::{error::Result, handler};

/// school-meta - school lookup and identity guessing helper
#[derive(Parser, Debug)]
#[command(
    name = "school-meta",
    version,
    about = "Finds schools near a zip code and guesses school colors and logos"
)]
struct Cli {
    /// Path to an optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Command to run: list, identity or validate
    command: Option<String>,

    /// Command argument: zip code for list, school name for identity
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let response = handler::dispatch(cli.config.as_deref(), cli.command.as_deref(), &cli.args);
    println!("{}", response.to_json()?);

    let code = response.exit_code();
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}
