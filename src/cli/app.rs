//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::debug;

use super::commands;
use cardvalid::batch::BatchOptions;
use cardvalid::config::Config;
use cardvalid::output::OutputMode;

/// cardvalid - Credit card number classification and Luhn validation
#[derive(Parser, Debug)]
#[command(
    name = "cardvalid",
    version,
    about = "Credit card number classification and Luhn validation",
    long_about = "Classify credit card numbers by network and validate their Luhn checksum.\n\n\
                  Given a file, every line is analyzed and printed as a verdict line.\n\
                  Without arguments, the built-in self-test runs instead."
)]
pub struct Cli {
    /// Text file with one card number per line ("-" reads standard input)
    pub file: Option<PathBuf>,

    /// Analyze this number instead of reading a file (repeatable)
    #[arg(short = 'n', long = "number", value_name = "NUMBER", conflicts_with = "file")]
    pub numbers: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Do not print verdicts for blank lines
    #[arg(long)]
    pub skip_blank: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    debug!("effective config: {config:?}");

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        config.output_mode()
    };
    let options = BatchOptions {
        skip_blank_lines: cli.skip_blank || config.skip_blank_lines,
    };

    match cli.file {
        Some(file) => commands::analyze_file(&file, options, output_mode),
        None if !cli.numbers.is_empty() => commands::analyze_numbers(&cli.numbers, output_mode),
        None => commands::self_test(output_mode),
    }
}
