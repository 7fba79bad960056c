//! Command-line interface components.

use crate::config::ProcessorConfig;
use crate::constants::{DEFAULT_INPUT_FILE, get_output_filename};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "trip-processor")]
#[command(about = "Convert raw taxi trip CSV records into enriched CSV ready for PostGIS loading")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the raw trip CSV file
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_FILE)]
    pub input_path: PathBuf,

    /// Output CSV path (defaults to <input-stem>_preprocessed.csv next to the input)
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// Single-byte field delimiter for input and output
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Only print errors and the final row counts
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Get the output path, defaulting to `<stem>_preprocessed.csv` beside the input
    pub fn get_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => default_output_path(&self.input_path),
        }
    }

    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Build the processor configuration from the flags
    pub fn to_config(&self) -> ProcessorConfig {
        let mut config = ProcessorConfig::default().with_delimiter(self.delimiter);
        if self.quiet {
            config = config.without_progress().without_summary();
        } else if self.no_progress {
            config = config.without_progress();
        }
        config
    }
}

/// `data/train.csv` -> `data/train_preprocessed.csv`
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();
    input_path.with_file_name(get_output_filename(&stem))
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let value = match value {
        "\\t" | "tab" => "\t",
        other => other,
    };

    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{}'",
            value
        )),
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trip_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    tracing::debug!("Logging initialized at level: {}", log_level);
}
