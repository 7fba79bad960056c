use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use trip_processor::cli::{Args, setup_logging};
use trip_processor::{ProcessingStats, TripProcessor};

fn main() {
    // Parse command line arguments
    let args = Args::parse();
    setup_logging(&args);

    println!("Processing {}...", args.input_path.display());

    match run(&args) {
        Ok(_stats) => {
            // Counts have already been reported by the processor
            println!("Processing complete.");
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<ProcessingStats> {
    let output_path = args.get_output_path();

    let processor = TripProcessor::new(args.input_path.clone(), output_path)
        .context("Cannot start processing")?
        .with_config(args.to_config());

    let stats = processor.process().with_context(|| {
        format!(
            "Failed to transform {} into {}",
            processor.input_path().display(),
            processor.output_path().display()
        )
    })?;

    Ok(stats)
}
