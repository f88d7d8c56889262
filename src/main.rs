//! hls-estimate Command Line Interface
//!
//! Prints HLS segment counts and storage estimates for a source file.

use clap::Parser;
use log::{error, info};
use std::io;
use std::process;

#[derive(Parser)]
#[command(name = "hls-estimate")]
#[command(about = "Estimate HLS segment counts and storage per quality tier", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Source file size in GB
    #[arg(value_name = "FILE_SIZE_GB", default_value_t = 4.0, allow_negative_numbers = true)]
    file_size_gb: f64,

    /// Video duration in minutes (derived at 8 Mbps when omitted)
    #[arg(short, long, value_name = "MINUTES", allow_negative_numbers = true)]
    duration: Option<f64>,

    /// Print the estimate as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    info!("hls-estimate {}", hls_estimate::VERSION);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> hls_estimate::EstimateResult<()> {
    if cli.json {
        let result = hls_estimate::estimate_segments(cli.file_size_gb, cli.duration)?;
        println!("{}", hls_estimate::report::to_json(&result)?);
    } else {
        let mut stdout = io::stdout().lock();
        hls_estimate::calculate_hls_segments(cli.file_size_gb, cli.duration, &mut stdout)?;
    }
    Ok(())
}
