mod errors;
mod logging;
mod parser;
mod runner;
mod writer;

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for the run report
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Print progress and a summary table to standard output (human-readable)
    Stdout,
    /// Write the report as JSON (see --report-path)
    Json,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Load every CSV export of [ingest].source_dir into the store
    Ingest,
    /// Clean every table of the store and write the results back
    Clean,
    /// Ingest, then clean
    Run,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Ingest => "ingest",
            Command::Clean => "clean",
            Command::Run => "run",
        };
        f.write_str(name)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "supplyclean",
    version,
    about = "SupplyClean CLI - Cleaning pipeline for supply-chain table exports",
    long_about = "SupplyClean loads raw supply-chain exports (products, customers, vendors, \
                  warehouses, inventory, sales, shipments) into a table store and repairs them: \
                  duplicates, inconsistent casing, negative or out-of-range numbers, impossible \
                  dates and missing values.\n\n\
                  Example usage:\n  \
                  supplyclean --config supplyclean.toml run"
)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Output format for the run report
    #[arg(short, long, value_enum, default_value = "stdout")]
    output: OutputFormat,

    /// File or directory receiving the JSON report
    #[arg(short, long, value_name = "PATH")]
    report_path: Option<String>,

    /// Enable debug logging and detailed error chains
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let args = Args::parse();
    let debug = args.debug;

    if let Err(err) = runner::run(args) {
        if debug {
            eprintln!("Error: {:?}", err);
        } else {
            eprintln!("Error: {:#}", err);
            eprintln!("\nHint: Run with --debug flag for detailed error chains");
        }
        std::process::exit(1);
    }
}
