use anyhow::{Context, Result};
use chrono::Local;
use supplyclean_core::{ingest_directory, CleanContext, FileStore, Orchestrator};
use supplyclean_reports::{JsonFormatter, Reporter, StdOutFormatter};
use tracing::info;

use crate::errors::ConfigError;
use crate::logging::init_logging;
use crate::parser::{parse_config, Config};
use crate::writer::{resolve_file_path, write_report};
use crate::{Args, Command, OutputFormat};

pub fn run(args: Args) -> Result<()> {
    let config = parse_config(&args.config)?;
    let _guard = init_logging(&config.logging, args.debug)?;
    let version = env!("CARGO_PKG_VERSION").to_string();

    match args.output {
        OutputFormat::Stdout => {
            let mut formatter = StdOutFormatter::new(version);
            execute(args.command, &config, &mut formatter)
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(version);
            execute(args.command, &config, &mut formatter)?;
            let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
            let path = resolve_file_path(&args.report_path, &timestamp)?;
            write_report(&path, &formatter.to_json()?)?;
            info!(path = %path.display(), "report written");
            Ok(())
        }
    }
}

fn execute<R: Reporter>(command: Command, config: &Config, reporter: &mut R) -> Result<()> {
    let mut store = FileStore::open(&config.store.dir, config.store.format.into())
        .with_context(|| format!("Failed to open store: {}", config.store.dir.display()))?
        .with_reader_config(config.store.reader_config()?);

    reporter.on_start();

    if matches!(command, Command::Ingest | Command::Run) {
        let ingest = config.ingest.as_ref().ok_or_else(|| ConfigError::MissingSection {
            command: command.to_string(),
            section: "ingest".to_string(),
        })?;
        let source = ingest.source_dir.display().to_string();
        reporter.on_ingest_start(&source);
        let tables = ingest_directory(&ingest.source_dir, &mut store)
            .with_context(|| format!("Failed to ingest raw exports from: {}", source))?;
        reporter.on_ingest_done(&tables);
    }

    if matches!(command, Command::Clean | Command::Run) {
        let context = match config.cleaning.reference_date()? {
            Some(today) => CleanContext::new(today),
            None => CleanContext::default(),
        };
        let orchestrator = Orchestrator::new(context).with_parallel(config.cleaning.parallel);

        reporter.on_cleaning_start();
        let run = orchestrator
            .clean_all(&store, reporter)
            .context("Cleaning failed")?;
        run.persist(&mut store)
            .context("Failed to write cleaned tables")?;
        reporter.on_summary(&run);
    }

    Ok(())
}
