//! File reader
//!
//! Reads a whole CSV or Parquet file into a single [`Dataset`].
//!
//! CSV columns are all read as nullable UTF-8 text (an empty field is null);
//! cleaners coerce the columns they use. Parquet files keep their stored
//! schema.
//!
//! ```no_run
//! use supplyclean_core::readers::{read_sequential, FileFormat, ReaderConfig};
//!
//! let products = read_sequential("data/products.csv", FileFormat::Csv, &ReaderConfig::default())?;
//! println!("{:?}", products.shape());
//! # Ok::<(), supplyclean_core::CleanError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use arrow::csv::ReaderBuilder as CsvReaderBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::readers::config::ReaderConfig;
use crate::types::Batches;

/// File format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Parquet,
}

impl FileFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "csv" => Some(FileFormat::Csv),
            "parquet" => Some(FileFormat::Parquet),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Parquet => "parquet",
        }
    }
}

// ============================================================================
// CSV Helper Functions
// ============================================================================

/// Generate UTF-8 schema from CSV file header
fn csv_generate_schema(path: &Path, delimiter: u8) -> Result<Schema, CleanError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    match lines.next() {
        Some(first) => {
            let header = first?;
            let header = header.trim_start_matches('\u{feff}');
            let fields: Vec<Field> = header
                .split(char::from(delimiter))
                .map(|c| Field::new(c.trim().trim_matches('"'), DataType::Utf8, true))
                .collect();
            Ok(Schema::new(fields))
        }
        None => Err(CleanError::EmptyFile(path.display().to_string())),
    }
}

/// Read CSV sequentially
fn csv_read_sequential(path: &Path, config: &ReaderConfig) -> Result<Dataset, CleanError> {
    let schema = Arc::new(csv_generate_schema(path, config.delimiter)?);
    let file = File::open(path)?;

    let reader = CsvReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_delimiter(config.delimiter)
        .with_batch_size(config.batch_size)
        .build(file)?;

    let batches = reader.collect::<Result<Batches, _>>()?;
    Dataset::from_batches(schema, &batches)
}

// ============================================================================
// Parquet Helper Functions
// ============================================================================

/// Read Parquet sequentially
fn parquet_read_sequential(path: &Path, config: &ReaderConfig) -> Result<Dataset, CleanError> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();

    let reader = builder.with_batch_size(config.batch_size).build()?;

    let batches = reader.collect::<Result<Batches, _>>()?;
    Dataset::from_batches(schema, &batches)
}

// ============================================================================
// Public API
// ============================================================================

/// Read a whole file into one dataset.
///
/// # Arguments
///
/// * `path` - Path to the file
/// * `format` - File format (CSV or Parquet)
/// * `config` - Reader configuration
pub fn read_sequential<P: AsRef<Path>>(
    path: P,
    format: FileFormat,
    config: &ReaderConfig,
) -> Result<Dataset, CleanError> {
    match format {
        FileFormat::Csv => csv_read_sequential(path.as_ref(), config),
        FileFormat::Parquet => parquet_read_sequential(path.as_ref(), config),
    }
}
