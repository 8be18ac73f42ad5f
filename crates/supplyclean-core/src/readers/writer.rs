use std::fs::{self, File};
use std::path::Path;

use arrow::csv::WriterBuilder as CsvWriterBuilder;
use parquet::arrow::ArrowWriter;

use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::readers::reader::FileFormat;

/// Write `dataset` to `path`, replacing any existing file. Column order is
/// kept and no row index is written.
///
/// The data is written to a sibling temporary file first and renamed into
/// place, so a failed write leaves the previous file intact.
pub fn write_file<P: AsRef<Path>>(
    path: P,
    format: FileFormat,
    dataset: &Dataset,
) -> Result<(), CleanError> {
    let path = path.as_ref();
    let staging = path.with_extension(format!("{}.tmp", format.extension()));
    {
        let file = File::create(&staging)?;
        match format {
            FileFormat::Csv => {
                let mut writer = CsvWriterBuilder::new().with_header(true).build(file);
                writer.write(dataset.batch())?;
            }
            FileFormat::Parquet => {
                let mut writer = ArrowWriter::try_new(file, dataset.schema(), None)?;
                writer.write(dataset.batch())?;
                writer.close()?;
            }
        }
    }
    fs::rename(&staging, path)?;
    Ok(())
}
