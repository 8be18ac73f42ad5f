use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::errors::CleanError;
use crate::readers::{read_sequential, FileFormat, ReaderConfig};
use crate::store::TableStore;

const CSV_MARKER: &str = ".csv";

/// Table name for a raw file, or `None` when the file is not a CSV export.
/// `sales.csv` loads as `sales`.
pub fn table_name_for(file_name: &str) -> Option<&str> {
    let end = file_name.find(CSV_MARKER)?;
    let name = &file_name[..end];
    (!name.is_empty()).then_some(name)
}

/// Load every CSV export of `source_dir` into `store`, one table per file,
/// replacing tables that already exist. Returns the ingested table names in
/// load order.
pub fn ingest_directory<P, S>(source_dir: P, store: &mut S) -> Result<Vec<String>, CleanError>
where
    P: AsRef<Path>,
    S: TableStore + ?Sized,
{
    let source_dir = source_dir.as_ref();
    let start = Instant::now();

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(source_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };
        match table_name_for(file_name) {
            Some(table) => files.push((table.to_string(), path.clone())),
            None => debug!(file = file_name, "skipping non-csv file"),
        }
    }
    files.sort();

    let config = ReaderConfig::default();
    let mut ingested = Vec::with_capacity(files.len());
    for (table, path) in files {
        let dataset = read_sequential(&path, FileFormat::Csv, &config).map_err(|e| e.in_table(&table))?;
        info!(file = %path.display(), rows = dataset.num_rows(), "ingesting {} in store", table);
        store
            .write_table(&table, &dataset)
            .map_err(|e| e.in_table(&table))?;
        ingested.push(table);
    }

    let minutes = start.elapsed().as_secs_f64() / 60.0;
    info!("------------Ingestion Complete------------");
    info!(tables = ingested.len(), "Total Time Taken: {minutes} minutes");
    Ok(ingested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_for() {
        assert_eq!(table_name_for("sales.csv"), Some("sales"));
        assert_eq!(table_name_for("products.csv"), Some("products"));
        assert_eq!(table_name_for("notes.txt"), None);
        assert_eq!(table_name_for(".csv"), None);
    }
}
