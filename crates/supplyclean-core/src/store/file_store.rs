use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::readers::{read_sequential, write_file, FileFormat, ReaderConfig};
use crate::store::TableStore;

/// Directory-backed store: table `name` lives in `<dir>/<name>.<ext>`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    format: FileFormat,
    config: ReaderConfig,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory when missing.
    pub fn open<P: AsRef<Path>>(dir: P, format: FileFormat) -> Result<Self, CleanError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            format,
            config: ReaderConfig::default(),
        })
    }

    pub fn with_reader_config(self, config: ReaderConfig) -> Self {
        Self { config, ..self }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    pub fn table_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.format.extension()))
    }
}

impl TableStore for FileStore {
    fn table_names(&self) -> Result<Vec<String>, CleanError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() || FileFormat::from_path(&path) != Some(self.format) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_table(&self, name: &str) -> Result<Dataset, CleanError> {
        let path = self.table_path(name);
        if !path.is_file() {
            return Err(CleanError::TableNotFound(name.to_string()));
        }
        debug!(table = name, path = %path.display(), "reading table");
        read_sequential(&path, self.format, &self.config)
    }

    fn write_table(&mut self, name: &str, dataset: &Dataset) -> Result<(), CleanError> {
        let path = self.table_path(name);
        debug!(table = name, path = %path.display(), rows = dataset.num_rows(), "writing table");
        write_file(&path, self.format, dataset)
    }
}
