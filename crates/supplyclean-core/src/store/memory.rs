use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::store::TableStore;
use crate::types::Tables;

/// Store keeping every table in memory, ordered by name.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    tables: Tables,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: &str, dataset: Dataset) -> Self {
        self.tables.insert(name.to_string(), dataset);
        self
    }
}

impl From<Tables> for MemoryStore {
    fn from(tables: Tables) -> Self {
        Self { tables }
    }
}

impl TableStore for MemoryStore {
    fn table_names(&self) -> Result<Vec<String>, CleanError> {
        Ok(self.tables.keys().cloned().collect())
    }

    fn read_table(&self, name: &str) -> Result<Dataset, CleanError> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| CleanError::TableNotFound(name.to_string()))
    }

    fn write_table(&mut self, name: &str, dataset: &Dataset) -> Result<(), CleanError> {
        self.tables.insert(name.to_string(), dataset.clone());
        Ok(())
    }
}
