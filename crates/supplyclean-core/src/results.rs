use std::time::Duration;

use crate::cleaners::TableKind;
use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::store::TableStore;
use crate::types::Tables;

/// What happened to one table during a cleaning run.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOutcome {
    pub name: String,
    /// `None` when the table had no cleaner and passed through.
    pub kind: Option<TableKind>,
    pub rows_in: usize,
    pub rows_out: usize,
    pub columns: usize,
    pub elapsed: Duration,
}

impl TableOutcome {
    pub fn new(name: &str, rows_in: usize, cleaned: &Dataset, elapsed: Duration) -> Self {
        Self {
            name: name.to_string(),
            kind: TableKind::from_table_name(name),
            rows_in,
            rows_out: cleaned.num_rows(),
            columns: cleaned.num_columns(),
            elapsed,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        self.kind.is_none()
    }

    /// Rows removed by deduplication.
    pub fn rows_dropped(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}

/// Cleaned tables of a run, keyed by table name, with one outcome per table
/// in processing order.
#[derive(Debug, Clone, Default)]
pub struct CleaningRun {
    pub tables: Tables,
    pub outcomes: Vec<TableOutcome>,
}

impl CleaningRun {
    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.tables.get(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn total_rows(&self) -> usize {
        self.outcomes.iter().map(|o| o.rows_out).sum()
    }

    /// Write every cleaned table back to `store`, replacing the raw content.
    pub fn persist<S: TableStore + ?Sized>(&self, store: &mut S) -> Result<(), CleanError> {
        for (name, dataset) in &self.tables {
            store
                .write_table(name, dataset)
                .map_err(|e| e.in_table(name))?;
        }
        Ok(())
    }
}
