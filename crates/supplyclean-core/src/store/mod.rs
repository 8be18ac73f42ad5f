//! Table stores: the handle the orchestrator reads raw tables from and
//! writes cleaned tables back to.

pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::dataset::Dataset;
use crate::errors::CleanError;

pub trait TableStore {
    /// Names of the tables currently present, in a stable order.
    fn table_names(&self) -> Result<Vec<String>, CleanError>;
    /// Read a whole table. Unknown names yield [`CleanError::TableNotFound`].
    fn read_table(&self, name: &str) -> Result<Dataset, CleanError>;
    /// Persist a table, fully replacing previous content under `name`.
    fn write_table(&mut self, name: &str, dataset: &Dataset) -> Result<(), CleanError>;
}
