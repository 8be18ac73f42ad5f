pub mod cleaners;
pub mod dataset;
pub mod errors;
pub mod ingest;
pub mod orchestrator;
pub mod readers;
pub mod results;
pub mod store;
pub mod transforms;
pub mod types;
pub mod utils;

pub use cleaners::{dispatch, CleanContext, Cleaner, TableKind};
pub use dataset::Dataset;
pub use errors::CleanError;
pub use ingest::ingest_directory;
pub use orchestrator::{Orchestrator, Progress};
pub use readers::FileFormat;
pub use results::{CleaningRun, TableOutcome};
pub use store::{FileStore, MemoryStore, TableStore};
