pub mod formatters;
pub mod utils;

use supplyclean_core::{CleaningRun, Progress};
pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};

/// Receives the milestones of a CLI run. Per-table cleaning progress comes
/// through the [`Progress`] supertrait so a reporter can be handed straight
/// to the orchestrator.
pub trait Reporter: Progress {
    fn on_start(&self);
    fn on_ingest_start(&self, source: &str);
    fn on_ingest_done(&self, tables: &[String]);
    fn on_cleaning_start(&self);
    fn on_summary(&mut self, run: &CleaningRun);
}
