//! Runs the matching cleaner over every table of a store.
//!
//! Table names are enumerated once at the start of a run. Each table is
//! fetched, dispatched to its cleaner and collected into a [`CleaningRun`].
//! The first failure aborts the run and carries the table name.
//!
//! In parallel mode the tables are still fetched one after another (the store
//! handle is not shared across threads); only the cleaning is spread over the
//! rayon pool. Progress callbacks then fire in table order once all cleaners
//! have finished.

use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::cleaners::{dispatch, CleanContext};
use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::results::{CleaningRun, TableOutcome};
use crate::store::TableStore;

/// Callbacks fired while a run progresses.
pub trait Progress {
    fn on_table_start(&mut self, _current: usize, _total: usize, _name: &str) {}
    fn on_table_done(&mut self, _outcome: &TableOutcome) {}
}

/// No progress reporting.
impl Progress for () {}

#[derive(Debug, Clone, Copy, Default)]
pub struct Orchestrator {
    context: CleanContext,
    parallel: bool,
}

impl Orchestrator {
    pub fn new(context: CleanContext) -> Self {
        Self {
            context,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Clean every table of `store`.
    pub fn clean_all<S, P>(&self, store: &S, progress: &mut P) -> Result<CleaningRun, CleanError>
    where
        S: TableStore + ?Sized,
        P: Progress + ?Sized,
    {
        let names = store.table_names()?;
        info!(tables = names.len(), parallel = self.parallel, "cleaning run started");
        let start = Instant::now();

        let outcomes = if self.parallel {
            self.clean_parallel(store, &names, progress)?
        } else {
            self.clean_sequential(store, &names, progress)?
        };

        let mut run = CleaningRun::default();
        for (outcome, dataset) in outcomes {
            run.tables.insert(outcome.name.clone(), dataset);
            run.outcomes.push(outcome);
        }

        info!(
            tables = run.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "cleaning run finished"
        );
        Ok(run)
    }

    fn clean_sequential<S, P>(
        &self,
        store: &S,
        names: &[String],
        progress: &mut P,
    ) -> Result<Vec<(TableOutcome, Dataset)>, CleanError>
    where
        S: TableStore + ?Sized,
        P: Progress + ?Sized,
    {
        let total = names.len();
        let mut cleaned = Vec::with_capacity(total);
        for (i, name) in names.iter().enumerate() {
            progress.on_table_start(i + 1, total, name);
            let raw = store.read_table(name).map_err(|e| e.in_table(name))?;
            let (outcome, dataset) = self.clean_one(name, raw)?;
            progress.on_table_done(&outcome);
            cleaned.push((outcome, dataset));
        }
        Ok(cleaned)
    }

    fn clean_parallel<S, P>(
        &self,
        store: &S,
        names: &[String],
        progress: &mut P,
    ) -> Result<Vec<(TableOutcome, Dataset)>, CleanError>
    where
        S: TableStore + ?Sized,
        P: Progress + ?Sized,
    {
        let total = names.len();
        let mut raw = Vec::with_capacity(total);
        for (i, name) in names.iter().enumerate() {
            progress.on_table_start(i + 1, total, name);
            let dataset = store.read_table(name).map_err(|e| e.in_table(name))?;
            raw.push((name.as_str(), dataset));
        }

        let cleaned = raw
            .into_par_iter()
            .map(|(name, dataset)| self.clean_one(name, dataset))
            .collect::<Result<Vec<_>, CleanError>>()?;

        for (outcome, _) in &cleaned {
            progress.on_table_done(outcome);
        }
        Ok(cleaned)
    }

    fn clean_one(&self, name: &str, raw: Dataset) -> Result<(TableOutcome, Dataset), CleanError> {
        let rows_in = raw.num_rows();
        info!(table = name, rows = rows_in, columns = raw.num_columns(), "cleaning table");

        let start = Instant::now();
        let cleaned = dispatch(name, raw, &self.context).map_err(|e| e.in_table(name))?;
        let outcome = TableOutcome::new(name, rows_in, &cleaned, start.elapsed());

        info!(
            table = name,
            rows = outcome.rows_out,
            columns = outcome.columns,
            elapsed_ms = outcome.elapsed.as_millis() as u64,
            "table cleaned"
        );
        Ok((outcome, cleaned))
    }
}
