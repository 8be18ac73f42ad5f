use prettytable::{Cell, Row, Table};
use supplyclean_core::{CleaningRun, Progress, TableOutcome};

use crate::utils::numbers::{format_elapsed, format_numbers};
use crate::Reporter;

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("SupplyClean v{} - Cleaning Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    pub fn print_ingest_start(&self, source: &str) {
        println!("Ingesting raw exports from {}...", source);
    }

    pub fn print_ingest_done(&self, tables: &[String]) {
        for (i, name) in tables.iter().enumerate() {
            println!("  [{}/{}] {}", i + 1, tables.len(), name);
        }
    }

    pub fn print_cleaning_start(&self) {
        println!("\nCleaning...");
    }

    pub fn print_progress(&self, current: usize, total: usize, name: &str) {
        println!("  [{}/{}] {}", current, total, name);
    }

    pub fn print_table_result(&self, outcome: &TableOutcome) {
        let status = match outcome.kind {
            Some(kind) => format!("cleaned by {}", kind.cleaner().name()),
            None => "passed through".to_string(),
        };
        println!(
            "    {} ({} rows, {} columns) - {}",
            outcome.name,
            format_numbers(outcome.rows_out),
            outcome.columns,
            status
        );
        if outcome.rows_dropped() > 0 {
            println!("      {} duplicate rows dropped", format_numbers(outcome.rows_dropped()));
        }
    }

    pub fn print_summary(&self, run: &CleaningRun) {
        println!("\n{}", summary_table(&run.outcomes));
        let cleaned = run.outcomes.iter().filter(|o| !o.is_pass_through()).count();
        println!("===================================");
        println!(
            "Result: {} cleaned, {} passed through, {} rows",
            cleaned,
            run.outcomes.len() - cleaned,
            format_numbers(run.total_rows())
        );
    }
}

/// Render one row per table outcome.
pub fn summary_table(outcomes: &[TableOutcome]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Table"),
        Cell::new("Cleaner"),
        Cell::new("Rows In"),
        Cell::new("Rows Out"),
        Cell::new("Columns"),
        Cell::new("Time"),
    ]));

    for outcome in outcomes {
        let cleaner = outcome.kind.map_or("-", |k| k.cleaner().name());
        table.add_row(Row::new(vec![
            Cell::new(&outcome.name),
            Cell::new(cleaner),
            Cell::new(&format_numbers(outcome.rows_in)),
            Cell::new(&format_numbers(outcome.rows_out)),
            Cell::new(&outcome.columns.to_string()),
            Cell::new(&format_elapsed(outcome.elapsed)),
        ]));
    }

    table.to_string()
}

impl Progress for StdOutFormatter {
    fn on_table_start(&mut self, current: usize, total: usize, name: &str) {
        self.print_progress(current, total, name);
    }

    fn on_table_done(&mut self, outcome: &TableOutcome) {
        self.print_table_result(outcome);
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        let i = "=".repeat(self.intro_len);

        println!("{}", self.intro);
        println!("{}", i);
    }

    fn on_ingest_start(&self, source: &str) {
        self.print_ingest_start(source);
    }

    fn on_ingest_done(&self, tables: &[String]) {
        self.print_ingest_done(tables);
    }

    fn on_cleaning_start(&self) {
        self.print_cleaning_start();
    }

    fn on_summary(&mut self, run: &CleaningRun) {
        self.print_summary(run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use supplyclean_core::TableKind;

    #[test]
    fn test_summary_table_rows() {
        let outcomes = vec![
            TableOutcome {
                name: "vendors".to_string(),
                kind: Some(TableKind::Vendors),
                rows_in: 4_536,
                rows_out: 4_500,
                columns: 6,
                elapsed: Duration::from_millis(12),
            },
            TableOutcome {
                name: "audit_log".to_string(),
                kind: None,
                rows_in: 3,
                rows_out: 3,
                columns: 1,
                elapsed: Duration::ZERO,
            },
        ];
        let rendered = summary_table(&outcomes);

        assert!(rendered.contains("VendorCleaner"));
        assert!(rendered.contains("4.5K"));
        assert!(rendered.contains("12ms"));
        assert!(rendered.contains("audit_log"));
        assert_eq!(rendered.lines().filter(|l| l.starts_with('|')).count(), 3);
    }
}
