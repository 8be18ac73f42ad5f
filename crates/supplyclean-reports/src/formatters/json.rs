use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Error;
use supplyclean_core::{CleaningRun, Progress, TableOutcome};

use crate::Reporter;

#[derive(Serialize, Deserialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    tables: Vec<TableFormatter>,
    total_rows: usize,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct TableFormatter {
    name: String,
    cleaner: Option<String>,
    rows_in: usize,
    rows_out: usize,
    columns: usize,
    elapsed_ms: u64,
}

impl From<&TableOutcome> for TableFormatter {
    fn from(outcome: &TableOutcome) -> Self {
        Self {
            name: outcome.name.clone(),
            cleaner: outcome.kind.map(|k| k.cleaner().name().to_string()),
            rows_in: outcome.rows_in,
            rows_out: outcome.rows_out,
            columns: outcome.columns,
            elapsed_ms: outcome.elapsed.as_millis() as u64,
        }
    }
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            tables: Vec::new(),
            total_rows: 0,
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Progress for JsonFormatter {
    fn on_table_done(&mut self, outcome: &TableOutcome) {
        self.tables.push(TableFormatter::from(outcome));
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_ingest_start(&self, _source: &str) {}

    fn on_ingest_done(&self, _tables: &[String]) {}

    fn on_cleaning_start(&self) {}

    fn on_summary(&mut self, run: &CleaningRun) {
        self.total_rows = run.total_rows();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use supplyclean_core::TableKind;

    #[test]
    fn test_collects_outcomes() {
        let mut formatter = JsonFormatter::new("0.1.0".to_string());
        let outcome = TableOutcome {
            name: "shipments".to_string(),
            kind: Some(TableKind::Shipments),
            rows_in: 10,
            rows_out: 9,
            columns: 9,
            elapsed: Duration::from_millis(3),
        };
        formatter.on_table_done(&outcome);
        let mut run = CleaningRun::default();
        run.outcomes.push(outcome);
        formatter.on_summary(&run);

        let json: serde_json::Value = serde_json::from_str(&formatter.to_json().unwrap()).unwrap();
        assert_eq!(json["version"], "0.1.0");
        assert_eq!(json["total_rows"], 9);
        assert_eq!(json["tables"][0]["name"], "shipments");
        assert_eq!(json["tables"][0]["cleaner"], "ShipmentCleaner");
        assert_eq!(json["tables"][0]["rows_in"], 10);
    }

    #[test]
    fn test_pass_through_has_no_cleaner() {
        let mut formatter = JsonFormatter::new("0.1.0".to_string());
        formatter.on_table_done(&TableOutcome {
            name: "audit_log".to_string(),
            kind: None,
            rows_in: 1,
            rows_out: 1,
            columns: 1,
            elapsed: Duration::ZERO,
        });
        let json: serde_json::Value = serde_json::from_str(&formatter.to_json().unwrap()).unwrap();
        assert!(json["tables"][0]["cleaner"].is_null());
    }
}
