mod common;

use common::*;
use supplyclean_core::cleaners::shipment::DELAY_DAYS;
use supplyclean_core::{
    CleanError, MemoryStore, Orchestrator, Progress, TableKind, TableOutcome, TableStore,
};

fn store() -> MemoryStore {
    all_tables()
        .into_iter()
        .fold(MemoryStore::new(), |store, (name, ds)| store.with_table(name, ds))
}

#[derive(Default)]
struct Recorder {
    started: Vec<(usize, usize, String)>,
    done: Vec<String>,
}

impl Progress for Recorder {
    fn on_table_start(&mut self, current: usize, total: usize, name: &str) {
        self.started.push((current, total, name.to_string()));
    }

    fn on_table_done(&mut self, outcome: &TableOutcome) {
        self.done.push(outcome.name.clone());
    }
}

#[test]
fn test_clean_all_covers_every_table() {
    let store = store();
    let mut recorder = Recorder::default();
    let run = Orchestrator::new(context())
        .clean_all(&store, &mut recorder)
        .unwrap();

    assert_eq!(run.len(), 8);
    assert_eq!(run.outcomes.len(), 8);
    assert_eq!(recorder.started.len(), 8);
    assert_eq!(recorder.started[0], (1, 8, "audit_log".to_string()));
    assert_eq!(recorder.done, store.table_names().unwrap());

    let audit = run.outcomes.iter().find(|o| o.name == "audit_log").unwrap();
    assert!(audit.is_pass_through());
    assert_eq!(run.get("audit_log"), Some(&store.read_table("audit_log").unwrap()));

    let vendors = run.outcomes.iter().find(|o| o.name == "vendors").unwrap();
    assert_eq!(vendors.kind, Some(TableKind::Vendors));
    assert_eq!((vendors.rows_in, vendors.rows_out), (3, 2));
}

#[test]
fn test_persist_writes_back() {
    let mut store = store();
    let run = Orchestrator::new(context()).clean_all(&store, &mut ()).unwrap();
    run.persist(&mut store).unwrap();

    let shipments = store.read_table("shipments").unwrap();
    assert!(shipments.column_names().iter().any(|c| c == DELAY_DAYS));
    assert_eq!(store.read_table("vendors").unwrap().num_rows(), 2);
}

#[test]
fn test_parallel_matches_sequential() {
    let store = store();
    let sequential = Orchestrator::new(context()).clean_all(&store, &mut ()).unwrap();
    let mut recorder = Recorder::default();
    let parallel = Orchestrator::new(context())
        .with_parallel(true)
        .clean_all(&store, &mut recorder)
        .unwrap();

    assert_eq!(sequential.tables, parallel.tables);
    assert_eq!(recorder.done, store.table_names().unwrap());
}

#[test]
fn test_cleaning_is_idempotent() {
    let mut store = store();
    let first = Orchestrator::new(context()).clean_all(&store, &mut ()).unwrap();
    first.persist(&mut store).unwrap();
    let second = Orchestrator::new(context()).clean_all(&store, &mut ()).unwrap();

    for (name, ds) in &first.tables {
        assert_eq!(second.get(name), Some(ds), "table {name} changed on second pass");
    }
}

#[test]
fn test_idempotent_with_near_duplicates_and_future_launches() {
    // Near-duplicate rows whose median launch date is itself in the future.
    let products = rows_table(
        PRODUCT_COLUMNS,
        &[
            ["P1", "Lamp", "office", "active", "local", "20", "10", "2099-01-01", "1"],
            ["P1", "Lamp ", " OFFICE", "Active", "local ", "20", "10", "2099-01-01", "1"],
            ["P2", "Desk", "home", "active", "local", "30", "12", "2098-01-01", "2"],
        ],
    );
    let store = MemoryStore::new()
        .with_table("products", products)
        .with_table("sales", near_duplicate_sales());
    let first = Orchestrator::new(context()).clean_all(&store, &mut ()).unwrap();

    assert_eq!(first.get("products").unwrap().num_rows(), 2);
    assert_eq!(first.get("sales").unwrap().num_rows(), 1);
    let today = context().today_days();
    assert!(dates(first.get("products").unwrap(), "LaunchDate")
        .iter()
        .all(|d| d.is_some_and(|d| d <= today)));

    let second = Orchestrator::new(context())
        .clean_all(&MemoryStore::from(first.tables.clone()), &mut ())
        .unwrap();
    assert_eq!(second.tables, first.tables);
}

#[test]
fn test_cleaned_invariants() {
    let run = Orchestrator::new(context()).clean_all(&store(), &mut ()).unwrap();
    let today = context().today_days();

    let products = run.get("products").unwrap();
    let prices = floats(products, "UnitPrice");
    let costs = floats(products, "CostPrice");
    for (price, cost) in prices.iter().zip(&costs) {
        if let (Some(p), Some(c)) = (price, cost) {
            assert!(*p >= 0.0 && *c >= 0.0);
            assert!(c <= p);
        }
    }
    assert!(dates(products, "LaunchDate").iter().flatten().all(|d| *d <= today));
    assert!(integers(products, "VendorID").iter().all(Option::is_some));

    let customers = run.get("customers").unwrap();
    assert!(floats(customers, "LoyaltyScore")
        .iter()
        .all(|v| v.is_some_and(|v| (0.0..=10.0).contains(&v))));
    assert!(texts(customers, "Region").iter().all(Option::is_some));
    assert!(texts(customers, "CustomerName").iter().all(Option::is_some));

    let warehouses = run.get("warehouses").unwrap();
    assert!(floats(warehouses, "CapacityUsed")
        .iter()
        .flatten()
        .all(|v| (0.0..=1.0).contains(v)));

    let shipments = run.get("shipments").unwrap();
    let ship = dates(shipments, "ShipDate");
    let delivered = dates(shipments, "ActualDeliveryDate");
    for (s, d) in ship.iter().zip(&delivered) {
        if let (Some(s), Some(d)) = (s, d) {
            assert!(d >= s);
        }
    }
    assert!(integers(shipments, DELAY_DAYS).iter().flatten().all(|d| *d >= 0));
    assert!(texts(shipments, "TrackingID").iter().all(Option::is_some));

    let vendors = run.get("vendors").unwrap();
    let ids = texts(vendors, "VendorID");
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_failure_names_the_table() {
    let store = store().with_table("sales", raw_table(vec![("Quantity", vec![Some("1")])]));
    let result = Orchestrator::new(context()).clean_all(&store, &mut ());

    match result {
        Err(CleanError::InvalidTable { table, source }) => {
            assert_eq!(table, "sales");
            assert!(matches!(*source, CleanError::ColumnNotFound(_)));
        }
        other => panic!("expected InvalidTable, got {other:?}"),
    }
}

#[test]
fn test_failure_in_parallel_mode() {
    let store = store().with_table("sales", raw_table(vec![("Quantity", vec![Some("1")])]));
    let result = Orchestrator::new(context())
        .with_parallel(true)
        .clean_all(&store, &mut ());
    assert!(matches!(result, Err(CleanError::InvalidTable { table, .. }) if table == "sales"));
}

#[test]
fn test_empty_store() {
    let run = Orchestrator::new(context())
        .clean_all(&MemoryStore::new(), &mut ())
        .unwrap();
    assert!(run.is_empty());
    assert_eq!(run.total_rows(), 0);
}
