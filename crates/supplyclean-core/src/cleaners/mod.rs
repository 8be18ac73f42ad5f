//! Per-entity cleaners and the dispatcher that routes a table to its cleaner.

pub mod customer;
pub mod inventory;
pub mod product;
pub mod sales;
pub mod shipment;
pub mod vendor;
pub mod warehouse;

use std::fmt;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::utils::date_parser::date_to_days;

pub use customer::CustomerCleaner;
pub use inventory::InventoryCleaner;
pub use product::ProductCleaner;
pub use sales::SalesCleaner;
pub use shipment::ShipmentCleaner;
pub use vendor::VendorCleaner;
pub use warehouse::WarehouseCleaner;

/// Inputs a cleaner needs beyond the dataset itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanContext {
    /// Reference date for "not in the future" checks.
    pub today: NaiveDate,
}

impl Default for CleanContext {
    fn default() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }
}

impl CleanContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today_days(&self) -> i32 {
        date_to_days(self.today)
    }
}

/// A table-specific cleaning pass.
pub trait Cleaner: Send + Sync {
    /// Returns the name of the cleaner.
    fn name(&self) -> &'static str;
    /// Repair a raw dataset and return the cleaned one.
    fn clean(&self, dataset: Dataset, context: &CleanContext) -> Result<Dataset, CleanError>;
}

/// The tables with a dedicated cleaner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    Products,
    Customers,
    Vendors,
    Warehouses,
    Inventory,
    Sales,
    Shipments,
}

impl TableKind {
    pub const ALL: [TableKind; 7] = [
        TableKind::Products,
        TableKind::Customers,
        TableKind::Vendors,
        TableKind::Warehouses,
        TableKind::Inventory,
        TableKind::Sales,
        TableKind::Shipments,
    ];

    /// Exact match on the store table name.
    pub fn from_table_name(name: &str) -> Option<Self> {
        match name {
            "products" => Some(TableKind::Products),
            "customers" => Some(TableKind::Customers),
            "vendors" => Some(TableKind::Vendors),
            "warehouses" => Some(TableKind::Warehouses),
            "inventory" => Some(TableKind::Inventory),
            "sales" => Some(TableKind::Sales),
            "shipments" => Some(TableKind::Shipments),
            _ => None,
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            TableKind::Products => "products",
            TableKind::Customers => "customers",
            TableKind::Vendors => "vendors",
            TableKind::Warehouses => "warehouses",
            TableKind::Inventory => "inventory",
            TableKind::Sales => "sales",
            TableKind::Shipments => "shipments",
        }
    }

    pub fn cleaner(&self) -> &'static dyn Cleaner {
        match self {
            TableKind::Products => &ProductCleaner,
            TableKind::Customers => &CustomerCleaner,
            TableKind::Vendors => &VendorCleaner,
            TableKind::Warehouses => &WarehouseCleaner,
            TableKind::Inventory => &InventoryCleaner,
            TableKind::Sales => &SalesCleaner,
            TableKind::Shipments => &ShipmentCleaner,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Clean `dataset` with the cleaner registered for `table`. Unknown tables
/// are returned unmodified.
pub fn dispatch(
    table: &str,
    dataset: Dataset,
    context: &CleanContext,
) -> Result<Dataset, CleanError> {
    match TableKind::from_table_name(table) {
        Some(kind) => kind.cleaner().clean(dataset, context),
        None => {
            debug!(table, "no cleaner registered, passing through");
            Ok(dataset)
        }
    }
}
