#![allow(dead_code)]

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use chrono::NaiveDate;
use supplyclean_core::utils::date_parser::date_to_days;
use supplyclean_core::{CleanContext, Dataset};

/// Raw table as it comes out of a CSV export: every column is text.
pub fn raw_table(columns: Vec<(&str, Vec<Option<&str>>)>) -> Dataset {
    Dataset::try_from_columns(
        columns
            .into_iter()
            .map(|(name, values)| (name, Arc::new(StringArray::from(values)) as ArrayRef)),
    )
    .unwrap()
}

pub const PRODUCT_COLUMNS: [&str; 9] = [
    "ProductID",
    "ProductName",
    "Category",
    "ProductStatus",
    "SupplierCategory",
    "UnitPrice",
    "CostPrice",
    "LaunchDate",
    "VendorID",
];

pub const SALES_COLUMNS: [&str; 8] = [
    "SaleID",
    "Quantity",
    "ShippingCost",
    "SalesAmount",
    "SalesChannel",
    "OrderStatus",
    "PaymentMethod",
    "Date",
];

/// Raw table built row by row; every cell present.
pub fn rows_table<const N: usize>(columns: [&str; N], rows: &[[&str; N]]) -> Dataset {
    raw_table(
        columns
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, rows.iter().map(|row| Some(row[i])).collect()))
            .collect(),
    )
}

/// Products whose second row only differs from the first by whitespace and casing.
pub fn near_duplicate_products() -> Dataset {
    rows_table(
        PRODUCT_COLUMNS,
        &[
            ["P1", "Lamp", "office", "active", "local", "20", "10", "2023-01-01", "1"],
            ["P1", "Lamp ", " OFFICE", "Active", "local ", "20", "10", "2023-01-01", "1"],
            ["P2", "Desk", "home", "active", "local", "30", "12", "2023-02-01", "2"],
        ],
    )
}

/// Sales whose second row only differs from the first by whitespace and casing.
pub fn near_duplicate_sales() -> Dataset {
    rows_table(
        SALES_COLUMNS,
        &[
            ["S1", "2", "5", "10", "store", "shipped", "card", "2024-01-15"],
            ["S1", "2", "5", "10", " Store ", "SHIPPED", "card ", "2024-01-15"],
        ],
    )
}

pub fn texts(ds: &Dataset, column: &str) -> Vec<Option<String>> {
    ds.strings(column)
        .unwrap()
        .iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

pub fn floats(ds: &Dataset, column: &str) -> Vec<Option<f64>> {
    ds.floats(column).unwrap().iter().collect()
}

pub fn integers(ds: &Dataset, column: &str) -> Vec<Option<i64>> {
    ds.integers(column).unwrap().iter().collect()
}

pub fn dates(ds: &Dataset, column: &str) -> Vec<Option<i32>> {
    ds.dates(column).unwrap().iter().collect()
}

pub fn some(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some(v.to_string())).collect()
}

pub fn day(year: i32, month: u32, d: u32) -> i32 {
    date_to_days(NaiveDate::from_ymd_opt(year, month, d).unwrap())
}

/// Fixed reference date so "future" checks are deterministic.
pub fn context() -> CleanContext {
    CleanContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

pub fn products() -> Dataset {
    raw_table(vec![
        ("ProductID", vec![Some("P1"), Some("P2"), Some("P3"), Some("P4"), Some("P4")]),
        (
            "ProductName",
            vec![Some("  Desk Lamp "), Some("Chair"), None, Some("Shelf"), Some("Shelf")],
        ),
        (
            "Category",
            vec![Some(" home decor"), Some("FURNITURE "), None, Some("office"), Some("office")],
        ),
        (
            "ProductStatus",
            vec![Some("active"), Some(" Discontinued"), Some("active"), None, None],
        ),
        (
            "SupplierCategory",
            vec![Some(" internationl "), Some("local"), Some("Internationl"), None, None],
        ),
        ("UnitPrice", vec![Some("-5"), Some("20"), Some("20"), Some("30"), Some("30")]),
        ("CostPrice", vec![Some("50"), Some("10"), Some("abc"), Some("15"), Some("15")]),
        (
            "LaunchDate",
            vec![
                Some("2023-01-01"),
                Some("2099-01-01"),
                Some("2023-03-01"),
                None,
                None,
            ],
        ),
        ("VendorID", vec![Some("3"), Some("3"), Some("4"), None, None]),
    ])
}

pub fn customers() -> Dataset {
    raw_table(vec![
        ("CustomerID", vec![Some("1"), Some("2"), Some("3"), Some("4"), Some("1")]),
        (
            "CustomerName",
            vec![Some("  Ada Lovelace "), None, Some("Bob"), Some("Cy"), Some("Ada again")],
        ),
        ("Region", vec![Some("NA "), Some("na"), None, Some(" europe"), Some("asia")]),
        ("Segment", vec![Some("retail "), Some("WHOLESALE"), None, Some("retail"), None]),
        (
            "JoinDate",
            vec![Some("2021-05-04"), Some("bad date"), None, Some("2022/01/31"), None],
        ),
        ("CustomerType", vec![Some("new"), Some(" returning"), None, Some("new"), None]),
        ("PreferredCategory", vec![Some("toys"), Some("books"), None, None, None]),
        ("AvgOrderValue", vec![Some("100"), None, Some("300"), Some("200"), Some("1")]),
        ("LoyaltyScore", vec![Some("12"), Some("-1"), None, Some("5"), Some("9")]),
    ])
}

pub fn vendors() -> Dataset {
    raw_table(vec![
        ("VendorID", vec![Some("7"), Some("7"), Some("8")]),
        ("VendorName", vec![Some(" acme supplies"), Some("Other Name"), None]),
        ("ReliabilityScore", vec![Some("0.9"), Some("0.1"), None]),
        ("RatingScore", vec![Some("11"), Some("4"), Some("-2")]),
        ("Region", vec![Some(" north america "), Some("x"), Some("EUROPE")]),
        ("LeadTimeDays", vec![Some("-3"), Some("5"), Some("12")]),
    ])
}

pub fn warehouses() -> Dataset {
    raw_table(vec![
        ("WarehouseID", vec![Some("W1"), Some("W2"), Some("W1")]),
        ("Location", vec![Some(" new york"), Some("LONDON"), Some("paris")]),
        ("TemperatureControlled", vec![Some("yes"), Some(" no "), Some("yes")]),
        ("AvgDispatchTime", vec![Some("-1.5"), Some("2"), Some("3")]),
        ("CapacityUsed", vec![Some("1.3"), Some("-0.2"), Some("0.5")]),
    ])
}

pub fn inventory() -> Dataset {
    raw_table(vec![
        ("ProductID", vec![Some("P1"), Some("P1"), Some("P2"), Some("P1")]),
        ("WarehouseID", vec![Some("W1"), Some("W2"), Some("W1"), Some("W1")]),
        ("StockOnHand", vec![Some("-4"), Some("10"), Some("3"), Some("99")]),
        ("ReorderLevel", vec![None, Some("10"), Some("20"), Some("5")]),
        ("StockAgeDays", vec![Some("5"), Some("-9"), None, Some("1")]),
        ("AvgMonthlySales", vec![Some("-0.5"), Some("4"), Some("2"), Some("1")]),
        (
            "LastUpdated",
            vec![Some("2024-02-01"), Some("02/03/2024"), None, Some("2024-02-01")],
        ),
        (
            "StockStatus",
            vec![Some("stock_low "), Some("in stock"), None, Some("stock_low")],
        ),
    ])
}

pub fn sales() -> Dataset {
    raw_table(vec![
        ("SaleID", vec![Some("S1"), Some("S2"), Some("S2"), Some("S3")]),
        ("Quantity", vec![Some("-2"), Some("4"), Some("4"), Some("1")]),
        ("ShippingCost", vec![Some("5"), Some("-1"), Some("-1"), None]),
        ("SalesAmount", vec![None, Some("-40"), Some("-40"), Some("12.5")]),
        ("SalesChannel", vec![Some("website "), Some("store"), Some("store"), None]),
        ("OrderStatus", vec![Some("shipped"), Some(" PENDING"), Some(" PENDING"), None]),
        ("PaymentMethod", vec![Some(" card "), Some("cash"), Some("cash"), None]),
        (
            "Date",
            vec![Some("2024-01-15"), Some("2024-01-16"), Some("2024-01-16"), Some("nope")],
        ),
    ])
}

pub fn shipments() -> Dataset {
    raw_table(vec![
        ("ShipmentID", vec![Some("SH1"), Some("SH2"), Some("SH3"), Some("SH3")]),
        ("TrackingID", vec![None, Some("TRK2"), Some("TRK3"), Some("TRK3")]),
        (
            "ShipDate",
            vec![
                Some("2024-01-10"),
                Some("2024-01-01"),
                Some("2024-01-02"),
                Some("2024-01-02"),
            ],
        ),
        (
            "ActualDeliveryDate",
            vec![Some("2024-01-05"), Some("2024-01-04"), None, None],
        ),
        ("DeliveryCost", vec![Some("-3"), Some("10"), Some("20"), Some("20")]),
        ("Status", vec![Some("delivered "), Some("in transit"), None, None]),
        ("ShippingMode", vec![Some("air"), Some(" SEA"), Some("road"), Some("road")]),
        ("CarrierName", vec![Some(" DHL "), Some("UPS"), None, None]),
    ])
}

/// Every known table plus one the cleaners do not know about.
pub fn all_tables() -> Vec<(&'static str, Dataset)> {
    vec![
        ("products", products()),
        ("customers", customers()),
        ("vendors", vendors()),
        ("warehouses", warehouses()),
        ("inventory", inventory()),
        ("sales", sales()),
        ("shipments", shipments()),
        (
            "audit_log",
            raw_table(vec![("note", vec![Some("  keep  "), Some("  keep  ")])]),
        ),
    ]
}
