use std::sync::Arc;

use crate::cleaners::{CleanContext, Cleaner};
use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::transforms::{numeric, TextOp};

/// Cost ceiling applied when CostPrice exceeds UnitPrice.
const COST_TO_PRICE_RATIO: f64 = 0.8;

const TRIM_TITLE: &[TextOp] = &[TextOp::Trim, TextOp::Title];

const SUPPLIER_CATEGORY: &[TextOp] = &[
    TextOp::Trim,
    TextOp::Title,
    TextOp::Replace {
        from: "Internationl",
        to: "International",
    },
];

pub struct ProductCleaner;

impl Cleaner for ProductCleaner {
    fn name(&self) -> &'static str {
        "ProductCleaner"
    }

    fn clean(&self, dataset: Dataset, context: &CleanContext) -> Result<Dataset, CleanError> {
        let ds = dataset
            .drop_duplicates(&[])?
            .normalize_text("Category", TRIM_TITLE)?
            .normalize_text("ProductStatus", TRIM_TITLE)?
            .normalize_text("SupplierCategory", SUPPLIER_CATEGORY)?
            .normalize_text("ProductName", &[TextOp::Trim])?
            .coerce_float("UnitPrice")?
            .coerce_float("CostPrice")?;

        // Medians are taken before any price is corrected.
        let median_unit_price = ds.median("UnitPrice")?;
        let median_cost_price = ds.median("CostPrice")?;

        let ds = ds
            .replace_negative("UnitPrice", median_unit_price)?
            .replace_negative("CostPrice", median_cost_price)?;

        let capped = numeric::cap_to_fraction(
            &ds.floats("CostPrice")?,
            &ds.floats("UnitPrice")?,
            COST_TO_PRICE_RATIO,
        )?;
        let ds = ds.with_column("CostPrice", Arc::new(capped))?;

        let ds = ds.coerce_date("LaunchDate")?;
        let today = context.today_days();
        // A median that is itself in the future is capped at today.
        let median_launch_date = ds.median_date("LaunchDate")?.map(|d| d.min(today));
        let ds = ds.replace_dates_after("LaunchDate", today, median_launch_date)?;

        let ds = ds.coerce_integer("VendorID")?;
        let vendor_mode = ds.mode_integer("VendorID")?;
        // Rows differing only in whitespace or casing are duplicates once normalized.
        ds.fill_integer("VendorID", vendor_mode)?.drop_duplicates(&[])
    }
}
