use crate::cleaners::{CleanContext, Cleaner};
use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::transforms::TextOp;

const STOCK_STATUS: &[TextOp] = &[
    TextOp::Trim,
    TextOp::Title,
    TextOp::ReplaceSubstring {
        from: "Stock_Low",
        to: "Low",
    },
];

pub struct InventoryCleaner;

impl Cleaner for InventoryCleaner {
    fn name(&self) -> &'static str {
        "InventoryCleaner"
    }

    fn clean(&self, dataset: Dataset, _context: &CleanContext) -> Result<Dataset, CleanError> {
        let ds = dataset.drop_duplicates(&["ProductID", "WarehouseID"])?;

        let median_reorder = ds.median("ReorderLevel")?;
        ds.fill_float("ReorderLevel", median_reorder)?
            .clip("StockOnHand", Some(0.0), None)?
            .clip("StockAgeDays", Some(0.0), None)?
            .clip("AvgMonthlySales", Some(0.0), None)?
            .coerce_date("LastUpdated")?
            .normalize_text("StockStatus", STOCK_STATUS)
    }
}
