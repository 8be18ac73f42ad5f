use crate::cleaners::{CleanContext, Cleaner};
use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::transforms::TextOp;

const TRIM_TITLE: &[TextOp] = &[TextOp::Trim, TextOp::Title];

pub struct WarehouseCleaner;

impl Cleaner for WarehouseCleaner {
    fn name(&self) -> &'static str {
        "WarehouseCleaner"
    }

    fn clean(&self, dataset: Dataset, _context: &CleanContext) -> Result<Dataset, CleanError> {
        dataset
            .drop_duplicates(&["WarehouseID"])?
            .normalize_text("Location", TRIM_TITLE)?
            .normalize_text("TemperatureControlled", TRIM_TITLE)?
            .clip("AvgDispatchTime", Some(0.0), None)?
            // CapacityUsed is a fraction of total capacity
            .clip("CapacityUsed", Some(0.0), Some(1.0))
    }
}
