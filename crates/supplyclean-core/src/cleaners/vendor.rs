use crate::cleaners::{CleanContext, Cleaner};
use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::transforms::TextOp;

const VENDOR_NAME: &[TextOp] = &[
    TextOp::FillNull("Unknown Vendor"),
    TextOp::Trim,
    TextOp::Title,
];

pub struct VendorCleaner;

impl Cleaner for VendorCleaner {
    fn name(&self) -> &'static str {
        "VendorCleaner"
    }

    fn clean(&self, dataset: Dataset, _context: &CleanContext) -> Result<Dataset, CleanError> {
        let ds = dataset
            .drop_duplicates(&["VendorID"])?
            .normalize_text("VendorName", VENDOR_NAME)?;

        let median_reliability = ds.median("ReliabilityScore")?;
        ds.fill_float("ReliabilityScore", median_reliability)?
            .clip("RatingScore", Some(0.0), Some(10.0))?
            .normalize_text("Region", &[TextOp::Trim, TextOp::Title])?
            .clip("LeadTimeDays", Some(0.0), None)
    }
}
