use crate::cleaners::{CleanContext, Cleaner};
use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::transforms::TextOp;

const REGION_SYNONYMS: &[(&str, &str)] = &[("NA", "North America")];

const TRIM_TITLE: &[TextOp] = &[TextOp::Trim, TextOp::Title];

const CUSTOMER_NAME: &[TextOp] = &[TextOp::FillNull("Unknown"), TextOp::Trim];

// Synonyms are folded on the raw value, before casing changes "NA" to "Na".
const REGION: &[TextOp] = &[
    TextOp::Synonyms(REGION_SYNONYMS),
    TextOp::Trim,
    TextOp::FillNull("Unknown"),
    TextOp::Title,
];

pub struct CustomerCleaner;

impl Cleaner for CustomerCleaner {
    fn name(&self) -> &'static str {
        "CustomerCleaner"
    }

    fn clean(&self, dataset: Dataset, _context: &CleanContext) -> Result<Dataset, CleanError> {
        let ds = dataset
            // Float keys keep non-integral IDs such as 1.5 distinct.
            .coerce_float("CustomerID")?
            .drop_duplicates(&["CustomerID"])?
            .normalize_text("CustomerName", CUSTOMER_NAME)?
            .normalize_text("Region", REGION)?
            .normalize_text("Segment", TRIM_TITLE)?
            .coerce_date("JoinDate")?
            .normalize_text("CustomerType", TRIM_TITLE)?
            .normalize_text("PreferredCategory", TRIM_TITLE)?;

        let median_order_value = ds.median("AvgOrderValue")?;
        let ds = ds
            .fill_float("AvgOrderValue", median_order_value)?
            .clip("LoyaltyScore", Some(0.0), Some(10.0))?;

        // Loyalty median is taken after clipping.
        let median_loyalty = ds.median("LoyaltyScore")?;
        ds.fill_float("LoyaltyScore", median_loyalty)
    }
}
