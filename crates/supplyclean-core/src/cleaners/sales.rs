use crate::cleaners::{CleanContext, Cleaner};
use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::transforms::TextOp;

const SALES_CHANNEL: &[TextOp] = &[
    TextOp::Trim,
    TextOp::Title,
    TextOp::Replace {
        from: "Website",
        to: "Online",
    },
];

pub struct SalesCleaner;

impl Cleaner for SalesCleaner {
    fn name(&self) -> &'static str {
        "SalesCleaner"
    }

    fn clean(&self, dataset: Dataset, _context: &CleanContext) -> Result<Dataset, CleanError> {
        dataset
            .drop_duplicates(&[])?
            .clip("Quantity", Some(0.0), None)?
            .clip("ShippingCost", Some(0.0), None)?
            .fill_float("SalesAmount", Some(0.0))?
            .clip("SalesAmount", Some(0.0), None)?
            .normalize_text("SalesChannel", SALES_CHANNEL)?
            .normalize_text("OrderStatus", &[TextOp::Trim, TextOp::Title])?
            .normalize_text("PaymentMethod", &[TextOp::Trim])?
            .coerce_date("Date")?
            // Normalization can turn near-duplicates into exact ones.
            .drop_duplicates(&[])
    }
}
