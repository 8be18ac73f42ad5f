use std::sync::Arc;

use tracing::{debug, warn};

use crate::cleaners::{CleanContext, Cleaner};
use crate::dataset::Dataset;
use crate::errors::CleanError;
use crate::transforms::{stats, temporal, TextOp};

/// Derived column holding whole days between shipping and delivery.
pub const DELAY_DAYS: &str = "DelayDays";

const TRIM_TITLE: &[TextOp] = &[TextOp::Trim, TextOp::Title];

pub struct ShipmentCleaner;

impl ShipmentCleaner {
    fn with_delay_days(ds: Dataset) -> Result<Dataset, CleanError> {
        let delay = temporal::days_between(
            &ds.dates("ActualDeliveryDate")?,
            &ds.dates("ShipDate")?,
        );
        ds.with_column(DELAY_DAYS, Arc::new(delay))
    }
}

impl Cleaner for ShipmentCleaner {
    fn name(&self) -> &'static str {
        "ShipmentCleaner"
    }

    fn clean(&self, dataset: Dataset, _context: &CleanContext) -> Result<Dataset, CleanError> {
        let ds = dataset
            .drop_duplicates(&["ShipmentID"])?
            .normalize_text("TrackingID", &[TextOp::FillNull("Unknown")])?
            .coerce_date("ShipDate")?
            .coerce_date("ActualDeliveryDate")?;

        // Delivery can not happen before shipping.
        let ship = ds.dates("ShipDate")?;
        let delivered = temporal::not_before(&ds.dates("ActualDeliveryDate")?, &ship)?;
        let ds = ds.with_column("ActualDeliveryDate", Arc::new(delivered))?;

        // Missing deliveries are estimated from the median observed delay.
        let ds = Self::with_delay_days(ds)?;
        let median_delay = stats::median(&ds.integers(DELAY_DAYS)?);
        let delivered = ds.dates("ActualDeliveryDate")?;
        let missing = delivered
            .iter()
            .zip(ship.iter())
            .filter(|(d, s)| d.is_none() && s.is_some())
            .count();
        let ds = match median_delay {
            Some(delay) => {
                let offset = delay.floor() as i32;
                if missing > 0 {
                    debug!(imputed = missing, offset, "estimated missing delivery dates");
                }
                let filled = temporal::fill_from_offset(&delivered, &ship, offset);
                ds.with_column("ActualDeliveryDate", Arc::new(filled))?
            }
            None => {
                if missing > 0 {
                    warn!(
                        column = "ActualDeliveryDate",
                        affected = missing,
                        "no observed delay, missing delivery dates left as is"
                    );
                }
                ds
            }
        };
        let ds = Self::with_delay_days(ds)?;

        // Median over the column as it stands after the date corrections.
        let ds = ds.coerce_float("DeliveryCost")?;
        let median_cost = ds.median("DeliveryCost")?;
        ds.replace_negative("DeliveryCost", median_cost)?
            .normalize_text("Status", TRIM_TITLE)?
            .normalize_text("ShippingMode", TRIM_TITLE)?
            .normalize_text("CarrierName", &[TextOp::Trim])
    }
}
