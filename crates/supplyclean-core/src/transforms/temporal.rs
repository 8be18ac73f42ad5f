use arrow::array::{AsArray, Date32Array, Int64Array};
use arrow::compute::kernels::zip::zip;
use arrow::datatypes::Date32Type;
use arrow_ord::cmp::lt;

use crate::errors::CleanError;
use crate::transforms::null_as_false;

/// Raise every date earlier than its row's `floor` up to that floor.
pub fn not_before(dates: &Date32Array, floor: &Date32Array) -> Result<Date32Array, CleanError> {
    let mask = null_as_false(lt(dates, floor)?);
    let corrected = zip(&mask, floor, dates)?;
    Ok(corrected.as_primitive::<Date32Type>().clone())
}

/// Whole days from `start` to `end`; null when either side is null.
pub fn days_between(end: &Date32Array, start: &Date32Array) -> Int64Array {
    end.iter()
        .zip(start.iter())
        .map(|(e, s)| match (e, s) {
            (Some(e), Some(s)) => Some(i64::from(e) - i64::from(s)),
            _ => None,
        })
        .collect()
}

/// Fill null dates with `base + offset_days` taken from the same row.
pub fn fill_from_offset(dates: &Date32Array, base: &Date32Array, offset_days: i32) -> Date32Array {
    dates
        .iter()
        .zip(base.iter())
        .map(|(d, b)| d.or_else(|| b.map(|b| b.saturating_add(offset_days))))
        .collect()
}
