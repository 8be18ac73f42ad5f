//! Array-level building blocks shared by every cleaner.
pub mod coerce;
pub mod dedup;
pub mod numeric;
pub mod stats;
pub mod temporal;
pub mod text;

use arrow::array::{Array, BooleanArray};
use arrow::compute::kernels::filter::prep_null_mask_filter;

pub use text::TextOp;

/// Turn a comparison result into a selection mask where null means "not selected".
pub(crate) fn null_as_false(mask: BooleanArray) -> BooleanArray {
    if mask.null_count() > 0 {
        prep_null_mask_filter(&mask)
    } else {
        mask
    }
}
