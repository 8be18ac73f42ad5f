use std::collections::HashSet;

use arrow::array::{Array, ArrayRef, BooleanArray};
use arrow::row::{RowConverter, SortField};

use crate::errors::CleanError;
use crate::utils::hasher::Xxh3Builder;

/// Build a keep-mask marking the first occurrence of every distinct row
/// across `columns`. Nulls compare equal to each other.
pub fn first_occurrence_mask(columns: &[ArrayRef]) -> Result<BooleanArray, CleanError> {
    let fields = columns
        .iter()
        .map(|c| SortField::new(c.data_type().clone()))
        .collect();
    let converter = RowConverter::new(fields)?;
    let rows = converter.convert_columns(columns)?;

    let mut seen = HashSet::with_capacity_and_hasher(rows.num_rows(), Xxh3Builder);
    Ok(rows.iter().map(|row| Some(seen.insert(row))).collect())
}
