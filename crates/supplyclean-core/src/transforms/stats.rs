//! Column statistics used for substitution and imputation.
//!
//! Both return `None` when the column holds no observed value.

use std::collections::HashMap;
use std::hash::Hash;

use arrow_array::{ArrowPrimitiveType, PrimitiveArray};
use num_traits::ToPrimitive;

use crate::utils::hasher::Xxh3Builder;

/// Median of the non-null values. Even counts average the two middle values.
pub fn median<T>(array: &PrimitiveArray<T>) -> Option<f64>
where
    T: ArrowPrimitiveType,
    T::Native: ToPrimitive,
{
    let mut values: Vec<f64> = array
        .iter()
        .flatten()
        .filter_map(|v| v.to_f64())
        .filter(|v| !v.is_nan())
        .collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Most frequent non-null value. Ties resolve to the smallest value.
pub fn mode<T>(array: &PrimitiveArray<T>) -> Option<T::Native>
where
    T: ArrowPrimitiveType,
    T::Native: Eq + Hash + Ord,
{
    let mut counts: HashMap<T::Native, usize, Xxh3Builder> = HashMap::with_hasher(Xxh3Builder);
    for value in array.iter().flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|(va, ca), (vb, cb)| ca.cmp(cb).then_with(|| vb.cmp(va)))
        .map(|(value, _)| value)
}
