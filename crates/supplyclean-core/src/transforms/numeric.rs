use arrow::array::{Array, AsArray, Float64Array};
use arrow::compute::kernels::zip::zip;
use arrow::datatypes::Float64Type;
use arrow_array::{ArrowPrimitiveType, PrimitiveArray};
use arrow_ord::cmp::gt;

use crate::errors::CleanError;
use crate::transforms::null_as_false;

/// Clamp every non-null value into `[lower, upper]`.
pub fn clip<T>(
    array: &PrimitiveArray<T>,
    lower: Option<T::Native>,
    upper: Option<T::Native>,
) -> PrimitiveArray<T>
where
    T: ArrowPrimitiveType,
    T::Native: PartialOrd,
{
    array.unary::<_, T>(|v| {
        let v = match lower {
            Some(min) if v < min => min,
            _ => v,
        };
        match upper {
            Some(max) if v > max => max,
            _ => v,
        }
    })
}

/// Count the non-null values matching `predicate`.
pub fn count_where<T, F>(array: &PrimitiveArray<T>, predicate: F) -> usize
where
    T: ArrowPrimitiveType,
    F: Fn(T::Native) -> bool,
{
    array.iter().flatten().filter(|v| predicate(*v)).count()
}

/// Replace nulls with `value`.
pub fn fill_null<T>(array: &PrimitiveArray<T>, value: T::Native) -> PrimitiveArray<T>
where
    T: ArrowPrimitiveType,
{
    if array.null_count() == 0 {
        return array.clone();
    }
    array.iter().map(|v| Some(v.unwrap_or(value))).collect()
}

/// Replace the non-null values matching `predicate` with `value`.
pub fn replace_where<T, F>(array: &PrimitiveArray<T>, predicate: F, value: T::Native) -> PrimitiveArray<T>
where
    T: ArrowPrimitiveType,
    F: Fn(T::Native) -> bool,
{
    array
        .iter()
        .map(|v| v.map(|v| if predicate(v) { value } else { v }))
        .collect()
}

/// Row-wise cap: wherever `value > limit`, use `limit * fraction` instead.
pub fn cap_to_fraction(
    value: &Float64Array,
    limit: &Float64Array,
    fraction: f64,
) -> Result<Float64Array, CleanError> {
    let mask = null_as_false(gt(value, limit)?);
    let scaled: Float64Array = limit.unary(|v| v * fraction);
    let capped = zip(&mask, &scaled, value)?;
    Ok(capped.as_primitive::<Float64Type>().clone())
}
