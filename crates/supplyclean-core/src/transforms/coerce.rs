//! Type coercion. Values that cannot be converted become null.

use arrow::array::{
    new_null_array, Array, ArrayRef, AsArray, Date32Array, Float64Array, Int64Array, StringArray,
};
use arrow::compute::{can_cast_types, cast};
use arrow::datatypes::{DataType, Date32Type, Float64Type, Int64Type};

use crate::errors::CleanError;
use crate::utils::date_parser::parse_date_column;

fn is_text(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View
    )
}

/// Cast with Arrow's safe kernel, or produce an all-null array when the
/// conversion is not supported at all.
fn cast_or_null(array: &ArrayRef, to: &DataType) -> Result<ArrayRef, CleanError> {
    if can_cast_types(array.data_type(), to) {
        Ok(cast(array, to)?)
    } else {
        Ok(new_null_array(to, array.len()))
    }
}

fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    value.parse::<i64>().ok().or_else(|| parse_float(value).and_then(float_to_integer))
}

fn float_to_integer(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}

pub fn to_utf8(array: &ArrayRef) -> Result<StringArray, CleanError> {
    match array.data_type() {
        DataType::Utf8 => Ok(array.as_string::<i32>().clone()),
        _ => Ok(cast_or_null(array, &DataType::Utf8)?
            .as_string::<i32>()
            .clone()),
    }
}

/// Coerce to `Float64`. `NaN` is treated as a missing value.
pub fn to_float64(array: &ArrayRef) -> Result<Float64Array, CleanError> {
    let floats: Float64Array = match array.data_type() {
        dt if is_text(dt) => to_utf8(array)?
            .iter()
            .map(|v| v.and_then(parse_float))
            .collect(),
        DataType::Float64 => array.as_primitive::<Float64Type>().clone(),
        _ => cast_or_null(array, &DataType::Float64)?
            .as_primitive::<Float64Type>()
            .clone(),
    };
    if floats.iter().flatten().any(f64::is_nan) {
        return Ok(floats.iter().map(|v| v.filter(|f| !f.is_nan())).collect());
    }
    Ok(floats)
}

/// Coerce to `Int64`. Non-integral numbers become null.
pub fn to_int64(array: &ArrayRef) -> Result<Int64Array, CleanError> {
    let integers: Int64Array = match array.data_type() {
        dt if is_text(dt) => to_utf8(array)?
            .iter()
            .map(|v| v.and_then(parse_integer))
            .collect(),
        DataType::Int64 => array.as_primitive::<Int64Type>().clone(),
        DataType::Float16 | DataType::Float32 | DataType::Float64 => to_float64(array)?
            .iter()
            .map(|v| v.and_then(float_to_integer))
            .collect(),
        _ => cast_or_null(array, &DataType::Int64)?
            .as_primitive::<Int64Type>()
            .clone(),
    };
    Ok(integers)
}

/// Coerce to `Date32` (days since epoch).
pub fn to_date32(array: &ArrayRef) -> Result<Date32Array, CleanError> {
    match array.data_type() {
        dt if is_text(dt) => Ok(parse_date_column(&to_utf8(array)?)),
        DataType::Date32 => Ok(array.as_primitive::<Date32Type>().clone()),
        _ => Ok(cast_or_null(array, &DataType::Date32)?
            .as_primitive::<Date32Type>()
            .clone()),
    }
}
