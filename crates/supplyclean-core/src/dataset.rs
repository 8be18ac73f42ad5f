//! In-memory tabular dataset and the column-level pipeline steps cleaners
//! chain together. Every step consumes the dataset and returns a new one.

use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, BooleanArray, Date32Array, Float64Array, Int64Array, StringArray,
};
use arrow::compute::{concat_batches, filter_record_batch};
use arrow::datatypes::{Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use tracing::{debug, warn};

use crate::errors::CleanError;
use crate::transforms::{coerce, dedup, numeric, stats, text, TextOp};

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    batch: RecordBatch,
}

impl From<RecordBatch> for Dataset {
    fn from(batch: RecordBatch) -> Self {
        Self { batch }
    }
}

impl Dataset {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Build a dataset from named columns. Every field is nullable.
    pub fn try_from_columns<I, S>(columns: I) -> Result<Self, CleanError>
    where
        I: IntoIterator<Item = (S, ArrayRef)>,
        S: AsRef<str>,
    {
        let batch = RecordBatch::try_from_iter_with_nullable(
            columns.into_iter().map(|(name, array)| (name, array, true)),
        )?;
        Ok(Self { batch })
    }

    /// Concatenate batches sharing `schema` into a single dataset.
    pub fn from_batches(schema: SchemaRef, batches: &[RecordBatch]) -> Result<Self, CleanError> {
        Ok(Self {
            batch: concat_batches(&schema, batches)?,
        })
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows(), self.num_columns())
    }

    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    pub fn column(&self, name: &str) -> Result<&ArrayRef, CleanError> {
        self.batch
            .column_by_name(name)
            .ok_or_else(|| CleanError::ColumnNotFound(name.to_string()))
    }

    pub fn strings(&self, name: &str) -> Result<StringArray, CleanError> {
        coerce::to_utf8(self.column(name)?)
    }

    pub fn floats(&self, name: &str) -> Result<Float64Array, CleanError> {
        coerce::to_float64(self.column(name)?)
    }

    pub fn integers(&self, name: &str) -> Result<Int64Array, CleanError> {
        coerce::to_int64(self.column(name)?)
    }

    pub fn dates(&self, name: &str) -> Result<Date32Array, CleanError> {
        coerce::to_date32(self.column(name)?)
    }

    /// Replace the column `name` in place, or append it when absent.
    pub fn with_column(self, name: &str, array: ArrayRef) -> Result<Self, CleanError> {
        let schema = self.batch.schema();
        let field = Arc::new(Field::new(name, array.data_type().clone(), true));
        let mut fields: Vec<Arc<Field>> = schema.fields().iter().cloned().collect();
        let mut columns: Vec<ArrayRef> = self.batch.columns().to_vec();

        match schema.index_of(name) {
            Ok(idx) => {
                fields[idx] = field;
                columns[idx] = array;
            }
            Err(_) => {
                fields.push(field);
                columns.push(array);
            }
        }

        let schema = Schema::new_with_metadata(fields, schema.metadata().clone());
        Ok(Self {
            batch: RecordBatch::try_new(Arc::new(schema), columns)?,
        })
    }

    /// Keep the rows where `mask` is true.
    pub fn filter(&self, mask: &BooleanArray) -> Result<Self, CleanError> {
        Ok(Self {
            batch: filter_record_batch(&self.batch, mask)?,
        })
    }

    // ------------------------------------------------------------------
    // Pipeline steps
    // ------------------------------------------------------------------

    /// Drop rows repeating an earlier row on `subset`, or on every column
    /// when `subset` is empty. The first occurrence is kept.
    pub fn drop_duplicates(self, subset: &[&str]) -> Result<Self, CleanError> {
        if self.num_columns() == 0 {
            return Ok(self);
        }
        let columns: Vec<ArrayRef> = if subset.is_empty() {
            self.batch.columns().to_vec()
        } else {
            subset
                .iter()
                .map(|name| self.column(name).cloned())
                .collect::<Result<_, _>>()?
        };
        let mask = dedup::first_occurrence_mask(&columns)?;
        let removed = mask.false_count();
        if removed == 0 {
            return Ok(self);
        }
        debug!(removed, key = ?subset, "dropped duplicate rows");
        self.filter(&mask)
    }

    pub fn coerce_float(self, name: &str) -> Result<Self, CleanError> {
        let array = self.floats(name)?;
        self.with_column(name, Arc::new(array))
    }

    pub fn coerce_integer(self, name: &str) -> Result<Self, CleanError> {
        let array = self.integers(name)?;
        self.with_column(name, Arc::new(array))
    }

    pub fn coerce_date(self, name: &str) -> Result<Self, CleanError> {
        let array = self.dates(name)?;
        self.with_column(name, Arc::new(array))
    }

    /// Run a text normalization chain over a string column.
    pub fn normalize_text(self, name: &str, ops: &[TextOp]) -> Result<Self, CleanError> {
        let array = text::normalize(&self.strings(name)?, ops);
        self.with_column(name, Arc::new(array))
    }

    /// Coerce to float and clamp into `[lower, upper]`.
    pub fn clip(self, name: &str, lower: Option<f64>, upper: Option<f64>) -> Result<Self, CleanError> {
        let array = self.floats(name)?;
        let out_of_range = numeric::count_where(&array, |v| {
            lower.is_some_and(|min| v < min) || upper.is_some_and(|max| v > max)
        });
        if out_of_range > 0 {
            debug!(column = name, clipped = out_of_range, "clipped out-of-range values");
        }
        self.with_column(name, Arc::new(numeric::clip(&array, lower, upper)))
    }

    /// Coerce to float and replace nulls with `value`. A `None` value leaves
    /// the column untouched.
    pub fn fill_float(self, name: &str, value: Option<f64>) -> Result<Self, CleanError> {
        let array = self.floats(name)?;
        let Some(value) = value else {
            warn_undefined(name, array.null_count());
            return self.with_column(name, Arc::new(array));
        };
        if array.null_count() > 0 {
            debug!(column = name, filled = array.null_count(), value, "imputed missing values");
        }
        self.with_column(name, Arc::new(numeric::fill_null(&array, value)))
    }

    /// Coerce to integer and replace nulls with `value`. A `None` value
    /// leaves the column untouched.
    pub fn fill_integer(self, name: &str, value: Option<i64>) -> Result<Self, CleanError> {
        let array = self.integers(name)?;
        let Some(value) = value else {
            warn_undefined(name, array.null_count());
            return self.with_column(name, Arc::new(array));
        };
        if array.null_count() > 0 {
            debug!(column = name, filled = array.null_count(), value, "imputed missing values");
        }
        self.with_column(name, Arc::new(numeric::fill_null(&array, value)))
    }

    /// Coerce to float and substitute every negative value with `value`.
    pub fn replace_negative(self, name: &str, value: Option<f64>) -> Result<Self, CleanError> {
        let array = self.floats(name)?;
        let negatives = numeric::count_where(&array, |v| v < 0.0);
        match value {
            Some(value) if negatives > 0 => {
                debug!(column = name, replaced = negatives, value, "replaced negative values");
                self.with_column(name, Arc::new(numeric::replace_where(&array, |v| v < 0.0, value)))
            }
            None if negatives > 0 => {
                warn_undefined(name, negatives);
                self.with_column(name, Arc::new(array))
            }
            _ => self.with_column(name, Arc::new(array)),
        }
    }

    /// Coerce to date and substitute every date after `limit` with `value`.
    pub fn replace_dates_after(self, name: &str, limit: i32, value: Option<i32>) -> Result<Self, CleanError> {
        let array = self.dates(name)?;
        let late = numeric::count_where(&array, |d| d > limit);
        match value {
            Some(value) if late > 0 => {
                debug!(column = name, replaced = late, "replaced dates past the limit");
                self.with_column(name, Arc::new(numeric::replace_where(&array, |d| d > limit, value)))
            }
            None if late > 0 => {
                warn_undefined(name, late);
                self.with_column(name, Arc::new(array))
            }
            _ => self.with_column(name, Arc::new(array)),
        }
    }

    /// Median of a column read as floats.
    pub fn median(&self, name: &str) -> Result<Option<f64>, CleanError> {
        Ok(stats::median(&self.floats(name)?))
    }

    /// Median of a date column, floored to whole days.
    pub fn median_date(&self, name: &str) -> Result<Option<i32>, CleanError> {
        Ok(stats::median(&self.dates(name)?).map(|days| days.floor() as i32))
    }

    /// Most frequent value of a column read as integers.
    pub fn mode_integer(&self, name: &str) -> Result<Option<i64>, CleanError> {
        Ok(stats::mode(&self.integers(name)?))
    }
}

fn warn_undefined(column: &str, affected: usize) {
    if affected > 0 {
        warn!(
            column,
            affected, "statistic undefined for a column without observed values; values left as is"
        );
    }
}
