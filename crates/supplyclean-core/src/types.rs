use std::collections::BTreeMap;

use crate::dataset::Dataset;

pub type Batches = Vec<arrow::record_batch::RecordBatch>;
pub type Tables = BTreeMap<String, Dataset>;
