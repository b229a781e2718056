use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, Int64Builder};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;
use tracing::debug;

use crate::process::{col, int64_column};

/// Patch an upstream reporting quirk: before second doses begin, the first
/// dose series is reported inconsistently, so on rows where
/// `people_fully_vaccinated == 0` the dose total stands in for
/// `people_vaccinated`. Row-wise, no cross-row dependency.
pub fn correct_data(batch: &RecordBatch) -> Result<RecordBatch> {
    let fully = int64_column(batch, col::PEOPLE_FULLY_VACCINATED)?;
    let people = int64_column(batch, col::PEOPLE_VACCINATED)?;
    let total = int64_column(batch, col::TOTAL_VACCINATIONS)?;

    let mut corrected = Int64Builder::with_capacity(batch.num_rows());
    let mut patched = 0usize;
    for row in 0..batch.num_rows() {
        if !fully.is_null(row) && fully.value(row) == 0 {
            if total.is_null(row) {
                corrected.append_null();
            } else {
                corrected.append_value(total.value(row));
            }
            patched += 1;
        } else if people.is_null(row) {
            corrected.append_null();
        } else {
            corrected.append_value(people.value(row));
        }
    }
    debug!(patched, "applied first-dose correction");

    let idx = batch.schema().index_of(col::PEOPLE_VACCINATED)?;
    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();
    columns[idx] = Arc::new(corrected.finish());
    RecordBatch::try_new(batch.schema(), columns).context("rebuilding batch after correction")
}
