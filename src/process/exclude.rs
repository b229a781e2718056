use anyhow::{Context, Result};
use arrow::array::{Array, BooleanArray};
use arrow::compute::filter_record_batch;
use arrow::datatypes::Date32Type;
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use tracing::info;

use crate::error::PipelineError;
use crate::process::{col, date32_column, int64_column};

/// Drop every observation dated `excluded`, then assert the cross-field
/// monotonicity invariant `people_fully_vaccinated <= people_vaccinated` on
/// what remains. The assertion is a guard rail: this stage cannot tell a new
/// legitimate anomaly from a stale hand-coded patch, so any violation stops
/// the run before anything is written.
pub fn exclude_data_points(batch: &RecordBatch, excluded: NaiveDate) -> Result<RecordBatch> {
    let dates = date32_column(batch, col::DATE)?;
    let excluded_days = Date32Type::from_naive_date(excluded);
    let keep: BooleanArray = dates.iter().map(|d| Some(d != Some(excluded_days))).collect();
    let filtered = filter_record_batch(batch, &keep).context("dropping excluded dates")?;

    let dropped = batch.num_rows() - filtered.num_rows();
    if dropped > 0 {
        info!(dropped, date = %excluded, "excluded known-bad data points");
    }

    check_monotonicity(&filtered)?;
    Ok(filtered)
}

fn check_monotonicity(batch: &RecordBatch) -> Result<()> {
    let fully = int64_column(batch, col::PEOPLE_FULLY_VACCINATED)?;
    let people = int64_column(batch, col::PEOPLE_VACCINATED)?;
    let dates = date32_column(batch, col::DATE)?;

    for row in 0..batch.num_rows() {
        // A null count cannot prove the invariant either.
        let holds = !fully.is_null(row)
            && !people.is_null(row)
            && fully.value(row) <= people.value(row);
        if !holds {
            return Err(PipelineError::Invariant {
                row,
                date: Date32Type::to_naive_date(dates.value(row)).to_string(),
            }
            .into());
        }
    }
    Ok(())
}
