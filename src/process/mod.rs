// src/process/mod.rs
use anyhow::{anyhow, Result};
use arrow::array::{Date32Array, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::malta;

pub mod correct;
pub mod dates;
pub mod enrich;
pub mod exclude;
pub mod rename;
pub mod validate;
pub mod write;

/// Canonical column names of the normalized table.
pub mod col {
    pub const DATE: &str = "date";
    pub const TOTAL_VACCINATIONS: &str = "total_vaccinations";
    pub const PEOPLE_FULLY_VACCINATED: &str = "people_fully_vaccinated";
    pub const PEOPLE_VACCINATED: &str = "people_vaccinated";
    pub const LOCATION: &str = "location";
    pub const SOURCE_URL: &str = "source_url";
    pub const VACCINE: &str = "vaccine";
}

/// Run the full normalization over a raw source batch:
/// structural check → rename → correction → date parse → enrichment →
/// exclusion + monotonicity assertion. Each stage returns a new batch;
/// untouched columns are shared, not copied.
#[tracing::instrument(level = "info", skip(batch), fields(rows = batch.num_rows()))]
pub fn pipeline(batch: RecordBatch) -> Result<RecordBatch> {
    let batch = validate::check_columns(batch, malta::EXPECTED_COLUMNS)?;
    let batch = rename::rename_columns(&batch, malta::COLUMN_RENAMES)?;
    let batch = correct::correct_data(&batch)?;
    let batch = dates::format_date(&batch)?;
    let batch = enrich::enrich_columns(&batch, malta::LOCATION, malta::SOURCE_URL, malta::VACCINES)?;
    exclude::exclude_data_points(&batch, malta::excluded_date())
}

pub(crate) fn int64_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Int64Array> {
    batch
        .column_by_name(name)
        .and_then(|c| c.as_any().downcast_ref::<Int64Array>())
        .ok_or_else(|| anyhow!("column {:?} missing or not Int64", name))
}

pub(crate) fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    batch
        .column_by_name(name)
        .and_then(|c| c.as_any().downcast_ref::<StringArray>())
        .ok_or_else(|| anyhow!("column {:?} missing or not Utf8", name))
}

pub(crate) fn date32_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Date32Array> {
    batch
        .column_by_name(name)
        .and_then(|c| c.as_any().downcast_ref::<Date32Array>())
        .ok_or_else(|| anyhow!("column {:?} missing or not Date32", name))
}
