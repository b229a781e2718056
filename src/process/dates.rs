use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, Date32Builder};
use arrow::datatypes::{DataType, Date32Type, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::error::PipelineError;
use crate::process::{col, string_column};

/// Reparse the textual `date` column (`DD/MM/YYYY`) into a calendar date.
/// Strict: a value that does not match the pattern is fatal, no fallback
/// formats are attempted.
pub fn format_date(batch: &RecordBatch) -> Result<RecordBatch> {
    let raw = string_column(batch, col::DATE)?;

    let mut days = Date32Builder::with_capacity(raw.len());
    for (row, value) in raw.iter().enumerate() {
        let value = value.ok_or_else(|| PipelineError::DateParse {
            row,
            value: String::new(),
        })?;
        let date = parse_dmy(value).ok_or_else(|| PipelineError::DateParse {
            row,
            value: value.to_string(),
        })?;
        days.append_value(Date32Type::from_naive_date(date));
    }

    let idx = batch.schema().index_of(col::DATE)?;
    let mut fields: Vec<FieldRef> = batch.schema().fields().iter().cloned().collect();
    fields[idx] = Arc::new(Field::new(col::DATE, DataType::Date32, false));
    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();
    columns[idx] = Arc::new(days.finish());
    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
        .context("rebuilding batch with parsed dates")
}

/// Strict parse of `"DD/MM/YYYY"`. Surrounding whitespace does not match
/// the pattern and is rejected like any other malformed value.
fn parse_dmy(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}
