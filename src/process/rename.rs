use anyhow::{Context, Result};
use arrow::datatypes::{Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

use crate::error::PipelineError;

/// Rename source headers to canonical field names. The mapping is total:
/// every raw header in `renames` must be present in the batch, so a renamed
/// or vanished upstream column fails here instead of surfacing later as a
/// missing-column error in some downstream stage.
pub fn rename_columns(batch: &RecordBatch, renames: &[(&str, &str)]) -> Result<RecordBatch> {
    let schema = batch.schema();
    for (raw, _) in renames {
        if schema.column_with_name(raw).is_none() {
            return Err(PipelineError::MissingColumn((*raw).to_string()).into());
        }
    }

    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .map(|f| {
            let field = f.as_ref().clone();
            match renames.iter().find(|(raw, _)| f.name() == raw) {
                Some((_, canonical)) => field.with_name(*canonical),
                None => field,
            }
        })
        .collect();

    RecordBatch::try_new(Arc::new(Schema::new(fields)), batch.columns().to_vec())
        .context("rebuilding batch with canonical column names")
}
