use anyhow::Result;
use arrow::record_batch::RecordBatch;

use crate::error::PipelineError;

/// Fail-fast guard against upstream format drift: the export must have
/// exactly `expected` columns. No column inference, no partial recovery.
pub fn check_columns(batch: RecordBatch, expected: usize) -> Result<RecordBatch> {
    let actual = batch.num_columns();
    if actual != expected {
        return Err(PipelineError::Schema { expected, actual }.into());
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch;
    use std::io::Cursor;

    #[test]
    fn exact_count_passes_through_unchanged() -> Result<()> {
        let batch = fetch::parse_csv(Cursor::new("a,b\n1,2\n"))?;
        let out = check_columns(batch.clone(), 2)?;
        assert_eq!(out, batch);
        Ok(())
    }

    #[test]
    fn surplus_columns_are_fatal() -> Result<()> {
        let batch = fetch::parse_csv(Cursor::new("a,b,c\n1,2,3\n"))?;
        let err = check_columns(batch, 2).unwrap_err();
        assert_eq!(err.to_string(), "input has 3 columns, expected 2");
        Ok(())
    }
}
