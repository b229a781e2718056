use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

use crate::process::col;

/// Stamp the row-invariant attribution columns (`location`, `source_url`,
/// `vaccine`) onto every row. Pure append; existing columns are untouched.
pub fn enrich_columns(
    batch: &RecordBatch,
    location: &str,
    source_url: &str,
    vaccine: &str,
) -> Result<RecordBatch> {
    let rows = batch.num_rows();
    let mut fields: Vec<FieldRef> = batch.schema().fields().iter().cloned().collect();
    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();

    for (name, value) in [
        (col::LOCATION, location),
        (col::SOURCE_URL, source_url),
        (col::VACCINE, vaccine),
    ] {
        fields.push(Arc::new(Field::new(name, DataType::Utf8, false)));
        let constant = StringArray::from_iter_values(std::iter::repeat(value).take(rows));
        columns.push(Arc::new(constant));
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
        .context("appending attribution columns")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch;
    use crate::process::string_column;
    use std::io::Cursor;

    #[test]
    fn appends_three_constant_columns() -> Result<()> {
        let batch = fetch::parse_csv(Cursor::new("date,n\nx,1\ny,2\n"))?;
        let out = enrich_columns(&batch, "Malta", "https://example.invalid", "Pfizer/BioNTech")?;

        assert_eq!(out.num_columns(), batch.num_columns() + 3);
        // Prior columns keep their position and contents.
        assert_eq!(out.columns()[..2], batch.columns()[..]);

        let location = string_column(&out, col::LOCATION)?;
        for row in 0..out.num_rows() {
            assert_eq!(location.value(row), "Malta");
        }
        Ok(())
    }

    #[test]
    fn enriching_an_empty_table_is_fine() -> Result<()> {
        let batch = fetch::parse_csv(Cursor::new("date,n\n"))?;
        let out = enrich_columns(&batch, "Malta", "u", "v")?;
        assert_eq!(out.num_rows(), 0);
        assert_eq!(out.num_columns(), 5);
        Ok(())
    }
}
