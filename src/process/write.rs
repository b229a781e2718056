use anyhow::{Context, Result};
use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;
use std::{fs::File, path::Path};
use tracing::info;

/// Serialize the normalized table to `dest` as UTF-8 CSV: header row, columns
/// in batch order, no index column, dates rendered `YYYY-MM-DD`. An existing
/// file at `dest` is overwritten.
pub fn write_csv(batch: &RecordBatch, dest: &Path) -> Result<()> {
    let file =
        File::create(dest).with_context(|| format!("creating output file {}", dest.display()))?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(batch).context("writing CSV batch")?;

    info!(rows = batch.num_rows(), path = %dest.display(), "wrote normalized CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fetch, process};
    use std::{fs, io::Cursor};

    const SAMPLE: &str = "\
Date,Total Vaccination Doses, Second Dose Taken,Received one dose
23/01/2021,1000,0,500
24/01/2021,1200,0,100
25/01/2021,1500,200,1300
";

    fn normalized() -> Result<RecordBatch> {
        process::pipeline(fetch::parse_csv(Cursor::new(SAMPLE))?)
    }

    #[test]
    fn output_layout_matches_the_contract() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let dest = tmp.path().join("Malta.csv");
        write_csv(&normalized()?, &dest)?;

        let text = fs::read_to_string(&dest)?;
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(
                "date,total_vaccinations,people_fully_vaccinated,people_vaccinated,\
                 location,source_url,vaccine"
            )
        );
        assert_eq!(
            lines.next(),
            Some(
                "2021-01-23,1000,0,1000,Malta,\
                 https://github.com/COVID19-Malta/COVID19-Cases,\
                 \"Moderna, Oxford/AstraZeneca, Pfizer/BioNTech\""
            )
        );
        // The 24/01 row is excluded; only 25/01 remains.
        assert!(lines.next().unwrap().starts_with("2021-01-25,1500,200,1300"));
        assert_eq!(lines.next(), None);
        Ok(())
    }

    #[test]
    fn overwrites_an_existing_file() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let dest = tmp.path().join("Malta.csv");
        fs::write(&dest, "stale contents")?;
        write_csv(&normalized()?, &dest)?;
        assert!(fs::read_to_string(&dest)?.starts_with("date,"));
        Ok(())
    }

    #[test]
    fn rerunning_on_the_same_bytes_is_byte_identical() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let first = tmp.path().join("a.csv");
        let second = tmp.path().join("b.csv");
        write_csv(&normalized()?, &first)?;
        write_csv(&normalized()?, &second)?;
        assert_eq!(fs::read(&first)?, fs::read(&second)?);
        Ok(())
    }
}
