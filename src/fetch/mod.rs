use anyhow::{Context, Result};
use arrow::csv::{reader::Format, ReaderBuilder};
use arrow::record_batch::RecordBatch;
use std::{
    fs::File,
    io::{Cursor, Read, Seek, SeekFrom},
    sync::Arc,
};
use tracing::info;
use url::Url;

const BATCH_SIZE: usize = 8192;

/// Obtain the raw vaccination table from `source`, which is either an HTTP(S)
/// URL or a local file path. Column types are inferred from content, so the
/// count columns arrive as Int64 and the date column as Utf8.
pub fn read_csv(source: &str) -> Result<RecordBatch> {
    match Url::parse(source) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            info!(url = %url, "downloading source CSV");
            let body = reqwest::blocking::Client::new()
                .get(url.as_str())
                .send()
                .and_then(|r| r.error_for_status())
                .with_context(|| format!("fetching {}", url))?
                .bytes()
                .context("reading response body")?;
            parse_csv(Cursor::new(body))
        }
        _ => {
            let file = File::open(source).with_context(|| format!("opening {}", source))?;
            parse_csv(file)
        }
    }
}

/// Parse CSV text with a header row into a single record batch, inferring
/// column types from the data.
pub fn parse_csv<R: Read + Seek>(mut reader: R) -> Result<RecordBatch> {
    let format = Format::default().with_header(true);
    let (schema, _) = format
        .infer_schema(&mut reader, None)
        .context("inferring CSV schema")?;
    reader.seek(SeekFrom::Start(0))?;

    let schema = Arc::new(schema);
    let csv_reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_format(format)
        .with_batch_size(BATCH_SIZE)
        .build(reader)
        .context("creating CSV reader")?;

    let batches = csv_reader
        .collect::<Result<Vec<_>, _>>()
        .context("reading CSV batches")?;
    let batch = arrow::compute::concat_batches(&schema, &batches).context("merging CSV batches")?;

    info!(
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        "parsed source CSV"
    );
    Ok(batch)
}
