pub mod error;
pub mod fetch;
pub mod malta;
pub mod paths;
pub mod process;

use anyhow::Result;

/// Fetch the Malta export, normalize it, and write the result to the
/// destination resolved by `paths`. All-or-nothing: any failure propagates
/// before the output file is touched.
pub fn run(paths: &paths::Paths) -> Result<()> {
    let destination = paths.vax_out(malta::LOCATION);
    let raw = fetch::read_csv(malta::SOURCE_FILE)?;
    let normalized = process::pipeline(raw)?;
    process::write::write_csv(&normalized, &destination)
}
