//! Malta-specific policy: source location, attribution constants, and the
//! hand-maintained schema knowledge for the COVID19-Malta CSV export.
//!
//! Everything country-specific lives here so the pipeline stages themselves
//! stay free of inline literals.

use chrono::NaiveDate;

/// The raw CSV export published by the COVID19-Malta project.
pub const SOURCE_FILE: &str =
    "https://github.com/COVID19-Malta/COVID19-Cases/raw/master/COVID-19%20Malta%20-%20Vaccination%20Data.csv";

/// Attribution URL stamped onto every output row.
pub const SOURCE_URL: &str = "https://github.com/COVID19-Malta/COVID19-Cases";

pub const LOCATION: &str = "Malta";

pub const VACCINES: &str = "Moderna, Oxford/AstraZeneca, Pfizer/BioNTech";

/// The export is exactly these four columns; anything else means the upstream
/// format drifted and the run must abort.
pub const EXPECTED_COLUMNS: usize = 4;

/// Raw header → canonical field name. The leading space in
/// ` Second Dose Taken` is present in the upstream file and must match
/// byte-for-byte.
pub const COLUMN_RENAMES: &[(&str, &str)] = &[
    ("Date", "date"),
    ("Total Vaccination Doses", "total_vaccinations"),
    (" Second Dose Taken", "people_fully_vaccinated"),
    ("Received one dose", "people_vaccinated"),
];

/// 2021-01-24 carries an upstream error that produces a negative change in
/// the people_vaccinated series; the row is dropped outright.
pub fn excluded_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 24).unwrap()
}
