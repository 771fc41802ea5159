use crate::core::parse_year;
use crate::data::record::{WorldCupRecord, coerce_stat};
use crate::error::ChartResult;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Published location of the FIFA World Cup statistics CSV.
pub const DEFAULT_DATA_URL: &str = "https://gist.githubusercontent.com/emilyengle/653579f8e79ce802add42bcd0ef40abb/raw/bda1c73363eca4821cd35c5a83e67aa23a893509/fifa-cup.csv";

/// Row exactly as it appears in the CSV, before any coercion.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "YEAR")]
    year: String,
    #[serde(rename = "EDITION")]
    edition: String,
    #[serde(rename = "WINNER")]
    winner: String,
    #[serde(rename = "TEAMS")]
    teams: String,
    #[serde(rename = "MATCHES")]
    matches: String,
    #[serde(rename = "GOALS")]
    goals: String,
    #[serde(rename = "AVERAGE_GOALS")]
    average_goals: String,
    #[serde(rename = "AVERAGE_ATTENDANCE")]
    average_attendance: String,
}

impl RawRow {
    /// Coerces the raw row into a record, or `None` when the year cell does
    /// not hold a usable 4-digit year.
    fn into_record(self) -> Option<WorldCupRecord> {
        let year = match parse_year(&self.year) {
            Ok(year) => year,
            Err(_) => {
                warn!(raw_year = %self.year, "skipping row with unparseable year");
                return None;
            }
        };
        Some(WorldCupRecord {
            year,
            edition: self.edition,
            winner: self.winner,
            teams: coerce_stat(&self.teams),
            matches: coerce_stat(&self.matches),
            goals: coerce_stat(&self.goals),
            average_goals: coerce_stat(&self.average_goals),
            average_attendance: coerce_stat(&self.average_attendance),
        })
    }
}

/// Reads and coerces all records from CSV text.
///
/// Structurally broken CSV (ragged rows, missing header) is an error; a row
/// that merely fails year parsing is skipped with a warning so one bad line
/// cannot take the chart down.
pub fn read_records<R: Read>(reader: R) -> ChartResult<Vec<WorldCupRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<RawRow>() {
        if let Some(record) = row?.into_record() {
            records.push(record);
        }
    }

    debug!(rows = records.len(), "dataset rows decoded");
    Ok(records)
}

/// Reads records from a CSV file on disk.
pub fn read_records_from_path(path: &Path) -> ChartResult<Vec<WorldCupRecord>> {
    let file = File::open(path)?;
    read_records(file)
}

/// Fetches the CSV over HTTP and decodes it.
#[cfg(feature = "remote-data")]
pub fn fetch_records(url: &str) -> ChartResult<Vec<WorldCupRecord>> {
    debug!(url, "fetching dataset");
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    read_records(body.as_bytes())
}
