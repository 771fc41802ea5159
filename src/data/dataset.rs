use crate::data::loader;
use crate::data::record::{Attribute, WorldCupRecord};
use crate::error::{ChartError, ChartResult};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Immutable, cheaply cloneable handle to the loaded dataset.
///
/// The handle is passed explicitly to every stage that needs records; no
/// stage stores it. Construction guarantees at least one record, so range
/// queries never observe an empty dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[WorldCupRecord]>,
}

impl Dataset {
    pub fn from_records(records: Vec<WorldCupRecord>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset contains no usable records".to_string(),
            ));
        }
        debug!(records = records.len(), "dataset ready");
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> ChartResult<Self> {
        Self::from_records(loader::read_records(reader)?)
    }

    pub fn from_csv_path(path: &Path) -> ChartResult<Self> {
        Self::from_records(loader::read_records_from_path(path)?)
    }

    #[cfg(feature = "remote-data")]
    pub fn fetch_csv(url: &str) -> ChartResult<Self> {
        Self::from_records(loader::fetch_records(url)?)
    }

    #[must_use]
    pub fn records(&self) -> &[WorldCupRecord] {
        &self.records
    }

    /// Smallest and largest edition year present in the dataset.
    #[must_use]
    pub fn year_bounds(&self) -> (i32, i32) {
        let mut min_year = self.records[0].year;
        let mut max_year = self.records[0].year;
        for record in self.records.iter() {
            min_year = min_year.min(record.year);
            max_year = max_year.max(record.year);
        }
        (min_year, max_year)
    }

    /// Records whose year falls inside the inclusive `[begin, end]` range,
    /// in dataset order. An inverted range selects nothing.
    #[must_use]
    pub fn filter_range(&self, begin_year: i32, end_year: i32) -> Vec<WorldCupRecord> {
        self.records
            .iter()
            .filter(|record| record.year >= begin_year && record.year <= end_year)
            .cloned()
            .collect()
    }
}

/// Largest finite attribute value across the given records.
///
/// NaN entries are skipped the way the rendering pipeline expects; when no
/// finite value exists the result is NaN and the value scale collapses to
/// its degenerate zero domain.
#[must_use]
pub fn max_attribute_value(records: &[WorldCupRecord], attribute: Attribute) -> f64 {
    records
        .iter()
        .map(|record| record.value_of(attribute))
        .fold(f64::NAN, f64::max)
}

#[cfg(test)]
mod tests {
    use super::{Dataset, max_attribute_value};
    use crate::data::record::{Attribute, WorldCupRecord};

    fn record(year: i32, goals: f64) -> WorldCupRecord {
        WorldCupRecord {
            year,
            edition: format!("Edition {year}"),
            winner: "Winner".to_string(),
            teams: 16.0,
            matches: 32.0,
            goals,
            average_goals: 2.5,
            average_attendance: 40000.0,
        }
    }

    #[test]
    fn empty_record_set_is_rejected() {
        assert!(Dataset::from_records(Vec::new()).is_err());
    }

    #[test]
    fn year_bounds_span_the_dataset() {
        let dataset = Dataset::from_records(vec![
            record(1966, 89.0),
            record(1930, 70.0),
            record(2018, 169.0),
        ])
        .expect("dataset builds");
        assert_eq!(dataset.year_bounds(), (1930, 2018));
    }

    #[test]
    fn inverted_range_selects_nothing() {
        let dataset = Dataset::from_records(vec![record(1970, 95.0), record(1974, 97.0)])
            .expect("dataset builds");
        assert!(dataset.filter_range(1980, 1960).is_empty());
    }

    #[test]
    fn range_endpoints_are_inclusive() {
        let dataset = Dataset::from_records(vec![
            record(1966, 89.0),
            record(1970, 95.0),
            record(1974, 97.0),
        ])
        .expect("dataset builds");
        let filtered = dataset.filter_range(1966, 1970);
        let years: Vec<i32> = filtered.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1966, 1970]);
    }

    #[test]
    fn max_skips_nan_values() {
        let records = vec![record(1966, f64::NAN), record(1970, 95.0)];
        assert_eq!(max_attribute_value(&records, Attribute::Goals), 95.0);
    }

    #[test]
    fn max_of_all_nan_is_nan() {
        let records = vec![record(1966, f64::NAN)];
        assert!(max_attribute_value(&records, Attribute::Goals).is_nan());
    }
}
