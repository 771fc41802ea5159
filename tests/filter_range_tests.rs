use std::path::Path;

use worldcup_chart::data::{Attribute, Dataset, max_attribute_value};

fn fixture() -> Dataset {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/world_cups.csv");
    Dataset::from_csv_path(&path).expect("fixture loads")
}

#[test]
fn full_range_keeps_every_record_in_order() {
    let dataset = fixture();
    let filtered = dataset.filter_range(1930, 2018);

    assert_eq!(filtered.len(), dataset.records().len());
    let years: Vec<i32> = filtered.iter().map(|record| record.year).collect();
    let mut sorted = years.clone();
    sorted.sort_unstable();
    assert_eq!(years, sorted);
}

#[test]
fn endpoints_are_inclusive_on_both_sides() {
    let dataset = fixture();
    let filtered = dataset.filter_range(1950, 1970);
    let years: Vec<i32> = filtered.iter().map(|record| record.year).collect();
    assert_eq!(years, vec![1950, 1954, 1958, 1962, 1966, 1970]);
}

#[test]
fn single_year_range_selects_one_edition() {
    let dataset = fixture();
    let filtered = dataset.filter_range(1990, 1990);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].edition, "Italy 1990");
}

#[test]
fn inverted_range_is_empty_not_an_error() {
    let dataset = fixture();
    assert!(dataset.filter_range(2018, 1930).is_empty());
}

#[test]
fn range_outside_the_dataset_is_empty() {
    let dataset = fixture();
    assert!(dataset.filter_range(2020, 2030).is_empty());
    assert!(dataset.filter_range(1800, 1929).is_empty());
}

#[test]
fn interwar_gap_has_no_editions() {
    let dataset = fixture();
    assert!(dataset.filter_range(1939, 1949).is_empty());
}

#[test]
fn max_value_tracks_the_selected_attribute() {
    let dataset = fixture();
    let all = dataset.filter_range(1930, 2018);

    assert_eq!(max_attribute_value(&all, Attribute::Goals), 171.0);
    assert_eq!(max_attribute_value(&all, Attribute::Matches), 64.0);
    assert_eq!(max_attribute_value(&all, Attribute::Teams), 32.0);
    assert_eq!(
        max_attribute_value(&all, Attribute::AverageAttendance),
        68991.0
    );
}

#[test]
fn max_value_follows_the_filtered_subset() {
    let dataset = fixture();
    let early = dataset.filter_range(1930, 1938);
    assert_eq!(max_attribute_value(&early, Attribute::Goals), 84.0);
    assert_eq!(max_attribute_value(&early, Attribute::Teams), 16.0);
}

#[test]
fn max_of_an_empty_subset_is_nan() {
    let dataset = fixture();
    let none = dataset.filter_range(2020, 2030);
    assert!(max_attribute_value(&none, Attribute::Goals).is_nan());
}
