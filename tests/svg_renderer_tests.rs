use std::path::Path;

use worldcup_chart::api::{ChartConfig, WorldCupChart};
use worldcup_chart::data::{Attribute, Dataset};
use worldcup_chart::render::SvgRenderer;

fn fixture() -> Dataset {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/world_cups.csv");
    Dataset::from_csv_path(&path).expect("fixture loads")
}

fn chart() -> WorldCupChart<SvgRenderer> {
    WorldCupChart::new(SvgRenderer::default(), ChartConfig::default()).expect("chart init")
}

fn settled_document(dataset: &Dataset) -> String {
    let mut chart = chart();
    chart.bootstrap(dataset).expect("bootstrap");
    chart.advance(1.6).expect("settle");
    chart
        .into_renderer()
        .last_document()
        .expect("document rendered")
        .to_owned()
}

#[test]
fn settled_document_has_the_reference_layout() {
    let doc = settled_document(&fixture());

    assert!(doc.contains(r#"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="500">"#));
    assert!(doc.contains(r#"transform="translate(60,40)""#));
    assert!(doc.contains(r#"class="axis x-axis""#));
    assert!(doc.contains(r#"class="axis y-axis""#));
}

#[test]
fn series_path_and_markers_use_the_reference_styling() {
    let doc = settled_document(&fixture());

    assert!(doc.contains(r#"<path class="line" d="M0,"#));
    assert!(doc.contains(r#"fill="none" stroke="rgb(70,130,180)" stroke-width="2""#));

    assert_eq!(doc.matches("<circle").count(), 21);
    assert!(doc.contains(r#"<circle id="0""#));
    assert!(doc.contains(r#"<circle id="20""#));
    assert!(doc.contains(r#"r="5" fill="rgb(0,0,0)""#));
}

#[test]
fn year_labels_are_rotated_and_end_anchored() {
    let doc = settled_document(&fixture());

    assert!(doc.contains(r#"rotate(-65)"#));
    assert!(doc.contains(r#"text-anchor="end""#));
    assert!(doc.contains(">1930</text>"));
    assert!(doc.contains(">2010</text>"));
}

#[test]
fn mid_fade_documents_carry_a_group_opacity() {
    let dataset = fixture();
    let mut chart = chart();
    chart.bootstrap(&dataset).expect("bootstrap");
    chart.advance(1.6).expect("settle");

    chart
        .render_range(&dataset, Attribute::Goals, 1950, 1970)
        .expect("redraw");
    chart.advance(0.4).expect("half a clear");

    let renderer = chart.into_renderer();
    let doc = renderer.last_document().expect("document rendered");
    assert!(doc.contains(r#" opacity="0.500""#));
    // The fading scene is still the previous full-range one.
    assert_eq!(doc.matches("<circle").count(), 21);
}

#[test]
fn settled_documents_have_no_opacity_attribute() {
    let doc = settled_document(&fixture());
    assert!(!doc.contains(" opacity="));
}

#[test]
fn markers_with_unparseable_values_are_omitted_but_keep_id_order() {
    let csv = "\
YEAR,EDITION,WINNER,TEAMS,MATCHES,GOALS,AVERAGE_GOALS,AVERAGE_ATTENDANCE
1930,Uruguay,Uruguay,13,18,70,3.89,32808
1934,Italy 1934,Italy,16,17,70,4.12,abandoned
1938,France 1938,Italy,15,18,84,4.67,20872
";
    let dataset = Dataset::from_csv_reader(csv.as_bytes()).expect("dataset");
    let config = ChartConfig::default().with_default_attribute(Attribute::AverageAttendance);
    let mut chart = WorldCupChart::new(SvgRenderer::default(), config).expect("chart init");
    chart.bootstrap(&dataset).expect("bootstrap");
    chart.advance(1.6).expect("settle");

    let renderer = chart.into_renderer();
    let doc = renderer.last_document().expect("document rendered");
    assert_eq!(doc.matches("<circle").count(), 2);
    assert!(doc.contains(r#"<circle id="0""#));
    assert!(!doc.contains(r#"<circle id="1""#));
    assert!(doc.contains(r#"<circle id="2""#));

    // The path bridges straight across the unusable middle point, leaving
    // one line command between the two surviving ones.
    let d_start = doc.find(r#"d="M"#).expect("path present") + 3;
    let d_len = doc[d_start..].find('"').expect("terminated attribute");
    let d = &doc[d_start..d_start + d_len];
    assert_eq!(d.matches('L').count(), 1);
}
