use std::fs;
use std::path::PathBuf;

use worldcup_chart::api::{ChartConfig, WorldCupChart};
use worldcup_chart::data::{Attribute, Dataset};
use worldcup_chart::render::SvgRenderer;

const USAGE: &str = "usage: svg_export --output <svg> [--input <csv>] [--attribute <NAME>] [--begin-year <YYYY>] [--end-year <YYYY>]";

#[derive(Debug)]
struct CliArgs {
    input: Option<PathBuf>,
    output: PathBuf,
    attribute: Option<Attribute>,
    begin_year: Option<String>,
    end_year: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = worldcup_chart::telemetry::init_default_tracing();

    let args = parse_args()?;
    let dataset = match &args.input {
        Some(path) => Dataset::from_csv_path(path)
            .map_err(|err| format!("failed to load `{}`: {err}", path.display()))?,
        None => fetch_default_dataset()?,
    };

    let mut config = ChartConfig::default();
    if let Some(attribute) = args.attribute {
        config = config.with_default_attribute(attribute);
    }

    let mut chart = WorldCupChart::new(SvgRenderer::default(), config)
        .map_err(|err| format!("failed to build chart: {err}"))?;
    chart
        .bootstrap(&dataset)
        .map_err(|err| format!("failed to render: {err}"))?;

    if args.begin_year.is_some() || args.end_year.is_some() {
        if let Some(begin_year) = args.begin_year {
            chart.controls_mut().set_begin_year_text(begin_year);
        }
        if let Some(end_year) = args.end_year {
            chart.controls_mut().set_end_year_text(end_year);
        }
        chart
            .apply_filter(&dataset)
            .map_err(|err| format!("failed to apply filter: {err}"))?;
    }

    // Step past the redraw fade so the exported scene is fully visible.
    let timing = chart.config().transition;
    chart
        .advance(timing.clear_seconds + timing.draw_seconds)
        .map_err(|err| format!("failed to finish redraw: {err}"))?;

    let renderer = chart.into_renderer();
    let document = renderer
        .last_document()
        .ok_or_else(|| "no frame was rendered".to_owned())?;
    fs::write(&args.output, document)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

#[cfg(feature = "remote-data")]
fn fetch_default_dataset() -> Result<Dataset, String> {
    Dataset::fetch_csv(worldcup_chart::data::DEFAULT_DATA_URL)
        .map_err(|err| format!("failed to fetch the published dataset: {err}"))
}

#[cfg(not(feature = "remote-data"))]
fn fetch_default_dataset() -> Result<Dataset, String> {
    Err("missing --input (build with the `remote-data` feature to fetch the published dataset)"
        .to_owned())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut attribute = None::<Attribute>;
    let mut begin_year = None::<String>;
    let mut end_year = None::<String>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--attribute" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --attribute".to_owned())?;
                attribute = Some(
                    Attribute::from_name(&value)
                        .ok_or_else(|| format!("unknown attribute `{value}`"))?,
                );
            }
            "--begin-year" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --begin-year".to_owned())?;
                begin_year = Some(value);
            }
            "--end-year" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --end-year".to_owned())?;
                end_year = Some(value);
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let output = output.ok_or_else(|| "missing --output".to_owned())?;
    Ok(CliArgs {
        input,
        output,
        attribute,
        begin_year,
        end_year,
    })
}
