//! Month-of-year series and axis domains, printed the way a chart would
//! consume them.

use crate::{FilterArgs, OutputFormat};
use cdv_data::models::ChartData;
use cdv_data::session::Session;
use cdv_data::view::recompute;
use log::info;
use std::io::Write;

/// Load a station dump, apply the filters, and print the series.
pub fn run_series<W: Write>(
    file: &str,
    filter: &FilterArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut session = Session::new();
    let dataset = session.load_url(file)?;
    let state = filter.to_state(&dataset.index);
    let view = recompute(&dataset.index, &state);
    info!(
        "Selected {} series for month {} between {} and {}",
        view.series.len(),
        state.month,
        state.year_range.0,
        state.year_range.1
    );
    write_series(&view.chart_data(), format, out)
}

/// Load a station dump, apply the filters, and print `min,max`.
pub fn run_domain<W: Write>(file: &str, filter: &FilterArgs, out: &mut W) -> anyhow::Result<()> {
    let mut session = Session::new();
    let dataset = session.load_url(file)?;
    let state = filter.to_state(&dataset.index);
    let view = recompute(&dataset.index, &state);
    writeln!(out, "{},{}", view.domain.min, view.domain.max)?;
    Ok(())
}

pub fn write_series<W: Write>(
    chart: &ChartData,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => write_table(chart, out),
        OutputFormat::Csv => write_csv(chart, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, chart)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_csv<W: Write>(chart: &ChartData, out: &mut W) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in chart.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

/// One line per year: extremes, mean and missing days. `*` marks the
/// highlighted year, `hi`/`lo` the years holding the overall extremes.
fn write_table<W: Write>(chart: &ChartData, out: &mut W) -> anyhow::Result<()> {
    writeln!(
        out,
        "{} ({}) in {}, domain [{}, {}]",
        chart.label,
        chart.unit,
        chart.month_name.as_deref().unwrap_or("an unknown month"),
        chart.domain.min,
        chart.domain.max
    )?;
    writeln!(
        out,
        "{:<6} {:>5} {:>8} {:>8} {:>8} {:>7}  notes",
        "year", "days", "min", "max", "mean", "missing"
    )?;
    for (summary, series) in chart.summaries.iter().zip(&chart.series) {
        let mut notes = Vec::new();
        if series.highlighted {
            notes.push("*");
        }
        if summary.has_highest_in(&chart.summaries) {
            notes.push("hi");
        }
        if summary.has_lowest_in(&chart.summaries) {
            notes.push("lo");
        }
        writeln!(
            out,
            "{:<6} {:>5} {:>8} {:>8} {:>8} {:>7}  {}",
            summary.year,
            summary.days,
            format_value(summary.min),
            format_value(summary.max),
            format_value(summary.mean),
            summary.missing,
            notes.join(" ")
        )?;
    }
    Ok(())
}
