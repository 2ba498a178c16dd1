//! Chart-ready output models.
//!
//! All structs derive `Serialize` so a presentation layer (or the CLI) can
//! write them out as JSON or CSV without touching the borrowed query types.

use crate::domain::{NullPolicy, ValueDomain};
use crate::query::Series;
use crate::summary::SeriesSummary;
use cdv_station::Property;
use cdv_utils::dates::{days_in_month, parse_local_date};
use chrono::NaiveDate;
use serde::Serialize;

/// Longest month, used when no selected year has a real calendar month.
const MAX_DAYS_IN_MONTH: u32 = 31;

/// One day on a month-of-year line chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPoint {
    /// Day of month, the chart's x value.
    pub day: u32,
    /// Calendar date parsed from `LOCAL_DATE`; `None` if it is malformed.
    pub date: Option<NaiveDate>,
    /// The measurement; `None` leaves a gap in the line. Under
    /// [`NullPolicy::Zero`] gaps are drawn at `0` instead.
    pub value: Option<f64>,
    /// Quality flag reported alongside the value.
    pub flag: Option<String>,
}

/// One line on the chart: a single year of the selected month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSeries {
    pub year: i32,
    pub month: u32,
    pub highlighted: bool,
    /// Points ordered by day of month.
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn from_series(
        series: &Series<'_>,
        property: Property,
        policy: NullPolicy,
        highlighted: bool,
    ) -> Self {
        let mut points: Vec<ChartPoint> = series
            .iter()
            .map(|record| {
                let value = match (property.value(record), policy) {
                    (None, NullPolicy::Zero) => Some(0.0),
                    (value, _) => value,
                };
                ChartPoint {
                    day: record.day(),
                    date: parse_local_date(record.local_date()).ok(),
                    value,
                    flag: property.flag(record).map(str::to_string),
                }
            })
            .collect();
        points.sort_by_key(|point| point.day);
        ChartSeries {
            year: series.year,
            month: series.month,
            highlighted,
            points,
        }
    }
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub property: Property,
    pub label: String,
    pub unit: String,
    pub month: u32,
    pub month_name: Option<String>,
    pub null_policy: NullPolicy,
    pub domain: ValueDomain,
    /// Inclusive x-axis range, day 1 to the longest selected month.
    pub day_range: (u32, u32),
    pub highlighted_year: Option<i32>,
    pub series: Vec<ChartSeries>,
    pub summaries: Vec<SeriesSummary>,
}

/// A flattened `(year, day, value)` row for tabular export.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartRow {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub date: Option<NaiveDate>,
    pub value: Option<f64>,
    pub flag: Option<String>,
    pub highlighted: bool,
}

/// X-axis range covering every selected `(year, month)`: February of a leap
/// year widens the axis to 29, a July to 31.
pub fn day_range<I>(months: I) -> (u32, u32)
where
    I: IntoIterator<Item = (i32, u32)>,
{
    let last = months
        .into_iter()
        .filter_map(|(year, month)| days_in_month(year, month))
        .max()
        .unwrap_or(MAX_DAYS_IN_MONTH);
    (1, last)
}

impl ChartData {
    pub fn rows(&self) -> Vec<ChartRow> {
        self.series
            .iter()
            .flat_map(|series| {
                series.points.iter().map(move |point| ChartRow {
                    year: series.year,
                    month: series.month,
                    day: point.day,
                    date: point.date,
                    value: point.value,
                    flag: point.flag.clone(),
                    highlighted: series.highlighted,
                })
            })
            .collect()
    }
}
