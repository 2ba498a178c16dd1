//! Selection of per-year series for one month.

use crate::index::GroupingIndex;
use cdv_station::Record;
use std::ops::Deref;

/// The records of one `(year, month)` bucket, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<'a> {
    pub year: i32,
    pub month: u32,
    pub records: &'a [Record],
}

impl<'a> Series<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Record> {
        self.records.iter()
    }
}

/// Series for a range of years, ascending by year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet<'a>(pub Vec<Series<'a>>);

impl<'a> SeriesSet<'a> {
    pub fn years(&self) -> Vec<i32> {
        self.0.iter().map(|series| series.year).collect()
    }

    /// Position of the series for `year`, if that year made it into the set.
    pub fn position_of(&self, year: i32) -> Option<usize> {
        self.0.iter().position(|series| series.year == year)
    }

    /// Records across every series, series by series.
    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.0.iter().flat_map(|series| series.records.iter())
    }
}

impl<'a> Deref for SeriesSet<'a> {
    type Target = [Series<'a>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Pick `month` out of every year in `year_range` (inclusive).
///
/// Years with no bucket for the month are skipped: gaps in station data are
/// expected. A reversed range or an out-of-range month yields an empty set.
pub fn select_series(index: &GroupingIndex, year_range: (i32, i32), month: u32) -> SeriesSet<'_> {
    let (min_year, max_year) = year_range;
    if min_year > max_year {
        return SeriesSet::default();
    }
    let mut series: Vec<Series<'_>> = Vec::new();
    for (year, months) in index.year_range(min_year, max_year) {
        match months.get(&month) {
            Some(records) if !records.is_empty() => series.push(Series {
                year: records[0].year(),
                month,
                records,
            }),
            _ => log::debug!("no records for {year}-{month:02}, skipping"),
        }
    }
    series.sort_by_key(|s| s.year);
    SeriesSet(series)
}
