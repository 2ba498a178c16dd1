//! The single entry point a presentation layer calls after every filter
//! change: [`recompute`] takes the current [`ViewState`] and rebuilds the
//! series, domain and summaries from scratch.

use crate::domain::{compute_domain_with, NullPolicy, ValueDomain};
use crate::index::GroupingIndex;
use crate::models::{day_range, ChartData, ChartSeries};
use crate::query::{select_series, SeriesSet};
use crate::summary::{summarize, SeriesSummary};
use cdv_station::Property;
use cdv_utils::dates::month_name;
use serde::{Deserialize, Serialize};

/// Month shown before the user picks one.
pub const DEFAULT_MONTH: u32 = 6;

/// The active filters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Inclusive `(first, last)` year.
    pub year_range: (i32, i32),
    pub month: u32,
    pub property: Property,
    pub highlighted_year: Option<i32>,
    pub null_policy: NullPolicy,
}

impl ViewState {
    pub fn new(year_range: (i32, i32), month: u32, property: Property) -> Self {
        Self {
            year_range,
            month,
            property,
            highlighted_year: None,
            null_policy: NullPolicy::default(),
        }
    }

    /// Defaults for a freshly loaded dataset: every year, June, max temperature.
    pub fn for_index(index: &GroupingIndex) -> Self {
        let year_range = index.year_bounds().unwrap_or((0, 0));
        Self::new(year_range, DEFAULT_MONTH, Property::default())
    }

    pub fn with_year_range(mut self, first: i32, last: i32) -> Self {
        self.year_range = (first, last);
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.property = property;
        self
    }

    pub fn with_highlighted_year(mut self, year: Option<i32>) -> Self {
        self.highlighted_year = year;
        self
    }

    pub fn with_null_policy(mut self, policy: NullPolicy) -> Self {
        self.null_policy = policy;
        self
    }

    /// Swap the ends of a reversed year range, e.g. after two sliders crossed.
    pub fn normalize_year_range(&mut self) {
        let (first, last) = self.year_range;
        if first > last {
            self.year_range = (last, first);
        }
    }
}

/// Result of one recompute, borrowing its records from the index.
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub state: ViewState,
    pub series: SeriesSet<'a>,
    pub domain: ValueDomain,
    /// Position of the highlighted year within `series`, if it is present.
    pub highlighted: Option<usize>,
    pub summaries: Vec<SeriesSummary>,
}

impl View<'_> {
    /// Owned, serializable form of this view.
    pub fn chart_data(&self) -> ChartData {
        let property = self.state.property;
        let policy = self.state.null_policy;
        let series = self
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| ChartSeries::from_series(s, property, policy, Some(i) == self.highlighted))
            .collect();
        ChartData {
            property,
            label: property.label().to_string(),
            unit: property.unit().to_string(),
            month: self.state.month,
            month_name: month_name(self.state.month).map(str::to_string),
            null_policy: self.state.null_policy,
            domain: self.domain,
            day_range: day_range(self.series.iter().map(|s| (s.year, s.month))),
            highlighted_year: self.highlighted.map(|i| self.series[i].year),
            series,
            summaries: self.summaries.clone(),
        }
    }
}

/// Rebuild everything the chart shows for `state`. Pure: the same index and
/// state always give the same view.
pub fn recompute<'a>(index: &'a GroupingIndex, state: &ViewState) -> View<'a> {
    let series = select_series(index, state.year_range, state.month);
    let domain = compute_domain_with(&series, state.property, state.null_policy);
    let highlighted = state
        .highlighted_year
        .and_then(|year| series.position_of(year));
    let summaries = summarize(&series, state.property);
    View {
        state: *state,
        series,
        domain,
        highlighted,
        summaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::day;

    fn sample_index() -> GroupingIndex {
        let mut windy = day(2021, 6, 3, None);
        windy.properties.direction_max_gust = Some(27.0);
        GroupingIndex::build(vec![
            day(2019, 7, 1, Some(28.0)),
            day(2020, 6, 2, Some(30.0)),
            day(2020, 6, 1, Some(10.0)),
            day(2021, 6, 1, Some(-5.0)),
            windy,
        ])
    }

    #[test]
    fn test_for_index_seeds_defaults() {
        let index = sample_index();
        let state = ViewState::for_index(&index);
        assert_eq!(state.year_range, (2019, 2021));
        assert_eq!(state.month, DEFAULT_MONTH);
        assert_eq!(state.property, Property::MaxTemperature);
        assert_eq!(state.highlighted_year, None);
        assert_eq!(state.null_policy, NullPolicy::Skip);
    }

    #[test]
    fn test_recompute_selects_and_scales() {
        let index = sample_index();
        let state = ViewState::for_index(&index).with_highlighted_year(Some(2021));
        let view = recompute(&index, &state);
        assert_eq!(view.series.years(), vec![2020, 2021]);
        assert_eq!(view.domain.as_tuple(), (-5.0, 30.0));
        assert_eq!(view.highlighted, Some(1));
        assert_eq!(view.summaries.len(), 2);
    }

    #[test]
    fn test_highlight_outside_selection_is_none() {
        let index = sample_index();
        let state = ViewState::for_index(&index).with_highlighted_year(Some(2019));
        let view = recompute(&index, &state);
        assert_eq!(view.highlighted, None);
        assert_eq!(view.chart_data().highlighted_year, None);
    }

    #[test]
    fn test_gust_direction_charts() {
        let index = sample_index();
        let state = ViewState::for_index(&index)
            .with_property(Property::DirectionMaxGust)
            .with_year_range(2021, 2021);
        let view = recompute(&index, &state);
        assert_eq!(view.domain.as_tuple(), (0.0, 27.0));
    }

    #[test]
    fn test_reversed_range_normalizes() {
        let index = sample_index();
        let mut state = ViewState::for_index(&index).with_year_range(2021, 2020);
        assert!(recompute(&index, &state).series.is_empty());
        state.normalize_year_range();
        assert_eq!(state.year_range, (2020, 2021));
        assert_eq!(recompute(&index, &state).series.len(), 2);
    }

    #[test]
    fn test_recompute_is_pure() {
        let index = sample_index();
        let state = ViewState::for_index(&index).with_null_policy(NullPolicy::Zero);
        let first = recompute(&index, &state);
        let second = recompute(&index, &state);
        assert_eq!(first.series, second.series);
        assert_eq!(first.domain, second.domain);
        assert_eq!(first.chart_data(), second.chart_data());
    }

    #[test]
    fn test_chart_data_orders_points_and_flags_highlight() {
        let index = sample_index();
        let state = ViewState::for_index(&index).with_highlighted_year(Some(2020));
        let chart = recompute(&index, &state).chart_data();
        assert_eq!(chart.label, "Max. Temperature");
        assert_eq!(chart.unit, "°C");
        assert_eq!(chart.month_name.as_deref(), Some("June"));
        assert_eq!(chart.highlighted_year, Some(2020));
        assert_eq!(chart.day_range, (1, 30));

        let days: Vec<u32> = chart.series[0].points.iter().map(|p| p.day).collect();
        assert_eq!(days, vec![1, 2]);
        assert!(chart.series[0].highlighted);
        assert!(!chart.series[1].highlighted);

        let rows = chart.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].year, 2020);
        assert_eq!(rows[0].value, Some(10.0));
        assert_eq!(rows[3].value, None);
    }

    #[test]
    fn test_zero_policy_draws_gaps_but_keeps_domain() {
        let index = sample_index();
        let skip = recompute(&index, &ViewState::for_index(&index));
        let zero = recompute(&index, &ViewState::for_index(&index).with_null_policy(NullPolicy::Zero));

        // The domain already holds 0, so only the drawn points differ.
        assert_eq!(skip.domain, zero.domain);
        assert_eq!(skip.chart_data().series[1].points[1].value, None);
        assert_eq!(zero.chart_data().series[1].points[1].value, Some(0.0));
        assert_eq!(zero.summaries, skip.summaries);
    }

    #[test]
    fn test_chart_data_serializes_to_json() {
        let index = sample_index();
        let chart = recompute(&index, &ViewState::for_index(&index)).chart_data();
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["property"], "MAX_TEMPERATURE");
        assert_eq!(json["null_policy"], "skip");
        assert_eq!(json["domain"]["min"], -5.0);
        assert_eq!(json["series"].as_array().unwrap().len(), 2);
    }
}
