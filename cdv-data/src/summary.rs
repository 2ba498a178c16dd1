use crate::query::{Series, SeriesSet};
use cdv_station::Property;
use serde::Serialize;

/// Statistics of one measurement over one series: extremes, mean, and how
/// many days had no value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub year: i32,
    pub month: u32,
    pub days: usize,
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl SeriesSummary {
    pub fn from_series(series: &Series<'_>, property: Property) -> Self {
        let values: Vec<f64> = series
            .iter()
            .filter_map(|record| property.value(record))
            .filter(|value| value.is_finite())
            .collect();
        let min = values.iter().copied().reduce(f64::min);
        let max = values.iter().copied().reduce(f64::max);
        let mean = if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        };
        SeriesSummary {
            year: series.year,
            month: series.month,
            days: series.len(),
            missing: series.len() - values.len(),
            min,
            max,
            mean,
        }
    }

    /// Returns true if no other summary reached a higher maximum.
    pub fn has_highest_in(&self, all: &[SeriesSummary]) -> bool {
        match self.max {
            Some(max) => all.iter().filter_map(|other| other.max).all(|other| max >= other),
            None => false,
        }
    }

    /// Returns true if no other summary reached a lower minimum.
    pub fn has_lowest_in(&self, all: &[SeriesSummary]) -> bool {
        match self.min {
            Some(min) => all.iter().filter_map(|other| other.min).all(|other| min <= other),
            None => false,
        }
    }
}

/// One summary per series, in series order.
pub fn summarize(series_set: &SeriesSet<'_>, property: Property) -> Vec<SeriesSummary> {
    series_set
        .iter()
        .map(|series| SeriesSummary::from_series(series, property))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::index::GroupingIndex;
    use crate::query::select_series;
    use crate::test_support::day;
    use cdv_station::Property;

    fn sample_index() -> GroupingIndex {
        GroupingIndex::build(vec![
            day(2020, 6, 1, Some(10.0)),
            day(2020, 6, 2, Some(30.0)),
            day(2020, 6, 3, None),
            day(2021, 6, 1, Some(-5.0)),
            day(2021, 6, 2, Some(5.0)),
            day(2022, 6, 1, None),
        ])
    }

    #[test]
    fn test_summarize_computes_extremes_and_mean() {
        let index = sample_index();
        let set = select_series(&index, (2020, 2022), 6);
        let summaries = summarize(&set, Property::MaxTemperature);
        assert_eq!(summaries.len(), 3);

        let s2020 = &summaries[0];
        assert_eq!(s2020.year, 2020);
        assert_eq!(s2020.days, 3);
        assert_eq!(s2020.missing, 1);
        assert_eq!(s2020.min, Some(10.0));
        assert_eq!(s2020.max, Some(30.0));
        assert_eq!(s2020.mean, Some(20.0));

        let s2021 = &summaries[1];
        assert_eq!(s2021.mean, Some(0.0));
    }

    #[test]
    fn test_all_missing_gives_no_statistics() {
        let index = sample_index();
        let set = select_series(&index, (2022, 2022), 6);
        let summaries = summarize(&set, Property::MaxTemperature);
        assert_eq!(summaries[0].days, 1);
        assert_eq!(summaries[0].missing, 1);
        assert_eq!(summaries[0].min, None);
        assert_eq!(summaries[0].max, None);
        assert_eq!(summaries[0].mean, None);
    }

    #[test]
    fn test_highest_and_lowest_across_years() {
        let index = sample_index();
        let set = select_series(&index, (2020, 2022), 6);
        let summaries = summarize(&set, Property::MaxTemperature);
        assert!(summaries[0].has_highest_in(&summaries));
        assert!(!summaries[1].has_highest_in(&summaries));
        assert!(summaries[1].has_lowest_in(&summaries));
        assert!(!summaries[0].has_lowest_in(&summaries));
        assert!(!summaries[2].has_highest_in(&summaries));
        assert!(!summaries[2].has_lowest_in(&summaries));
    }
}
