use cdv_station::Record;
use std::collections::BTreeMap;

/// Records of one year, bucketed by local month.
pub type MonthBuckets = BTreeMap<u32, Vec<Record>>;

/// Two-level lookup of records: year, then month.
///
/// Built once from a loaded collection and read-only afterwards. Every record
/// lands in exactly one `(year, month)` bucket picked from its own
/// `LOCAL_YEAR`/`LOCAL_MONTH`; inside a bucket records keep source order.
/// Buckets are never empty.
#[derive(Debug, Clone, Default)]
pub struct GroupingIndex {
    by_year_month: BTreeMap<i32, MonthBuckets>,
    len: usize,
}

impl GroupingIndex {
    /// Partition records by year, then by month. Values are trusted as given;
    /// a month of 13 gets its own bucket like any other.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut by_year_month: BTreeMap<i32, MonthBuckets> = BTreeMap::new();
        let mut len = 0;
        for record in records {
            by_year_month
                .entry(record.year())
                .or_default()
                .entry(record.month())
                .or_default()
                .push(record);
            len += 1;
        }
        Self { by_year_month, len }
    }

    /// Total number of records across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Years present, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year_month.keys().copied()
    }

    /// Months present for a year, ascending.
    pub fn months(&self, year: i32) -> Vec<u32> {
        self.by_year_month
            .get(&year)
            .map(|months| months.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn bucket(&self, year: i32, month: u32) -> Option<&[Record]> {
        self.by_year_month
            .get(&year)
            .and_then(|months| months.get(&month))
            .map(Vec::as_slice)
    }

    /// All records of a year, month by month.
    pub fn year(&self, year: i32) -> Vec<&Record> {
        self.by_year_month
            .get(&year)
            .map(|months| months.values().flatten().collect())
            .unwrap_or_default()
    }

    /// The month buckets of every year within `min_year..=max_year`.
    pub(crate) fn year_range(
        &self,
        min_year: i32,
        max_year: i32,
    ) -> impl Iterator<Item = (i32, &MonthBuckets)> + '_ {
        self.by_year_month
            .range(min_year..=max_year)
            .map(|(year, months)| (*year, months))
    }

    /// First and last year present, used to seed a year-range filter.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let first = self.by_year_month.keys().next()?;
        let last = self.by_year_month.keys().next_back()?;
        Some((*first, *last))
    }
}
