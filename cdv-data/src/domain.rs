//! Y-axis value domains.

use crate::query::SeriesSet;
use cdv_station::Property;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a record with no value for the selected property is treated.
///
/// Chart points honour it directly: `Zero` draws a gap at `0`. The domain
/// accepts it too, but since every domain is seeded at `(0, 0)` counting a
/// missing value as `0` never moves either end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullPolicy {
    /// Count a missing value as `0`.
    Zero,
    /// Leave missing values out.
    #[default]
    Skip,
}

impl fmt::Display for NullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NullPolicy::Zero => f.write_str("zero"),
            NullPolicy::Skip => f.write_str("skip"),
        }
    }
}

impl FromStr for NullPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(NullPolicy::Zero),
            "skip" => Ok(NullPolicy::Skip),
            other => Err(format!("unknown null policy '{other}' (expected zero or skip)")),
        }
    }
}

/// `(min, max)` range of a measurement, seeded at `(0, 0)` and only widened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    pub fn widen(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// Domain of `property` across a series set under the default [`NullPolicy`].
pub fn compute_domain(series_set: &SeriesSet<'_>, property: Property) -> ValueDomain {
    compute_domain_with(series_set, property, NullPolicy::default())
}

pub fn compute_domain_with(
    series_set: &SeriesSet<'_>,
    property: Property,
    policy: NullPolicy,
) -> ValueDomain {
    let mut domain = ValueDomain::default();
    for record in series_set.records() {
        match (property.value(record), policy) {
            (Some(value), _) => domain.widen(value),
            (None, NullPolicy::Zero) => domain.widen(0.0),
            (None, NullPolicy::Skip) => {}
        }
    }
    domain
}
