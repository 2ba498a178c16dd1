use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Point geometry of the reporting station, `[longitude, latitude]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

/// The `properties` object of a feature: identifying keys plus the daily
/// measurements, each with an optional quality flag.
///
/// Every measurement is optional; a missing key and an explicit `null` both
/// decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Properties {
    pub id: String,
    pub climate_identifier: String,
    pub station_name: String,
    pub province_code: Option<String>,
    pub local_date: String,
    pub local_year: i32,
    pub local_month: u32,
    pub local_day: u32,

    pub max_temperature: Option<f64>,
    pub max_temperature_flag: Option<String>,
    pub min_temperature: Option<f64>,
    pub min_temperature_flag: Option<String>,
    pub mean_temperature: Option<f64>,
    pub mean_temperature_flag: Option<String>,

    pub total_precipitation: Option<f64>,
    pub total_precipitation_flag: Option<String>,
    pub total_rain: Option<f64>,
    pub total_rain_flag: Option<String>,
    pub total_snow: Option<f64>,
    pub total_snow_flag: Option<String>,
    pub snow_on_ground: Option<f64>,
    pub snow_on_ground_flag: Option<String>,

    pub speed_max_gust: Option<f64>,
    pub speed_max_gust_flag: Option<String>,
    /// Direction of the maximum gust in tens of degrees. Usually whole, but
    /// some dumps carry fractional readings.
    pub direction_max_gust: Option<f64>,
    pub direction_max_gust_flag: Option<String>,

    pub max_rel_humidity: Option<f64>,
    pub max_rel_humidity_flag: Option<String>,
    pub min_rel_humidity: Option<f64>,
    pub min_rel_humidity_flag: Option<String>,

    pub heating_degree_days: Option<f64>,
    pub heating_degree_days_flag: Option<String>,
    pub cooling_degree_days: Option<f64>,
    pub cooling_degree_days_flag: Option<String>,
}

/// One daily observation for one station (a `Feature` in the source format).
///
/// Equality and hashing only look at `(id, type)`: two records carrying the
/// same id compare equal even if their measurements differ.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Geometry,
    pub properties: Properties,
}

impl Record {
    pub fn year(&self) -> i32 {
        self.properties.local_year
    }

    pub fn month(&self) -> u32 {
        self.properties.local_month
    }

    pub fn day(&self) -> u32 {
        self.properties.local_day
    }

    pub fn local_date(&self) -> &str {
        &self.properties.local_date
    }

    pub fn station_name(&self) -> &str {
        &self.properties.station_name
    }

    pub fn climate_identifier(&self) -> &str {
        &self.properties.climate_identifier
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.kind == other.kind
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.kind.hash(state);
    }
}
