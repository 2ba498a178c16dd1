use crate::error::StationError;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A chartable daily measurement.
///
/// The set is closed: picking a property resolves to one of these variants
/// once, and every record is then read through [`Property::value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Property {
    #[default]
    MaxTemperature,
    MinTemperature,
    MeanTemperature,
    TotalPrecipitation,
    TotalRain,
    TotalSnow,
    SnowOnGround,
    SpeedMaxGust,
    DirectionMaxGust,
    MaxRelHumidity,
    MinRelHumidity,
    HeatingDegreeDays,
    CoolingDegreeDays,
}

impl Property {
    /// Every property, in the order a selection control lists them.
    pub const ALL: [Property; 13] = [
        Property::MaxTemperature,
        Property::MinTemperature,
        Property::MeanTemperature,
        Property::TotalPrecipitation,
        Property::TotalRain,
        Property::TotalSnow,
        Property::SnowOnGround,
        Property::SpeedMaxGust,
        Property::DirectionMaxGust,
        Property::MaxRelHumidity,
        Property::MinRelHumidity,
        Property::HeatingDegreeDays,
        Property::CoolingDegreeDays,
    ];

    /// Key of the measurement in the station dump.
    pub fn key(&self) -> &'static str {
        match self {
            Property::MaxTemperature => "MAX_TEMPERATURE",
            Property::MinTemperature => "MIN_TEMPERATURE",
            Property::MeanTemperature => "MEAN_TEMPERATURE",
            Property::TotalPrecipitation => "TOTAL_PRECIPITATION",
            Property::TotalRain => "TOTAL_RAIN",
            Property::TotalSnow => "TOTAL_SNOW",
            Property::SnowOnGround => "SNOW_ON_GROUND",
            Property::SpeedMaxGust => "SPEED_MAX_GUST",
            Property::DirectionMaxGust => "DIRECTION_MAX_GUST",
            Property::MaxRelHumidity => "MAX_REL_HUMIDITY",
            Property::MinRelHumidity => "MIN_REL_HUMIDITY",
            Property::HeatingDegreeDays => "HEATING_DEGREE_DAYS",
            Property::CoolingDegreeDays => "COOLING_DEGREE_DAYS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Property::MaxTemperature => "Max. Temperature",
            Property::MinTemperature => "Min. Temperature",
            Property::MeanTemperature => "Mean Temperature",
            Property::TotalPrecipitation => "Total Precipitation",
            Property::TotalRain => "Total Rain",
            Property::TotalSnow => "Total Snow",
            Property::SnowOnGround => "Snow on Ground",
            Property::SpeedMaxGust => "Speed of Max. Gust",
            Property::DirectionMaxGust => "Direction of Max. Gust",
            Property::MaxRelHumidity => "Max. Relative Humidity",
            Property::MinRelHumidity => "Min. Relative Humidity",
            Property::HeatingDegreeDays => "Heating Degree Days",
            Property::CoolingDegreeDays => "Cooling Degree Days",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Property::MaxTemperature | Property::MinTemperature | Property::MeanTemperature => {
                "°C"
            }
            Property::TotalPrecipitation | Property::TotalRain => "mm",
            Property::TotalSnow | Property::SnowOnGround => "cm",
            Property::SpeedMaxGust => "km/h",
            Property::DirectionMaxGust => "10s of degrees",
            Property::MaxRelHumidity | Property::MinRelHumidity => "%",
            Property::HeatingDegreeDays | Property::CoolingDegreeDays => "degree-days",
        }
    }

    /// Reads the measurement from a record.
    pub fn value(&self, record: &Record) -> Option<f64> {
        let p = &record.properties;
        match self {
            Property::MaxTemperature => p.max_temperature,
            Property::MinTemperature => p.min_temperature,
            Property::MeanTemperature => p.mean_temperature,
            Property::TotalPrecipitation => p.total_precipitation,
            Property::TotalRain => p.total_rain,
            Property::TotalSnow => p.total_snow,
            Property::SnowOnGround => p.snow_on_ground,
            Property::SpeedMaxGust => p.speed_max_gust,
            Property::DirectionMaxGust => p.direction_max_gust,
            Property::MaxRelHumidity => p.max_rel_humidity,
            Property::MinRelHumidity => p.min_rel_humidity,
            Property::HeatingDegreeDays => p.heating_degree_days,
            Property::CoolingDegreeDays => p.cooling_degree_days,
        }
    }

    pub fn flag<'a>(&self, record: &'a Record) -> Option<&'a str> {
        let p = &record.properties;
        let flag = match self {
            Property::MaxTemperature => &p.max_temperature_flag,
            Property::MinTemperature => &p.min_temperature_flag,
            Property::MeanTemperature => &p.mean_temperature_flag,
            Property::TotalPrecipitation => &p.total_precipitation_flag,
            Property::TotalRain => &p.total_rain_flag,
            Property::TotalSnow => &p.total_snow_flag,
            Property::SnowOnGround => &p.snow_on_ground_flag,
            Property::SpeedMaxGust => &p.speed_max_gust_flag,
            Property::DirectionMaxGust => &p.direction_max_gust_flag,
            Property::MaxRelHumidity => &p.max_rel_humidity_flag,
            Property::MinRelHumidity => &p.min_rel_humidity_flag,
            Property::HeatingDegreeDays => &p.heating_degree_days_flag,
            Property::CoolingDegreeDays => &p.cooling_degree_days_flag,
        };
        flag.as_deref()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Property {
    type Err = StationError;

    /// Accepts the dump key (`max_temperature`, `MAX_TEMPERATURE`) or the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Property::ALL
            .into_iter()
            .find(|p| {
                p.key().eq_ignore_ascii_case(wanted) || p.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| StationError::UnknownProperty(s.to_string()))
    }
}
