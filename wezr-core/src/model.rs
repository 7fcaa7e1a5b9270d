use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::units::Units;

/// Input for a single forecast lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub lat: String,
    pub long: String,
    pub units: Units,
}

/// Decoded forecast response. Missing fields decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSnapshot {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub offset: f64,
    pub currently: Option<DataPoint>,
    pub minutely: Option<DataBlock>,
    pub hourly: Option<DataBlock>,
    pub daily: Option<DataBlock>,
    pub alerts: Vec<Alert>,
    pub flags: Flags,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataPoint {
    /// Unix seconds.
    pub time: i64,
    pub summary: String,
    pub icon: String,
    pub precip_intensity: f64,
    /// Fraction in `0.0..=1.0`.
    pub precip_probability: f64,
    pub precip_type: String,
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub dew_point: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_bearing: f64,
    pub visibility: f64,
    pub cloud_cover: f64,
    pub pressure: f64,
    pub ozone: f64,
}

impl DataPoint {
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.time, 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataBlock {
    pub summary: String,
    pub icon: String,
    pub data: Vec<DataPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub title: String,
    pub expires: i64,
    pub description: String,
    pub uri: String,
}

impl Alert {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.expires, 0)
    }
}

/// Provenance record: which stations and sources fed the forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Flags {
    pub darksky_unavailable: String,
    pub darksky_stations: Vec<String>,
    pub datapoint_stations: Vec<String>,
    pub isd_stations: Vec<String>,
    pub lamp_stations: Vec<String>,
    pub metar_stations: Vec<String>,
    pub metno_stations: Vec<String>,
    pub sources: Vec<String>,
    pub units: String,
}
