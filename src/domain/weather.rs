// Weather domain model and flight suitability
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub summary: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub wind_kmh: f64,
    pub precipitation_percent: u8,
    pub sunset: NaiveTime,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub day: String,
    pub summary: String,
    pub temperature_c: f64,
    pub rain_chance_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightSuitability {
    Favorable,
    Marginal,
    Unfavorable,
}

const CALM_WIND_KMH: f64 = 20.0;
const MAX_WIND_KMH: f64 = 35.0;
const DRY_PRECIPITATION: u8 = 30;
const MAX_PRECIPITATION: u8 = 60;

impl CurrentConditions {
    pub fn suitability(&self) -> FlightSuitability {
        if self.wind_kmh <= CALM_WIND_KMH && self.precipitation_percent < DRY_PRECIPITATION {
            FlightSuitability::Favorable
        } else if self.wind_kmh <= MAX_WIND_KMH && self.precipitation_percent < MAX_PRECIPITATION {
            FlightSuitability::Marginal
        } else {
            FlightSuitability::Unfavorable
        }
    }
}
