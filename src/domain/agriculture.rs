// Agriculture field survey domain model
use serde::{Deserialize, Serialize};

/// Imagery layer the field grid is colored by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldView {
    #[default]
    Ndvi,
    Thermal,
    Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCell {
    pub id: String,
    /// Vegetation index in [0, 1].
    pub ndvi: f64,
    pub moisture_percent: u8,
    pub temperature_c: f64,
    #[serde(default)]
    pub disease: bool,
}

impl FieldCell {
    /// Value the overlay shades this cell by. Plain RGB imagery carries no
    /// per-cell reading.
    pub fn reading(&self, view: FieldView) -> Option<f64> {
        match view {
            FieldView::Ndvi => Some(self.ndvi),
            FieldView::Thermal => Some(self.temperature_c),
            FieldView::Rgb => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropHealth {
    pub overall_health_percent: u8,
    pub moisture_percent: u8,
    pub soil_temperature_c: f64,
    /// Soil temperature against the crop's optimal band, for the gauge.
    pub soil_temperature_percent: u8,
    pub growth_rate_percent: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSurvey {
    #[serde(default)]
    pub health: CropHealth,
    #[serde(default)]
    pub cells: Vec<FieldCell>,
}
