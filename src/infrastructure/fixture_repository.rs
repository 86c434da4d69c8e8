// TOML fixture repository implementation
use crate::application::seed_repository::SeedRepository;
use crate::domain::agriculture::FieldSurvey;
use crate::domain::alert::Alert;
use crate::domain::analytics::{Defect, Detection};
use crate::domain::insight::Insight;
use crate::domain::mission::Mission;
use crate::domain::waypoint::Waypoint;
use crate::domain::weather::WeatherReport;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
struct SeedFile {
    #[serde(default)]
    missions: Vec<Mission>,
    #[serde(default)]
    waypoints: Vec<Waypoint>,
    #[serde(default)]
    insights: Vec<Insight>,
    #[serde(default)]
    alerts: Vec<Alert>,
    #[serde(default)]
    detections: Vec<Detection>,
    #[serde(default)]
    defects: Vec<Defect>,
    #[serde(default)]
    agriculture: FieldSurvey,
    #[serde(default)]
    weather: Option<WeatherReport>,
}

/// Seed data parsed once from a TOML file.
#[derive(Debug, Clone)]
pub struct TomlSeedRepository {
    seed: SeedFile,
}

impl TomlSeedRepository {
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;

        let repository = Self::parse(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
        tracing::debug!("Loaded seed data from {}", path.display());
        Ok(repository)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let seed: SeedFile = toml::from_str(raw)?;
        Ok(Self { seed })
    }

    /// Seed data compiled into the binary.
    #[cfg(test)]
    pub fn bundled() -> Result<Self> {
        Self::parse(include_str!("../../config/seed.toml"))
    }
}

#[async_trait]
impl SeedRepository for TomlSeedRepository {
    async fn load_missions(&self) -> Result<Vec<Mission>> {
        Ok(self.seed.missions.clone())
    }

    async fn load_waypoints(&self) -> Result<Vec<Waypoint>> {
        Ok(self.seed.waypoints.clone())
    }

    async fn load_insights(&self) -> Result<Vec<Insight>> {
        Ok(self.seed.insights.clone())
    }

    async fn load_alerts(&self) -> Result<Vec<Alert>> {
        Ok(self.seed.alerts.clone())
    }

    async fn load_detections(&self) -> Result<Vec<Detection>> {
        Ok(self.seed.detections.clone())
    }

    async fn load_defects(&self) -> Result<Vec<Defect>> {
        Ok(self.seed.defects.clone())
    }

    async fn load_field_survey(&self) -> Result<FieldSurvey> {
        Ok(self.seed.agriculture.clone())
    }

    async fn load_weather(&self) -> Result<Option<WeatherReport>> {
        Ok(self.seed.weather.clone())
    }
}
