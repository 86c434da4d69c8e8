// Repository trait for dashboard seed data
use crate::domain::agriculture::FieldSurvey;
use crate::domain::alert::Alert;
use crate::domain::analytics::{Defect, Detection};
use crate::domain::insight::Insight;
use crate::domain::mission::Mission;
use crate::domain::waypoint::Waypoint;
use crate::domain::weather::WeatherReport;
use async_trait::async_trait;

#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Mission roster offered by the mission selector
    async fn load_missions(&self) -> anyhow::Result<Vec<Mission>>;

    /// Initial waypoint plan, in flight order
    async fn load_waypoints(&self) -> anyhow::Result<Vec<Waypoint>>;

    async fn load_insights(&self) -> anyhow::Result<Vec<Insight>>;

    async fn load_alerts(&self) -> anyhow::Result<Vec<Alert>>;

    async fn load_detections(&self) -> anyhow::Result<Vec<Detection>>;

    async fn load_defects(&self) -> anyhow::Result<Vec<Defect>>;

    /// Crop health summary and field grid of the agriculture survey
    async fn load_field_survey(&self) -> anyhow::Result<FieldSurvey>;

    /// Current conditions and forecast, if the source has any
    async fn load_weather(&self) -> anyhow::Result<Option<WeatherReport>>;
}
