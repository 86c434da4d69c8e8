// Dashboard service - Top-level container for the dashboard state
use crate::application::alert_inbox::AlertInbox;
use crate::application::flight_service::{FlightService, FlightState};
use crate::application::mission_selector::MissionSelector;
use crate::application::seed_repository::SeedRepository;
use crate::application::waypoint_planner::{PlannedWaypoint, WaypointPlanner};
use crate::domain::agriculture::{CropHealth, FieldCell, FieldSurvey, FieldView};
use crate::domain::alert::Alert;
use crate::domain::analytics::{rank_defects, Defect, DefectSeverity, Detection, DetectionKind};
use crate::domain::error::{DashboardError, DashboardResult};
use crate::domain::insight::{Insight, InsightCategory};
use crate::domain::mission::Mission;
use crate::domain::waypoint::Waypoint;
use crate::domain::weather::{CurrentConditions, FlightSuitability, ForecastDay, WeatherReport};
use crate::infrastructure::config::PlannerSettings;
use anyhow::Context;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub current_mission: Option<Mission>,
    pub unread_alerts: usize,
    pub waypoint_count: usize,
    pub flight: FlightState,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertFeed {
    pub alerts: Vec<Alert>,
    pub unread: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReading {
    #[serde(flatten)]
    pub cell: FieldCell,
    pub reading: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub view: FieldView,
    pub health: CropHealth,
    pub diseased_cells: usize,
    pub cells: Vec<FieldReading>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    pub current: CurrentConditions,
    pub suitability: FlightSuitability,
    pub forecast: Vec<ForecastDay>,
}

#[derive(Clone)]
pub struct DashboardService {
    missions: Arc<RwLock<MissionSelector>>,
    planner: Arc<RwLock<WaypointPlanner>>,
    alerts: Arc<RwLock<AlertInbox>>,
    insights: Arc<Vec<Insight>>,
    detections: Arc<Vec<Detection>>,
    defects: Arc<Vec<Defect>>,
    field: Arc<FieldSurvey>,
    weather: Arc<Option<WeatherReport>>,
    flight: FlightService,
}

impl DashboardService {
    /// Build the dashboard from seed data. Missions and waypoints are
    /// required, the feeds fall back to empty.
    pub async fn load(
        repository: Arc<dyn SeedRepository>,
        planner_settings: PlannerSettings,
        flight: FlightService,
    ) -> anyhow::Result<Self> {
        let missions = repository
            .load_missions()
            .await
            .context("Failed to load mission roster")?;
        let waypoints = repository
            .load_waypoints()
            .await
            .context("Failed to load waypoint plan")?;

        let insights = load_feed("insights", repository.load_insights()).await;
        let alerts = load_feed("alerts", repository.load_alerts()).await;
        let detections = load_feed("detections", repository.load_detections()).await;
        let defects = load_feed("defects", repository.load_defects()).await;
        let field = load_feed("field survey", repository.load_field_survey()).await;
        let weather = load_feed("weather", repository.load_weather()).await;

        tracing::info!(
            "Loaded {} missions, {} waypoints, {} insights, {} alerts",
            missions.len(),
            waypoints.len(),
            insights.len(),
            alerts.len()
        );

        Ok(Self {
            missions: Arc::new(RwLock::new(MissionSelector::new(missions))),
            planner: Arc::new(RwLock::new(WaypointPlanner::new(waypoints, planner_settings))),
            alerts: Arc::new(RwLock::new(AlertInbox::new(alerts))),
            insights: Arc::new(insights),
            detections: Arc::new(detections),
            defects: Arc::new(defects),
            field: Arc::new(field),
            weather: Arc::new(weather),
            flight,
        })
    }

    pub fn flight(&self) -> &FlightService {
        &self.flight
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            current_mission: self.missions.read().await.current().cloned(),
            unread_alerts: self.alerts.read().await.unread_count(),
            waypoint_count: self.planner.read().await.waypoints().len(),
            flight: self.flight.state().await,
        }
    }

    pub async fn missions(&self) -> Vec<Mission> {
        self.missions.read().await.roster().to_vec()
    }

    pub async fn current_mission(&self) -> DashboardResult<Mission> {
        self.missions
            .read()
            .await
            .current()
            .cloned()
            .ok_or(DashboardError::NoCurrentMission)
    }

    pub async fn select_mission(&self, mission_id: &str) -> DashboardResult<Mission> {
        let mut missions = self.missions.write().await;
        match missions.select(mission_id) {
            Ok(mission) => {
                tracing::info!("Selected mission {} ({})", mission.id, mission.name);
                Ok(mission.clone())
            }
            Err(e) => {
                tracing::warn!("Mission selection rejected: {}", e);
                Err(e)
            }
        }
    }

    pub async fn plan(&self) -> Vec<PlannedWaypoint> {
        self.planner.read().await.plan()
    }

    pub async fn append_waypoint(&self) -> Waypoint {
        let waypoint = self.planner.write().await.append();
        tracing::debug!(
            "Appended waypoint {} at ({}, {})",
            waypoint.id,
            waypoint.lat,
            waypoint.lng
        );
        waypoint
    }

    /// Remove a waypoint and return the remaining plan.
    pub async fn remove_waypoint(&self, id: &str) -> Vec<PlannedWaypoint> {
        let mut planner = self.planner.write().await;
        if planner.remove(id).is_none() {
            tracing::debug!("Waypoint {} not in plan, nothing removed", id);
        }
        planner.plan()
    }

    pub fn insights(&self, category: Option<InsightCategory>) -> Vec<Insight> {
        self.insights
            .iter()
            .filter(|i| i.matches(category))
            .cloned()
            .collect()
    }

    pub async fn alerts(&self) -> AlertFeed {
        let inbox = self.alerts.read().await;
        AlertFeed {
            alerts: inbox.list().to_vec(),
            unread: inbox.unread_count(),
        }
    }

    pub async fn mark_alert_read(&self, id: &str) -> DashboardResult<Alert> {
        self.alerts.write().await.mark_read(id)
    }

    pub async fn mark_all_alerts_read(&self) -> usize {
        self.alerts.write().await.mark_all_read()
    }

    pub fn detections(&self, kind: Option<DetectionKind>) -> Vec<Detection> {
        self.detections
            .iter()
            .filter(|d| kind.is_none_or(|k| k == d.kind))
            .cloned()
            .collect()
    }

    pub fn defects(&self, min_severity: Option<DefectSeverity>) -> Vec<Defect> {
        rank_defects(&self.defects, min_severity)
    }

    /// Field grid shaded for `view`, optionally narrowed to diseased cells.
    pub fn field_survey(&self, view: FieldView, diseased_only: bool) -> FieldReport {
        let cells = self
            .field
            .cells
            .iter()
            .filter(|c| !diseased_only || c.disease)
            .map(|c| FieldReading {
                cell: c.clone(),
                reading: c.reading(view),
            })
            .collect();
        FieldReport {
            view,
            health: self.field.health.clone(),
            diseased_cells: self.field.cells.iter().filter(|c| c.disease).count(),
            cells,
        }
    }

    pub fn weather(&self) -> DashboardResult<WeatherSummary> {
        let report = (*self.weather).as_ref().ok_or(DashboardError::WeatherUnavailable)?;
        Ok(WeatherSummary {
            current: report.current.clone(),
            suitability: report.current.suitability(),
            forecast: report.forecast.clone(),
        })
    }
}

async fn load_feed<T: Default>(name: &str, fut: impl Future<Output = anyhow::Result<T>>) -> T {
    match fut.await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Error loading {} feed, starting empty: {:#}", name, e);
            T::default()
        }
    }
}
