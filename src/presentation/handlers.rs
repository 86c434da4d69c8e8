// HTTP request handlers
use crate::domain::agriculture::FieldView;
use crate::domain::analytics::{DefectSeverity, DetectionKind};
use crate::domain::flight::FlightCommand;
use crate::domain::insight::InsightCategory;
use crate::infrastructure::chunked_json::stream_from_broadcast;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct InsightQuery {
    pub category: Option<InsightCategory>,
}

#[derive(Deserialize)]
pub struct DetectionQuery {
    pub kind: Option<DetectionKind>,
}

#[derive(Deserialize)]
pub struct DefectQuery {
    pub min_severity: Option<DefectSeverity>,
}

#[derive(Deserialize)]
pub struct FieldQuery {
    pub view: Option<FieldView>,
    pub diseased_only: Option<bool>,
}

#[derive(Deserialize)]
pub struct CommandRequest {
    pub command: FlightCommand,
}

async fn respond<T: Serialize>(headers: &HeaderMap, status: StatusCode, data: &T) -> Response {
    match json_response(status, data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn dashboard_snapshot(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.dashboard_service.snapshot().await;
    respond(&headers, StatusCode::OK, &snapshot).await
}

pub async fn list_missions(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let missions = state.dashboard_service.missions().await;
    respond(&headers, StatusCode::OK, &missions).await
}

pub async fn current_mission(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.current_mission().await {
        Ok(mission) => respond(&headers, StatusCode::OK, &mission).await,
        Err(e) => e.into_response(),
    }
}

pub async fn select_mission(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.select_mission(&id).await {
        Ok(mission) => respond(&headers, StatusCode::OK, &mission).await,
        Err(e) => e.into_response(),
    }
}

pub async fn list_waypoints(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let plan = state.dashboard_service.plan().await;
    respond(&headers, StatusCode::OK, &plan).await
}

pub async fn append_waypoint(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let waypoint = state.dashboard_service.append_waypoint().await;
    respond(&headers, StatusCode::CREATED, &waypoint).await
}

pub async fn remove_waypoint(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let plan = state.dashboard_service.remove_waypoint(&id).await;
    respond(&headers, StatusCode::OK, &plan).await
}

pub async fn list_insights(
    Query(query): Query<InsightQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let insights = state.dashboard_service.insights(query.category);
    respond(&headers, StatusCode::OK, &insights).await
}

pub async fn list_alerts(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let feed = state.dashboard_service.alerts().await;
    respond(&headers, StatusCode::OK, &feed).await
}

pub async fn mark_alert_read(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.mark_alert_read(&id).await {
        Ok(alert) => respond(&headers, StatusCode::OK, &alert).await,
        Err(e) => e.into_response(),
    }
}

pub async fn mark_all_alerts_read(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let changed = state.dashboard_service.mark_all_alerts_read().await;
    respond(&headers, StatusCode::OK, &serde_json::json!({ "changed": changed })).await
}

pub async fn list_detections(
    Query(query): Query<DetectionQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let detections = state.dashboard_service.detections(query.kind);
    respond(&headers, StatusCode::OK, &detections).await
}

pub async fn list_defects(
    Query(query): Query<DefectQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let defects = state.dashboard_service.defects(query.min_severity);
    respond(&headers, StatusCode::OK, &defects).await
}

pub async fn field_survey(
    Query(query): Query<FieldQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let report = state
        .dashboard_service
        .field_survey(query.view.unwrap_or_default(), query.diseased_only.unwrap_or(false));
    respond(&headers, StatusCode::OK, &report).await
}

pub async fn weather(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.weather() {
        Ok(summary) => respond(&headers, StatusCode::OK, &summary).await,
        Err(e) => e.into_response(),
    }
}

pub async fn flight_state(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let flight = state.flight_service.state().await;
    respond(&headers, StatusCode::OK, &flight).await
}

pub async fn flight_command(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<CommandRequest>,
) -> Response {
    match state.flight_service.command(request.command).await {
        Ok(event) => respond(&headers, StatusCode::OK, &event).await,
        Err(e) => e.into_response(),
    }
}

pub async fn toggle_recording(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let recording = state.flight_service.toggle_recording().await;
    respond(&headers, StatusCode::OK, &serde_json::json!({ "recording": recording })).await
}

/// Stream flight status transitions as they happen
pub async fn stream_flight_events(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let rx = state.flight_service.subscribe().await;
    stream_from_broadcast(rx, accepts_brotli(&headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::tests::bundled_service;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::flight_service::FlightService;
    use crate::application::clock::ManualClock;
    use crate::application::flight_controller::FlightController;
    use crate::domain::flight::DroneVitals;
    use crate::infrastructure::config::{FlightSettings, PlannerSettings};
    use crate::infrastructure::fixture_repository::TomlSeedRepository;

    async fn state() -> State<Arc<AppState>> {
        let dashboard_service = bundled_service().await;
        let flight_service = dashboard_service.flight().clone();
        State(Arc::new(AppState {
            dashboard_service,
            flight_service,
        }))
    }

    async fn empty_state() -> State<Arc<AppState>> {
        let repository = Arc::new(TomlSeedRepository::parse("").unwrap());
        let flight_service = FlightService::new(
            FlightController::new(FlightSettings::default(), DroneVitals::default()),
            Arc::new(ManualClock::new()),
        );
        let dashboard_service =
            DashboardService::load(repository, PlannerSettings::default(), flight_service.clone())
                .await
                .unwrap();
        State(Arc::new(AppState {
            dashboard_service,
            flight_service,
        }))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }

    #[tokio::test]
    async fn test_select_unknown_mission_is_404() {
        let state = state().await;

        let ok = select_mission(Path("m1".to_string()), HeaderMap::new(), state.clone()).await;
        assert_eq!(ok.status(), StatusCode::OK);
        assert_eq!(body_json(ok).await["id"], "m1");

        let missing = select_mission(Path("m9".to_string()), HeaderMap::new(), state.clone()).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let current = current_mission(HeaderMap::new(), state).await;
        assert_eq!(body_json(current).await["id"], "m1");
    }

    #[tokio::test]
    async fn test_empty_roster_has_no_current_mission() {
        let state = empty_state().await;

        let current = current_mission(HeaderMap::new(), state.clone()).await;
        assert_eq!(current.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(current).await["error"], "no mission selected");

        let missions = body_json(list_missions(HeaderMap::new(), state).await).await;
        assert!(missions.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_waypoint_endpoints() {
        let state = state().await;

        let created = append_waypoint(HeaderMap::new(), state.clone()).await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = body_json(created).await;
        assert_eq!(created["id"], "wp5");
        assert_eq!(created["action"], "photo");

        let plan = body_json(list_waypoints(HeaderMap::new(), state.clone()).await).await;
        assert_eq!(plan.as_array().unwrap().len(), 5);
        assert_eq!(plan[4]["role"], "destination");

        let after = remove_waypoint(Path("wp1".to_string()), HeaderMap::new(), state.clone()).await;
        assert_eq!(after.status(), StatusCode::OK);
        let after = body_json(after).await;
        assert_eq!(after[0]["id"], "wp2");
        assert_eq!(after[0]["role"], "origin");

        let noop = remove_waypoint(Path("wp1".to_string()), HeaderMap::new(), state).await;
        assert_eq!(noop.status(), StatusCode::OK);
        assert_eq!(body_json(noop).await.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_alert_endpoints() {
        let state = state().await;

        let missing = mark_alert_read(Path("a9".to_string()), HeaderMap::new(), state.clone()).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let read = mark_alert_read(Path("a2".to_string()), HeaderMap::new(), state.clone()).await;
        assert_eq!(body_json(read).await["read"], true);

        let feed = body_json(list_alerts(HeaderMap::new(), state.clone()).await).await;
        assert_eq!(feed["unread"], 1);

        let all = body_json(mark_all_alerts_read(HeaderMap::new(), state).await).await;
        assert_eq!(all["changed"], 1);
    }

    #[tokio::test]
    async fn test_filtered_feeds() {
        let state = state().await;

        let insights = list_insights(
            Query(InsightQuery {
                category: Some(InsightCategory::Prediction),
            }),
            HeaderMap::new(),
            state.clone(),
        )
        .await;
        let insights = body_json(insights).await;
        assert_eq!(insights.as_array().unwrap().len(), 1);
        assert_eq!(insights[0]["id"], "i4");

        let people = list_detections(
            Query(DetectionQuery {
                kind: Some(DetectionKind::Person),
            }),
            HeaderMap::new(),
            state.clone(),
        )
        .await;
        assert_eq!(body_json(people).await.as_array().unwrap().len(), 2);

        let defects = list_defects(Query(DefectQuery { min_severity: None }), HeaderMap::new(), state).await;
        let defects = body_json(defects).await;
        assert_eq!(defects[0]["severity"], "critical");
        assert_eq!(defects[0]["type"], "Water Damage");
    }

    #[tokio::test]
    async fn test_field_and_weather_endpoints() {
        let state = state().await;

        let thermal = field_survey(
            Query(FieldQuery {
                view: Some(FieldView::Thermal),
                diseased_only: Some(true),
            }),
            HeaderMap::new(),
            state.clone(),
        )
        .await;
        assert_eq!(thermal.status(), StatusCode::OK);
        let thermal = body_json(thermal).await;
        assert_eq!(thermal["view"], "thermal");
        assert_eq!(thermal["diseasedCells"], 3);
        assert_eq!(thermal["health"]["growthRatePercent"], 82);
        assert_eq!(thermal["cells"][0]["id"], "grid-4");
        assert_eq!(thermal["cells"][0]["disease"], true);
        assert_eq!(thermal["cells"][0]["reading"], 32.4);

        let ndvi = field_survey(
            Query(FieldQuery {
                view: None,
                diseased_only: None,
            }),
            HeaderMap::new(),
            state.clone(),
        )
        .await;
        let ndvi = body_json(ndvi).await;
        assert_eq!(ndvi["view"], "ndvi");
        assert_eq!(ndvi["cells"].as_array().unwrap().len(), 20);

        let weather = weather(HeaderMap::new(), state).await;
        assert_eq!(weather.status(), StatusCode::OK);
        let weather = body_json(weather).await;
        assert_eq!(weather["suitability"], "favorable");
        assert_eq!(weather["current"]["sunset"], "19:45:00");
        assert_eq!(weather["forecast"][1]["rainChancePercent"], 60);
    }

    #[tokio::test]
    async fn test_weather_missing_is_unavailable() {
        let response = weather(HeaderMap::new(), empty_state().await).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["error"], "no weather report available");
    }

    #[test]
    fn test_field_query_wire_format() {
        let query: FieldQuery =
            serde_json::from_str(r#"{"view":"rgb","diseased_only":true}"#).unwrap();
        assert_eq!(query.view, Some(FieldView::Rgb));
        assert_eq!(query.diseased_only, Some(true));
    }

    #[tokio::test]
    async fn test_flight_command_conflict() {
        let state = state().await;

        let rejected = flight_command(
            HeaderMap::new(),
            state.clone(),
            Json(CommandRequest {
                command: FlightCommand::ReturnHome,
            }),
        )
        .await;
        assert_eq!(rejected.status(), StatusCode::CONFLICT);

        let accepted = flight_command(
            HeaderMap::new(),
            state.clone(),
            Json(CommandRequest {
                command: FlightCommand::TakeoffLand,
            }),
        )
        .await;
        assert_eq!(accepted.status(), StatusCode::OK);
        assert_eq!(body_json(accepted).await["to"], "takeoff");

        let flight = body_json(flight_state(HeaderMap::new(), state.clone()).await).await;
        assert_eq!(flight["status"], "takeoff");
        assert_eq!(flight["batteryBand"], "good");

        let snapshot = body_json(dashboard_snapshot(HeaderMap::new(), state).await).await;
        assert_eq!(snapshot["unreadAlerts"], 2);
        assert_eq!(snapshot["waypointCount"], 4);
        assert_eq!(snapshot["flight"]["status"], "takeoff");
    }

    #[test]
    fn test_command_request_wire_format() {
        let request: CommandRequest = serde_json::from_str(r#"{"command":"takeoff-land"}"#).unwrap();
        assert_eq!(request.command, FlightCommand::TakeoffLand);
    }
}
