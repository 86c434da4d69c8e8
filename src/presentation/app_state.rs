// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::flight_service::FlightService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub flight_service: FlightService,
}
