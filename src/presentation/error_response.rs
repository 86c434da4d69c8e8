// Mapping of dashboard errors onto HTTP responses
use crate::domain::error::DashboardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::MissionNotFound(_)
            | DashboardError::NoCurrentMission
            | DashboardError::AlertNotFound(_) => StatusCode::NOT_FOUND,
            DashboardError::WeatherUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            DashboardError::InvalidFlightCommand { .. } => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flight::{FlightCommand, FlightStatus};

    #[tokio::test]
    async fn test_error_body() {
        let err = DashboardError::InvalidFlightCommand {
            status: FlightStatus::Takeoff,
            command: FlightCommand::ReturnHome,
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "cannot return-home while takeoff");
    }

    #[test]
    fn test_not_found_codes() {
        assert_eq!(
            DashboardError::MissionNotFound("m9".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DashboardError::AlertNotFound("a9".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(DashboardError::NoCurrentMission.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            DashboardError::WeatherUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
