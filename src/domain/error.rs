// Error taxonomy shared by the application and presentation layers
use super::flight::{FlightCommand, FlightStatus};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("mission not found: {0}")]
    MissionNotFound(String),
    #[error("no mission selected")]
    NoCurrentMission,
    #[error("alert not found: {0}")]
    AlertNotFound(String),
    #[error("no weather report available")]
    WeatherUnavailable,
    #[error("cannot {command} while {status}")]
    InvalidFlightCommand {
        status: FlightStatus,
        command: FlightCommand,
    },
}

pub type DashboardResult<T> = Result<T, DashboardError>;
