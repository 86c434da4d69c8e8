// Flight status state machine and drone vitals
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightStatus {
    #[default]
    Idle,
    Takeoff,
    InFlight,
    Returning,
}

impl FlightStatus {
    /// Next status for an operator command, or `None` if the command is
    /// not accepted in this status.
    pub fn on_command(self, command: FlightCommand) -> Option<FlightStatus> {
        match (self, command) {
            (FlightStatus::Idle, FlightCommand::TakeoffLand) => Some(FlightStatus::Takeoff),
            (FlightStatus::InFlight, FlightCommand::TakeoffLand) => Some(FlightStatus::Returning),
            (FlightStatus::InFlight, FlightCommand::ReturnHome) => Some(FlightStatus::Returning),
            _ => None,
        }
    }

    /// Status reached when the pending timer of a transient status elapses.
    pub fn on_timer(self) -> Option<FlightStatus> {
        match self {
            FlightStatus::Takeoff => Some(FlightStatus::InFlight),
            FlightStatus::Returning => Some(FlightStatus::Idle),
            FlightStatus::Idle | FlightStatus::InFlight => None,
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlightStatus::Idle => "idle",
            FlightStatus::Takeoff => "takeoff",
            FlightStatus::InFlight => "in-flight",
            FlightStatus::Returning => "returning",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightCommand {
    TakeoffLand,
    ReturnHome,
}

impl fmt::Display for FlightCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightCommand::TakeoffLand => f.write_str("takeoff-land"),
            FlightCommand::ReturnHome => f.write_str("return-home"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightTrigger {
    Command,
    Timer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightEvent {
    pub from: FlightStatus,
    pub to: FlightStatus,
    pub trigger: FlightTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatteryBand {
    Good,
    Low,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DroneVitals {
    pub battery_percent: u8,
    pub signal_percent: u8,
    pub temperature_c: f64,
}

impl Default for DroneVitals {
    fn default() -> Self {
        Self {
            battery_percent: 85,
            signal_percent: 78,
            temperature_c: 24.0,
        }
    }
}

impl DroneVitals {
    pub fn battery_band(&self) -> BatteryBand {
        match self.battery_percent {
            p if p > 50 => BatteryBand::Good,
            p if p > 20 => BatteryBand::Low,
            _ => BatteryBand::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_transitions() {
        use FlightCommand::*;
        use FlightStatus::*;

        assert_eq!(Idle.on_command(TakeoffLand), Some(Takeoff));
        assert_eq!(InFlight.on_command(TakeoffLand), Some(Returning));
        assert_eq!(InFlight.on_command(ReturnHome), Some(Returning));

        assert_eq!(Idle.on_command(ReturnHome), None);
        assert_eq!(Takeoff.on_command(TakeoffLand), None);
        assert_eq!(Takeoff.on_command(ReturnHome), None);
        assert_eq!(Returning.on_command(TakeoffLand), None);
        assert_eq!(Returning.on_command(ReturnHome), None);
    }

    #[test]
    fn test_timer_transitions() {
        assert_eq!(FlightStatus::Takeoff.on_timer(), Some(FlightStatus::InFlight));
        assert_eq!(FlightStatus::Returning.on_timer(), Some(FlightStatus::Idle));
        assert_eq!(FlightStatus::Idle.on_timer(), None);
        assert_eq!(FlightStatus::InFlight.on_timer(), None);
    }

    #[test]
    fn test_battery_band_thresholds() {
        let band = |battery_percent| {
            DroneVitals {
                battery_percent,
                ..DroneVitals::default()
            }
            .battery_band()
        };

        assert_eq!(band(85), BatteryBand::Good);
        assert_eq!(band(51), BatteryBand::Good);
        assert_eq!(band(50), BatteryBand::Low);
        assert_eq!(band(21), BatteryBand::Low);
        assert_eq!(band(20), BatteryBand::Critical);
        assert_eq!(band(0), BatteryBand::Critical);
    }

    #[test]
    fn test_display_names_match_wire_names() {
        let json = serde_json::to_value(FlightStatus::InFlight).unwrap();
        assert_eq!(json, FlightStatus::InFlight.to_string());
        let json = serde_json::to_value(FlightCommand::ReturnHome).unwrap();
        assert_eq!(json, FlightCommand::ReturnHome.to_string());
    }
}
