// Flight controller - Timer-driven flight status state machine
use crate::domain::error::{DashboardError, DashboardResult};
use crate::domain::flight::{DroneVitals, FlightCommand, FlightEvent, FlightStatus, FlightTrigger};
use crate::infrastructure::config::FlightSettings;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;

/// Owns the flight status and the single pending timer of a transient
/// status. Time is always passed in, so callers decide what "now" is.
#[derive(Debug)]
pub struct FlightController {
    status: FlightStatus,
    deadline: Option<Instant>,
    recording: bool,
    vitals: DroneVitals,
    settings: FlightSettings,
    events: broadcast::Sender<FlightEvent>,
}

impl FlightController {
    pub fn new(settings: FlightSettings, vitals: DroneVitals) -> Self {
        let (events, _) = broadcast::channel(settings.event_buffer.max(1));
        Self {
            status: FlightStatus::Idle,
            deadline: None,
            recording: false,
            vitals,
            settings,
            events,
        }
    }

    pub fn status(&self) -> FlightStatus {
        self.status
    }

    #[cfg(test)]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn recording(&self) -> bool {
        self.recording
    }

    pub fn vitals(&self) -> DroneVitals {
        self.vitals
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FlightEvent> {
        self.events.subscribe()
    }

    pub fn toggle_recording(&mut self) -> bool {
        self.recording = !self.recording;
        self.recording
    }

    pub fn command(&mut self, command: FlightCommand, now: Instant) -> DashboardResult<FlightEvent> {
        let next = self
            .status
            .on_command(command)
            .ok_or(DashboardError::InvalidFlightCommand {
                status: self.status,
                command,
            })?;

        Ok(self.transition(next, FlightTrigger::Command, now))
    }

    /// Fire the pending timer if it is due.
    pub fn tick(&mut self, now: Instant) -> Option<FlightEvent> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        let next = self.status.on_timer()?;
        Some(self.transition(next, FlightTrigger::Timer, now))
    }

    fn transition(&mut self, next: FlightStatus, trigger: FlightTrigger, now: Instant) -> FlightEvent {
        let event = FlightEvent {
            from: self.status,
            to: next,
            trigger,
        };

        self.status = next;
        self.deadline = self.delay_for(next).map(|delay| now + delay);

        tracing::info!("Flight status {} -> {} ({:?})", event.from, event.to, trigger);
        // No subscribers is fine
        let _ = self.events.send(event);

        event
    }

    fn delay_for(&self, status: FlightStatus) -> Option<Duration> {
        match status {
            FlightStatus::Takeoff => Some(Duration::from_millis(self.settings.takeoff_ms)),
            FlightStatus::Returning => Some(Duration::from_millis(self.settings.landing_ms)),
            FlightStatus::Idle | FlightStatus::InFlight => None,
        }
    }
}
