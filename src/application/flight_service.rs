// Flight service - Shared flight controller driven by a clock
use crate::application::clock::Clock;
use crate::application::flight_controller::FlightController;
use crate::domain::error::DashboardResult;
use crate::domain::flight::{BatteryBand, DroneVitals, FlightCommand, FlightEvent, FlightStatus};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightState {
    pub status: FlightStatus,
    pub recording: bool,
    pub vitals: DroneVitals,
    pub battery_band: BatteryBand,
}

#[derive(Clone)]
pub struct FlightService {
    controller: Arc<RwLock<FlightController>>,
    clock: Arc<dyn Clock>,
}

impl FlightService {
    pub fn new(controller: FlightController, clock: Arc<dyn Clock>) -> Self {
        Self {
            controller: Arc::new(RwLock::new(controller)),
            clock,
        }
    }

    pub async fn state(&self) -> FlightState {
        let controller = self.controller.read().await;
        let vitals = controller.vitals();
        FlightState {
            status: controller.status(),
            recording: controller.recording(),
            vitals,
            battery_band: vitals.battery_band(),
        }
    }

    pub async fn command(&self, command: FlightCommand) -> DashboardResult<FlightEvent> {
        let now = self.clock.now();
        self.controller.write().await.command(command, now)
    }

    pub async fn tick(&self) -> Option<FlightEvent> {
        let now = self.clock.now();
        self.controller.write().await.tick(now)
    }

    pub async fn toggle_recording(&self) -> bool {
        self.controller.write().await.toggle_recording()
    }

    pub async fn subscribe(&self) -> broadcast::Receiver<FlightEvent> {
        self.controller.read().await.subscribe()
    }

    /// Spawn the scheduler that fires due flight timers.
    pub fn spawn_ticker(&self, period: Duration) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if let Some(event) = service.tick().await {
                    tracing::debug!("Flight timer fired: {:?}", event);
                }
            }
        })
    }
}
