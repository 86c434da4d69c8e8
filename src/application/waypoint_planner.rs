// Waypoint planner - Ordered waypoint list for the mission being planned
use crate::domain::waypoint::{project, ViewPoint, Waypoint, WaypointRole};
use crate::infrastructure::config::PlannerSettings;
use serde::Serialize;
use std::collections::HashSet;

/// A waypoint together with its position-derived view state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedWaypoint {
    pub index: usize,
    pub role: WaypointRole,
    pub view: ViewPoint,
    pub visible: bool,
    #[serde(flatten)]
    pub waypoint: Waypoint,
}

#[derive(Debug, Clone)]
pub struct WaypointPlanner {
    waypoints: Vec<Waypoint>,
    settings: PlannerSettings,
    next_seq: usize,
}

impl WaypointPlanner {
    pub fn new(seed: Vec<Waypoint>, settings: PlannerSettings) -> Self {
        let mut seen = HashSet::new();
        let waypoints: Vec<Waypoint> = seed
            .into_iter()
            .filter(|wp| {
                let fresh = seen.insert(wp.id.clone());
                if !fresh {
                    tracing::warn!("Dropping seed waypoint with duplicate id {}", wp.id);
                }
                fresh
            })
            .collect();
        let next_seq = waypoints.len() + 1;

        Self {
            waypoints,
            settings,
            next_seq,
        }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Append a waypoint one step past the current last one, or at the
    /// default origin when the plan is empty.
    pub fn append(&mut self) -> Waypoint {
        let id = self.fresh_id();
        let waypoint = match self.waypoints.last() {
            Some(last) => Waypoint::new(
                id,
                last.lat + self.settings.step_lat,
                last.lng + self.settings.step_lng,
                last.altitude,
                last.camera_angle,
            ),
            None => Waypoint::new(
                id,
                self.settings.origin_lat,
                self.settings.origin_lng,
                self.settings.default_altitude,
                self.settings.default_camera_angle,
            ),
        };

        self.waypoints.push(waypoint.clone());
        waypoint
    }

    /// Remove the waypoint with `id`. Unknown ids leave the plan untouched.
    pub fn remove(&mut self, id: &str) -> Option<Waypoint> {
        let position = self.waypoints.iter().position(|wp| wp.id == id)?;
        Some(self.waypoints.remove(position))
    }

    pub fn project(&self, waypoint: &Waypoint) -> ViewPoint {
        project(waypoint, &self.settings.bounds)
    }

    pub fn plan(&self) -> Vec<PlannedWaypoint> {
        let len = self.waypoints.len();
        self.waypoints
            .iter()
            .enumerate()
            .map(|(index, wp)| {
                let view = self.project(wp);
                PlannedWaypoint {
                    index,
                    role: WaypointRole::at(index, len),
                    view,
                    visible: view.is_visible(),
                    waypoint: wp.clone(),
                }
            })
            .collect()
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let candidate = format!("wp{}", self.next_seq);
            self.next_seq += 1;
            if !self.waypoints.iter().any(|wp| wp.id == candidate) {
                return candidate;
            }
        }
    }
}
