// Waypoint domain model and view projection
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaypointAction {
    #[default]
    Photo,
    Video,
    Scan,
    Spray,
    Inspect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub altitude: f64,
    #[serde(alias = "camera_angle")]
    pub camera_angle: f64,
    #[serde(default)]
    pub action: WaypointAction,
    /// Recording length in seconds, only used by `WaypointAction::Video`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl Waypoint {
    pub fn new(id: String, lat: f64, lng: f64, altitude: f64, camera_angle: f64) -> Self {
        Self {
            id,
            lat,
            lng,
            altitude,
            camera_angle,
            action: WaypointAction::Photo,
            duration: None,
        }
    }
}

/// Position-derived role of a waypoint in flight order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaypointRole {
    Origin,
    Interior,
    Destination,
}

impl WaypointRole {
    pub fn at(index: usize, len: usize) -> Self {
        if index == 0 {
            WaypointRole::Origin
        } else if index + 1 == len {
            WaypointRole::Destination
        } else {
            WaypointRole::Interior
        }
    }
}

/// Reference lat/lng window the map overlay is drawn over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub west: f64,
    pub east: f64,
    pub north: f64,
    pub south: f64,
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self {
            west: -122.5,
            east: -122.3,
            north: 37.85,
            south: 37.75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewPoint {
    pub fn is_visible(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Flat-earth affine mapping of a waypoint onto the unit view plane.
/// Only meaningful for small regions.
pub fn project(waypoint: &Waypoint, bounds: &GeoBounds) -> ViewPoint {
    ViewPoint {
        x: (waypoint.lng - bounds.west) / (bounds.east - bounds.west),
        y: (bounds.north - waypoint.lat) / (bounds.north - bounds.south),
    }
}
