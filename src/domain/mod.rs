// Domain layer - Plain data types and pure rules
pub mod agriculture;
pub mod alert;
pub mod analytics;
pub mod error;
pub mod flight;
pub mod insight;
pub mod mission;
pub mod waypoint;
pub mod weather;
