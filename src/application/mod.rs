// Application layer - Use cases over owned dashboard state
pub mod alert_inbox;
pub mod clock;
pub mod dashboard_service;
pub mod flight_controller;
pub mod flight_service;
pub mod mission_selector;
pub mod seed_repository;
pub mod waypoint_planner;
