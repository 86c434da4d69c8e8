use crate::domain::waypoint::GeoBounds;
use serde::Deserialize;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "DRONE_DASHBOARD";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub seed: SeedSettings,
    pub planner: PlannerSettings,
    pub flight: FlightSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedSettings {
    pub path: String,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            path: "config/seed.toml".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlannerSettings {
    pub origin_lat: f64,
    pub origin_lng: f64,
    pub default_altitude: f64,
    pub default_camera_angle: f64,
    pub step_lat: f64,
    pub step_lng: f64,
    pub bounds: GeoBounds,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            origin_lat: 37.7749,
            origin_lng: -122.4194,
            default_altitude: 100.0,
            default_camera_angle: 45.0,
            step_lat: 0.005,
            step_lng: 0.005,
            bounds: GeoBounds::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FlightSettings {
    pub takeoff_ms: u64,
    pub landing_ms: u64,
    pub tick_interval_ms: u64,
    pub event_buffer: usize,
}

impl Default for FlightSettings {
    fn default() -> Self {
        Self {
            takeoff_ms: 2000,
            landing_ms: 3000,
            tick_interval_ms: 100,
            event_buffer: 64,
        }
    }
}

fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    let defaults = AppConfig::default();
    config::Config::builder()
        .set_default("server.bind", defaults.server.bind)?
        .set_default("seed.path", defaults.seed.path)?
        .set_default("planner.origin_lat", defaults.planner.origin_lat)?
        .set_default("planner.origin_lng", defaults.planner.origin_lng)?
        .set_default("planner.default_altitude", defaults.planner.default_altitude)?
        .set_default("planner.default_camera_angle", defaults.planner.default_camera_angle)?
        .set_default("planner.step_lat", defaults.planner.step_lat)?
        .set_default("planner.step_lng", defaults.planner.step_lng)?
        .set_default("planner.bounds.west", defaults.planner.bounds.west)?
        .set_default("planner.bounds.east", defaults.planner.bounds.east)?
        .set_default("planner.bounds.north", defaults.planner.bounds.north)?
        .set_default("planner.bounds.south", defaults.planner.bounds.south)?
        .set_default("flight.takeoff_ms", defaults.flight.takeoff_ms as i64)?
        .set_default("flight.landing_ms", defaults.flight.landing_ms as i64)?
        .set_default("flight.tick_interval_ms", defaults.flight.tick_interval_ms as i64)?
        .set_default("flight.event_buffer", defaults.flight.event_buffer as i64)
}

/// Load settings from built-in defaults, then `config/dashboard.*` if it
/// exists, then `DRONE_DASHBOARD__SECTION__KEY` environment variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = builder_with_defaults()?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
