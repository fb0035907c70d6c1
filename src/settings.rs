use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use tracing::info;

const DEFAULT_SETTINGS_PATH: &str = "config/default.toml";

/// Coordinates for the demo points, each as `[x, y]`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DemoSettings {
    /// Coordinates of the first point.
    pub p1: [f64; 2],
    /// Coordinates of the second point.
    pub p2: [f64; 2],
}

/// Load the demo settings, falling back to built-in coordinates when the
/// settings file is absent.
pub fn load_settings() -> Result<DemoSettings, ConfigError> {
    info!("Loading demo settings from {}", DEFAULT_SETTINGS_PATH);

    let settings = Config::builder()
        .set_default("p1", vec![1.0, 2.0])?
        .set_default("p2", vec![3.0, 4.0])?
        .add_source(File::new(DEFAULT_SETTINGS_PATH, FileFormat::Toml).required(false))
        .build()?;

    settings.try_deserialize()
}
