//! Viewer configuration.
//!
//! Everything here has a default matching the source map, so a missing or
//! partial config file still yields a working view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Central (lon, lat) in degrees.
    pub center: [f64; 2],
    pub scale: f64,
    pub translate: [f64; 2],
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            center: [104.0, 37.5],
            scale: 80.0,
            translate: [0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrusionConfig {
    pub depth: f64,
    pub outline_offset: f64,
    /// Expand gesture stretch factor along the extrusion axis.
    pub stretch: f64,
}

impl Default for ExtrusionConfig {
    fn default() -> Self {
        Self {
            depth: 4.0,
            outline_offset: 4.01,
            stretch: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f64; 3],
    pub fov_y_deg: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 150.0],
            fov_y_deg: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub projection: ProjectionConfig,
    pub extrusion: ExtrusionConfig,
    pub camera: CameraConfig,
    pub ribbon_enabled: bool,
    /// Region receiving the decorative ribbon treatment.
    pub ribbon_region: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionConfig::default(),
            extrusion: ExtrusionConfig::default(),
            camera: CameraConfig::default(),
            ribbon_enabled: true,
            ribbon_region: regions::DESIGNATED_RIBBON_REGION.to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn ribbon_region_name(&self) -> Option<String> {
        self.ribbon_enabled.then(|| self.ribbon_region.clone())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn config_from_str(payload: &str) -> Result<ViewerConfig, ConfigError> {
    serde_json::from_str(payload).map_err(ConfigError::Parse)
}
