//! Demo configuration file

use metal_surface::config::{Config, Deserialize, Serialize};
use metal_surface::LayerConfig;

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "surface_demo.toml";

/// Window opened by the demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Metal Surface Demo".to_string(),
        }
    }
}

/// Everything the demo reads from disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub layer: LayerConfig,
}

impl Config for DemoConfig {}
