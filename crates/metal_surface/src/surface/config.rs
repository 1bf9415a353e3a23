//! Layer configuration
//!
//! Properties applied to a freshly created `CAMetalLayer` before it is
//! installed on the content view. The defaults are the values a bare
//! `[CAMetalLayer layer]` already has, so a default-configured factory creates
//! exactly the layer the platform would.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};

/// Pixel formats a `CAMetalLayer` accepts for its drawables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    /// 8-bit BGRA, linear
    #[default]
    Bgra8Unorm,
    /// 8-bit BGRA with sRGB encoding
    Bgra8UnormSrgb,
    /// 16-bit float RGBA, for extended range output
    Rgba16Float,
    /// 10-bit RGB with 2-bit alpha
    Rgb10a2Unorm,
    /// 10-bit BGR with 2-bit alpha
    Bgr10a2Unorm,
}

impl PixelFormat {
    /// The `MTLPixelFormat` raw value
    #[must_use]
    pub const fn metal_raw_value(self) -> usize {
        match self {
            Self::Bgra8Unorm => 80,
            Self::Bgra8UnormSrgb => 81,
            Self::Rgba16Float => 115,
            Self::Rgb10a2Unorm => 90,
            Self::Bgr10a2Unorm => 94,
        }
    }
}

/// Settings applied to each layer the factory creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    /// Drawable pixel format
    pub pixel_format: PixelFormat,
    /// Drawables are only used as render targets (enables platform optimizations)
    pub framebuffer_only: bool,
    /// Size of the drawable pool, 2 or 3
    pub maximum_drawable_count: u32,
    /// Synchronize presentation with the display refresh
    pub display_sync: bool,
    /// The layer is fully opaque
    pub opaque: bool,
    /// Set the layer's contents scale from the window's backing scale factor
    pub match_backing_scale: bool,
}

impl LayerConfig {
    /// Check that every value is one the platform accepts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=3).contains(&self.maximum_drawable_count) {
            return Err(ConfigError::Invalid(format!(
                "maximum_drawable_count must be 2 or 3, got {}",
                self.maximum_drawable_count
            )));
        }
        Ok(())
    }

    /// Builder-style pixel format override
    #[must_use]
    pub const fn with_pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.pixel_format = pixel_format;
        self
    }

    /// Builder-style drawable count override
    #[must_use]
    pub const fn with_maximum_drawable_count(mut self, count: u32) -> Self {
        self.maximum_drawable_count = count;
        self
    }
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            pixel_format: PixelFormat::Bgra8Unorm,
            framebuffer_only: true,
            maximum_drawable_count: 3,
            display_sync: true,
            opaque: true,
            match_backing_scale: true,
        }
    }
}

impl Config for LayerConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_platform_defaults() {
        let config = LayerConfig::default();
        assert_eq!(config.pixel_format, PixelFormat::Bgra8Unorm);
        assert!(config.framebuffer_only);
        assert_eq!(config.maximum_drawable_count, 3);
        assert!(config.display_sync);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_drawable_count_out_of_range() {
        for count in [0, 1, 4] {
            let config = LayerConfig::default().with_maximum_drawable_count(count);
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))), "count {count}");
        }
        assert!(LayerConfig::default().with_maximum_drawable_count(2).validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: LayerConfig = toml::from_str("pixel_format = \"rgba16_float\"\nopaque = false\n").unwrap();
        assert_eq!(config.pixel_format, PixelFormat::Rgba16Float);
        assert!(!config.opaque);
        assert_eq!(config.maximum_drawable_count, 3);
        assert!(config.match_backing_scale);
    }

    #[test]
    fn test_metal_raw_values() {
        assert_eq!(PixelFormat::Bgra8Unorm.metal_raw_value(), 80);
        assert_eq!(PixelFormat::Bgra8UnormSrgb.metal_raw_value(), 81);
        assert_eq!(PixelFormat::Rgba16Float.metal_raw_value(), 115);
        assert_eq!(PixelFormat::Rgb10a2Unorm.metal_raw_value(), 90);
        assert_eq!(PixelFormat::Bgr10a2Unorm.metal_raw_value(), 94);
    }

    #[test]
    fn test_layer_config_ron_file() {
        let path = std::env::temp_dir().join(format!("metal_surface_{}_layer.ron", std::process::id()));
        let config = LayerConfig {
            pixel_format: PixelFormat::Bgr10a2Unorm,
            display_sync: false,
            match_backing_scale: false,
            ..LayerConfig::default()
        }
        .with_maximum_drawable_count(2);
        config.save_to_file(&path).unwrap();

        let loaded = LayerConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
        assert!(loaded.validate().is_ok());
    }
}
