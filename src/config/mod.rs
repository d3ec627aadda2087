//! Configuration file support for markboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/markboard/config.toml`.
//! Settings include stroke defaults, arrowhead appearance, eraser
//! tolerance, and the icon stamp size.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ArrowConfig, DrawingConfig, EraserConfig, IconConfig};

use crate::draw::RenderStyle;
use crate::input::Mode;
use crate::surface::StrokeStyle;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_thickness = 2.0
/// default_mode = "move"
///
/// [arrow]
/// length = 10.0
/// angle_degrees = 30.0
///
/// [eraser]
/// tolerance = 10
///
/// [icon]
/// stamp_size = 50
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Stroke defaults and startup tool
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Arrowhead appearance settings
    #[serde(default)]
    pub arrow: ArrowConfig,

    /// Eraser hit-test settings
    #[serde(default)]
    pub eraser: EraserConfig,

    /// Icon stamping settings
    #[serde(default)]
    pub icon: IconConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering issues. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 20.0
    /// - `arrow.length`: 5.0 - 50.0
    /// - `arrow.angle_degrees`: 15.0 - 60.0
    /// - `eraser.tolerance`: 1 - 100
    /// - `icon.stamp_size`: 8 - 512
    fn validate_and_clamp(&mut self) {
        // Thickness: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self.drawing.default_thickness.clamp(1.0, 20.0);
        }

        // Arrow length: 5.0 - 50.0
        if !(5.0..=50.0).contains(&self.arrow.length) {
            log::warn!(
                "Invalid arrow length {:.1}, clamping to 5.0-50.0 range",
                self.arrow.length
            );
            self.arrow.length = self.arrow.length.clamp(5.0, 50.0);
        }

        // Arrow angle: 15.0 - 60.0 degrees
        if !(15.0..=60.0).contains(&self.arrow.angle_degrees) {
            log::warn!(
                "Invalid arrow angle {:.1}, clamping to 15.0-60.0 range",
                self.arrow.angle_degrees
            );
            self.arrow.angle_degrees = self.arrow.angle_degrees.clamp(15.0, 60.0);
        }

        // Eraser tolerance: 1 - 100
        if !(1..=100).contains(&self.eraser.tolerance) {
            log::warn!(
                "Invalid eraser tolerance {}, clamping to 1-100 range",
                self.eraser.tolerance
            );
            self.eraser.tolerance = self.eraser.tolerance.clamp(1, 100);
        }

        // Stamp size: 8 - 512
        if !(8..=512).contains(&self.icon.stamp_size) {
            log::warn!(
                "Invalid stamp_size {}, clamping to 8-512 range",
                self.icon.stamp_size
            );
            self.icon.stamp_size = self.icon.stamp_size.clamp(8, 512);
        }

        // Validate startup tool
        if self.drawing.default_mode.parse::<Mode>().is_err() {
            log::warn!(
                "Invalid default_mode '{}', falling back to 'move'",
                self.drawing.default_mode
            );
            self.drawing.default_mode = "move".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/markboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("markboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults
    /// if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if
    /// the file does not exist. All loaded values are validated and clamped
    /// to acceptable ranges.
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/markboard/config.toml`. Creates the parent directory if
    /// it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Assembles the render style from the drawing and arrow sections.
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            stroke: StrokeStyle {
                color: self.drawing.default_color.to_color(),
                thickness: self.drawing.default_thickness,
            },
            arrow_length: self.arrow.length,
            arrow_angle: self.arrow.angle_degrees,
        }
    }

    /// Returns the startup tool selection.
    pub fn initial_mode(&self) -> Mode {
        self.drawing.default_mode.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = Config::default();

        assert_eq!(config.drawing.default_thickness, 2.0);
        assert_eq!(config.arrow.length, 10.0);
        assert_eq!(config.arrow.angle_degrees, 30.0);
        assert_eq!(config.eraser.tolerance, 10);
        assert_eq!(config.icon.stamp_size, 50);
        assert_eq!(config.initial_mode(), Mode::Move);
        assert_eq!(config.render_style().stroke.color, BLACK);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            default_color = "blue"
            default_mode = "arrow"

            [eraser]
            tolerance = 25
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.initial_mode(), Mode::Arrow);
        assert_eq!(config.eraser.tolerance, 25);
        // Untouched sections keep their defaults
        assert_eq!(config.drawing.default_thickness, 2.0);
        assert_eq!(config.icon.stamp_size, 50);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            default_thickness = 99.0
            default_mode = "lasso"

            [arrow]
            length = 0.5
            angle_degrees = 90.0

            [eraser]
            tolerance = 0

            [icon]
            stamp_size = 4096
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_thickness, 20.0);
        assert_eq!(config.drawing.default_mode, "move");
        assert_eq!(config.arrow.length, 5.0);
        assert_eq!(config.arrow.angle_degrees, 60.0);
        assert_eq!(config.eraser.tolerance, 1);
        assert_eq!(config.icon.stamp_size, 512);
    }

    #[test]
    fn rgb_color_spec_converts_to_unit_range() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_color = [255, 0, 0]
            "#,
        )
        .unwrap();

        let color = config.render_style().stroke.color;
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn load_from_path_reads_a_file_and_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let defaults = Config::load_from_path(&path).unwrap();
        assert_eq!(defaults.eraser.tolerance, 10);

        std::fs::write(&path, "[eraser]\ntolerance = 42\n").unwrap();
        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.eraser.tolerance, 42);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(Config::load_from_path(&path).is_err());
    }
}
