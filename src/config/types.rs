//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the stroke appearance and the tool selected when the widget
/// first opens. The host can change the tool at runtime through the
/// toolbar.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Stroke color - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Stroke thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Tool selected at startup (move, line, arrow, or eraser)
    #[serde(default = "default_mode")]
    pub default_mode: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            default_mode: default_mode(),
        }
    }
}

/// Arrow drawing settings.
///
/// Controls the appearance of arrowheads when using the arrow tool.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArrowConfig {
    /// Arrowhead wing length in pixels (valid range: 5.0 - 50.0)
    #[serde(default = "default_arrow_length")]
    pub length: f64,

    /// Arrowhead angle in degrees (valid range: 15.0 - 60.0)
    /// Smaller angles create narrower arrowheads, larger angles create wider ones
    #[serde(default = "default_arrow_angle")]
    pub angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            length: default_arrow_length(),
            angle_degrees: default_arrow_angle(),
        }
    }
}

/// Eraser settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct EraserConfig {
    /// Hit-test tolerance in pixels (valid range: 1 - 100)
    ///
    /// A shape is erased when the cursor is strictly within this Chebyshev
    /// distance of one of its endpoints.
    #[serde(default = "default_eraser_tolerance")]
    pub tolerance: i32,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            tolerance: default_eraser_tolerance(),
        }
    }
}

/// Icon stamping settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct IconConfig {
    /// Edge length in pixels of the square box an uploaded icon is scaled
    /// into when stamped (valid range: 8 - 512)
    #[serde(default = "default_stamp_size")]
    pub stamp_size: u32,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            stamp_size: default_stamp_size(),
        }
    }
}

// ============================================================================
// Default value functions for serde
// ============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> f64 {
    2.0
}

fn default_mode() -> String {
    "move".to_string()
}

fn default_arrow_length() -> f64 {
    10.0
}

fn default_arrow_angle() -> f64 {
    30.0
}

fn default_eraser_tolerance() -> i32 {
    10
}

fn default_stamp_size() -> u32 {
    50
}
