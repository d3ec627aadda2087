//! Utility functions for colors, geometry, and arrowhead calculations.
//!
//! This module provides:
//! - Name-to-color mapping for the configuration file
//! - Arrowhead geometry calculations
//! - The Chebyshev-distance proximity test used by the eraser

use crate::draw::{Color, Shape, color::*};

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates the two arrowhead wing endpoints for a shaft.
///
/// The head sits at the end point (x2, y2) and opens back toward the start
/// (x1, y1): each wing endpoint is `length` pixels from the tip, rotated
/// `angle_degrees` to either side of the shaft direction
/// `atan2(y2 - y1, x2 - x1)`.
///
/// # Arguments
/// * `x1` - Shaft start X coordinate (arrow tail)
/// * `y1` - Shaft start Y coordinate (arrow tail)
/// * `x2` - Arrowhead tip X coordinate
/// * `y2` - Arrowhead tip Y coordinate
/// * `length` - Wing length in pixels
/// * `angle_degrees` - Angle between each wing and the shaft
///
/// # Returns
/// Array of two points `[(left_x, left_y), (right_x, right_y)]` for the
/// wing segments, both starting at (x2, y2).
///
/// A zero-length shaft keeps `atan2(0, 0) == 0` by convention, so the wings
/// still open to the left of the tip; callers decide whether such shapes
/// are worth drawing.
pub fn arrowhead_wings(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    length: f64,
    angle_degrees: f64,
) -> [(f64, f64); 2] {
    let angle = ((y2 - y1) as f64).atan2((x2 - x1) as f64);
    let spread = angle_degrees.to_radians();

    let left = (
        x2 as f64 - length * (angle - spread).cos(),
        y2 as f64 - length * (angle - spread).sin(),
    );
    let right = (
        x2 as f64 - length * (angle + spread).cos(),
        y2 as f64 - length * (angle + spread).sin(),
    );

    [left, right]
}

// ============================================================================
// Eraser Proximity
// ============================================================================

/// Chebyshev distance between two points: `max(|dx|, |dy|)`.
pub fn chebyshev_distance(x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
    (x1 - x2).abs().max((y1 - y2).abs())
}

/// Endpoint proximity test used by the eraser.
///
/// Returns true iff the Chebyshev distance from (x, y) to the shape's start
/// OR end point is strictly less than `tolerance`.
///
/// This is deliberately endpoint-only: a point near the middle of a long
/// shape is not near the shape. Erase clicks along a shape's body leave it
/// untouched.
pub fn is_near(shape: &Shape, x: i32, y: i32, tolerance: i32) -> bool {
    let (sx, sy) = shape.start();
    let (ex, ey) = shape.end();

    chebyshev_distance(x, y, sx, sy) < tolerance || chebyshev_distance(x, y, ex, ey) < tolerance
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};

    #[test]
    fn arrowhead_wings_open_back_along_a_horizontal_shaft() {
        let [(lx, ly), (rx, ry)] = arrowhead_wings(0, 0, 100, 0, 10.0, 30.0);

        let expected_x = 100.0 - 10.0 * 30.0_f64.to_radians().cos();
        let expected_y = 10.0 * 30.0_f64.to_radians().sin();

        assert!((lx - expected_x).abs() < 1e-9);
        assert!((ly + expected_y).abs() < 1e-9);
        assert!((rx - expected_x).abs() < 1e-9);
        assert!((ry - expected_y).abs() < 1e-9);
    }

    #[test]
    fn arrowhead_wings_sit_exactly_length_from_the_tip() {
        let [(lx, ly), (rx, ry)] = arrowhead_wings(13, -7, 42, 91, 10.0, 30.0);

        let left_dist = ((42.0 - lx).powi(2) + (91.0 - ly).powi(2)).sqrt();
        let right_dist = ((42.0 - rx).powi(2) + (91.0 - ry).powi(2)).sqrt();

        assert!((left_dist - 10.0).abs() < 1e-9);
        assert!((right_dist - 10.0).abs() < 1e-9);
    }

    #[test]
    fn arrowhead_wings_use_the_atan2_convention_for_degenerate_shafts() {
        // start == end: angle falls back to atan2(0, 0) == 0
        let [(lx, ly), (rx, ry)] = arrowhead_wings(5, 5, 5, 5, 10.0, 30.0);

        let spread = 30.0_f64.to_radians();
        assert!((lx - (5.0 - 10.0 * spread.cos())).abs() < 1e-9);
        assert!((ly - (5.0 + 10.0 * spread.sin())).abs() < 1e-9);
        assert!((rx - (5.0 - 10.0 * spread.cos())).abs() < 1e-9);
        assert!((ry - (5.0 - 10.0 * spread.sin())).abs() < 1e-9);
    }

    #[test]
    fn chebyshev_distance_takes_the_larger_axis_delta() {
        assert_eq!(chebyshev_distance(0, 0, 3, 9), 9);
        assert_eq!(chebyshev_distance(10, 10, 2, 14), 8);
        assert_eq!(chebyshev_distance(-5, 0, 5, 0), 10);
        assert_eq!(chebyshev_distance(7, 7, 7, 7), 0);
    }

    #[test]
    fn is_near_matches_either_endpoint_symmetrically() {
        let shape = Shape::Line {
            x1: 10,
            y1: 10,
            x2: 100,
            y2: 10,
        };

        assert!(is_near(&shape, 10, 10, 10));
        assert!(is_near(&shape, 100, 10, 10));
        assert!(is_near(&shape, 105, 14, 10));
        // Strict inequality: exactly `tolerance` away is not near
        assert!(!is_near(&shape, 20, 10, 10));
    }

    #[test]
    fn is_near_never_matches_the_midpoint_of_a_long_shape() {
        let shape = Shape::Arrow {
            x1: 0,
            y1: 0,
            x2: 100,
            y2: 0,
        };

        assert!(!is_near(&shape, 50, 0, 10));
    }

    #[test]
    fn name_to_color_maps_known_names_case_insensitively() {
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert_eq!(name_to_color("BLACK").unwrap(), BLACK);
        assert!(name_to_color("chartreuse").is_none());
    }
}
