//! Shape rendering over the drawing surface.

use super::frame::Frame;
use super::icon::Icon;
use super::shape::Shape;
use crate::surface::{StrokeStyle, Surface};
use crate::util;

/// Render-time appearance shared by every shape.
///
/// Shapes carry no per-shape style: the whole drawing strokes with one
/// color, one thickness, and one arrowhead geometry, mirroring the ambient
/// state of a canvas context. Values come from [`crate::config::Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Stroke color and width for every segment
    pub stroke: StrokeStyle,
    /// Arrowhead wing length in pixels
    pub arrow_length: f64,
    /// Arrowhead wing angle in degrees
    pub arrow_angle: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle {
                color: super::color::BLACK,
                thickness: 2.0,
            },
            arrow_length: 10.0,
            arrow_angle: 30.0,
        }
    }
}

/// Clears the surface and redraws every committed shape in store order.
///
/// Idempotent: calling twice with the same frame produces the same visible
/// result. O(n) in shape count; invoked on every pointer-move during an
/// active draw and on every erase. There is no dirty-region tracking - a
/// known scaling limit for large shape counts.
pub fn redraw(surface: &mut dyn Surface, frame: &Frame, style: &RenderStyle) {
    surface.clear();
    render_shapes(surface, frame.shapes(), style);
}

/// Renders all shapes in a slice, in order (first shape = bottom layer).
pub fn render_shapes(surface: &mut dyn Surface, shapes: &[Shape], style: &RenderStyle) {
    for shape in shapes {
        render_shape(surface, shape, style);
    }
}

/// Renders a single shape.
///
/// Lines stroke one segment; arrows stroke the shaft plus the two arrowhead
/// wing segments computed by [`util::arrowhead_wings`].
pub fn render_shape(surface: &mut dyn Surface, shape: &Shape, style: &RenderStyle) {
    match *shape {
        Shape::Line { x1, y1, x2, y2 } => {
            render_segment(surface, x1, y1, x2, y2, style);
        }
        Shape::Arrow { x1, y1, x2, y2 } => {
            render_segment(surface, x1, y1, x2, y2, style);

            let [(lx, ly), (rx, ry)] =
                util::arrowhead_wings(x1, y1, x2, y2, style.arrow_length, style.arrow_angle);
            surface.draw_segment(x2 as f64, y2 as f64, lx, ly, &style.stroke);
            surface.draw_segment(x2 as f64, y2 as f64, rx, ry, &style.stroke);
        }
    }
}

fn render_segment(surface: &mut dyn Surface, x1: i32, y1: i32, x2: i32, y2: i32, style: &RenderStyle) {
    surface.draw_segment(x1 as f64, y1 as f64, x2 as f64, y2 as f64, &style.stroke);
}

/// Draws `icon` scaled into a `size` x `size` box with top-left at (x, y).
///
/// The stamp bypasses the shape store and the clear/redraw cycle entirely:
/// the next [`redraw`] call wipes it, and stamped icons are not erasable.
pub fn stamp_icon(surface: &mut dyn Surface, icon: &Icon, x: i32, y: i32, size: u32) {
    surface.draw_image(icon, x, y, size, size);
}
