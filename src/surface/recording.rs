//! Call-recording surface for headless hosts and tests.

use super::{StrokeStyle, Surface};
use crate::draw::Icon;

/// One recorded drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// The surface was cleared
    Clear,
    /// A segment was stroked
    Segment {
        /// Start X
        x1: f64,
        /// Start Y
        y1: f64,
        /// End X
        x2: f64,
        /// End Y
        y2: f64,
        /// Stroke parameters used
        style: StrokeStyle,
    },
    /// An image was blitted
    Image {
        /// Top-left X of the destination box
        x: i32,
        /// Top-left Y of the destination box
        y: i32,
        /// Destination box width
        width: u32,
        /// Destination box height
        height: u32,
    },
}

/// A [`Surface`] that records every call instead of rasterizing.
///
/// Useful for hosts without a pixel target and for asserting exactly what
/// the renderer emitted (e.g. one segment per line, three per arrow).
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded operations, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Operations recorded after the most recent clear (or all of them if
    /// the surface was never cleared).
    pub fn ops_since_clear(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.ops[start..]
    }

    /// Number of segment draws since the most recent clear.
    pub fn segments_since_clear(&self) -> usize {
        self.ops_since_clear()
            .iter()
            .filter(|op| matches!(op, DrawOp::Segment { .. }))
            .count()
    }

    /// Forgets all recorded operations.
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn draw_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &StrokeStyle) {
        self.ops.push(DrawOp::Segment {
            x1,
            y1,
            x2,
            y2,
            style: *style,
        });
    }

    fn draw_image(&mut self, _icon: &Icon, x: i32, y: i32, width: u32, height: u32) {
        self.ops.push(DrawOp::Image {
            x,
            y,
            width,
            height,
        });
    }
}
