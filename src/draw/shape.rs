//! Shape definitions for the whiteboard canvas.

/// A committed drawing element on the whiteboard.
///
/// Both variants are straight segments between two endpoints in
/// canvas-relative pixel coordinates; an arrow additionally grows a
/// two-segment head at its end point when rendered. Shapes carry no
/// per-shape style: stroke appearance is a render-time parameter.
///
/// A shape is immutable once appended to a [`super::Frame`] - the only edit
/// is removal by the eraser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Straight line between two points
    Line {
        /// Starting X coordinate
        x1: i32,
        /// Starting Y coordinate
        y1: i32,
        /// Ending X coordinate
        x2: i32,
        /// Ending Y coordinate
        y2: i32,
    },
    /// Straight line with an arrowhead at the end point
    Arrow {
        /// Starting X coordinate (arrow tail)
        x1: i32,
        /// Starting Y coordinate (arrow tail)
        y1: i32,
        /// Ending X coordinate (arrowhead location)
        x2: i32,
        /// Ending Y coordinate (arrowhead location)
        y2: i32,
    },
}

impl Shape {
    /// Returns the start point of this shape.
    pub fn start(&self) -> (i32, i32) {
        match *self {
            Shape::Line { x1, y1, .. } | Shape::Arrow { x1, y1, .. } => (x1, y1),
        }
    }

    /// Returns the end point of this shape.
    pub fn end(&self) -> (i32, i32) {
        match *self {
            Shape::Line { x2, y2, .. } | Shape::Arrow { x2, y2, .. } => (x2, y2),
        }
    }
}
