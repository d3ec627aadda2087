use crate::draw::{Shape, render};
use crate::input::mode::Mode;
use crate::surface::Surface;

use super::{DrawingState, InputState};

impl InputState {
    /// Returns the shape currently being dragged out, for live preview.
    ///
    /// # Arguments
    /// * `current_x` - Current pointer X coordinate
    /// * `current_y` - Current pointer Y coordinate
    ///
    /// # Returns
    /// - `Some(Shape)` while actively drawing (end point at the cursor)
    /// - `None` when idle
    pub fn provisional_shape(&self, current_x: i32, current_y: i32) -> Option<Shape> {
        if let DrawingState::Drawing {
            mode,
            start_x,
            start_y,
        } = self.state
        {
            let shape = match mode {
                Mode::Arrow => Shape::Arrow {
                    x1: start_x,
                    y1: start_y,
                    x2: current_x,
                    y2: current_y,
                },
                _ => Shape::Line {
                    x1: start_x,
                    y1: start_y,
                    x2: current_x,
                    y2: current_y,
                },
            };
            Some(shape)
        } else {
            None
        }
    }

    /// Renders the pending shape directly to the surface.
    ///
    /// Preview only: nothing is committed to the store. Call after a full
    /// redraw so the preview sits on top of the committed shapes.
    ///
    /// # Returns
    /// `true` if a pending shape was rendered, `false` otherwise
    pub fn render_provisional_shape(
        &self,
        surface: &mut dyn Surface,
        current_x: i32,
        current_y: i32,
    ) -> bool {
        if let Some(shape) = self.provisional_shape(current_x, current_y) {
            render::render_shape(surface, &shape, &self.style);
            true
        } else {
            false
        }
    }
}
