use crate::draw::{Shape, render};
use crate::input::events::MouseButton;
use crate::input::mode::Mode;
use crate::surface::Surface;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a pointer button press.
    ///
    /// # Arguments
    /// * `surface` - Drawing surface for stamp/erase output
    /// * `button` - Which button was pressed
    /// * `x` - Pointer X coordinate (canvas-relative)
    /// * `y` - Pointer Y coordinate (canvas-relative)
    ///
    /// # Behavior
    /// - Left press in line/arrow mode while idle: begins a pending shape
    /// - Left press in move mode: stamps the uploaded icon, or silently does
    ///   nothing when no icon has been loaded yet
    /// - Left press in eraser mode: erases at the cursor
    /// - Right press: abandons any pending shape and repaints without it
    pub fn on_mouse_press(
        &mut self,
        surface: &mut dyn Surface,
        button: MouseButton,
        x: i32,
        y: i32,
    ) {
        match button {
            MouseButton::Left => match self.mode() {
                Mode::Move => {
                    if let Some(icon) = self.icon() {
                        render::stamp_icon(surface, icon, x, y, self.stamp_size);
                    } else {
                        log::debug!("move-mode press with no icon loaded; ignoring");
                    }
                }
                Mode::Line | Mode::Arrow => {
                    if self.state == DrawingState::Idle {
                        self.state = DrawingState::Drawing {
                            mode: self.mode(),
                            start_x: x,
                            start_y: y,
                        };
                    }
                }
                Mode::Eraser => self.erase_at(surface, x, y),
            },
            MouseButton::Right => {
                if self.state != DrawingState::Idle {
                    self.state = DrawingState::Idle;
                    render::redraw(surface, &self.frame, &self.style);
                }
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// While drawing, repaints the committed shapes and previews the pending
    /// one on top - nothing is committed yet. In eraser mode, motion erases
    /// without any button held (hover erase).
    pub fn on_mouse_motion(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        if matches!(self.state, DrawingState::Drawing { .. }) {
            render::redraw(surface, &self.frame, &self.style);
            self.render_provisional_shape(surface, x, y);
        } else if self.mode() == Mode::Eraser {
            self.erase_at(surface, x, y);
        }
    }

    /// Processes a pointer button release.
    ///
    /// # Behavior
    /// Releasing the left button while drawing commits the pending shape to
    /// the store, with the release position as its end point, and returns to
    /// idle. No repaint happens here: the last preview already shows the
    /// committed picture.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }

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
                    x2: x,
                    y2: y,
                },
                _ => Shape::Line {
                    x1: start_x,
                    y1: start_y,
                    x2: x,
                    y2: y,
                },
            };

            self.frame.add_shape(shape);
            self.state = DrawingState::Idle;
        }
    }
}
