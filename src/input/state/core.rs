//! Drawing state machine and input state management.

use crate::config::Config;
use crate::draw::{Frame, Icon, RenderStyle, render};
use crate::input::mode::Mode;
use crate::surface::Surface;
use crate::util;

/// Current drawing state machine.
///
/// Tracks whether the user is idle or dragging out a pending shape. State
/// transitions occur on pointer events; the pending shape never reaches the
/// shape store until the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Actively drawing a pending shape (pointer button held down)
    Drawing {
        /// Tool captured at press time (always `Line` or `Arrow`)
        mode: Mode,
        /// Starting X coordinate (where the pointer went down)
        start_x: i32,
        /// Starting Y coordinate (where the pointer went down)
        start_y: i32,
    },
}

/// Main input state owning the whiteboard session.
///
/// Holds the shape store, the active tool, the pending-shape state machine,
/// the optional uploaded icon, and the render parameters. All mutation
/// happens synchronously inside the event handlers on a single thread;
/// there are no module-level singletons and no locking.
pub struct InputState {
    /// Committed shapes, in draw order
    pub frame: Frame,
    /// Pending-shape state machine
    pub state: DrawingState,
    /// Stroke and arrowhead parameters applied at render time
    pub style: RenderStyle,
    /// Eraser hit-test tolerance in pixels (Chebyshev, strict `<`)
    pub eraser_tolerance: i32,
    /// Stamp box edge length in pixels
    pub stamp_size: u32,
    /// Currently selected tool
    mode: Mode,
    /// Uploaded icon, if any (stamped in move mode)
    icon: Option<Icon>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_defaults(RenderStyle::default(), Mode::default(), 10, 50)
    }
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// # Arguments
    /// * `style` - Stroke and arrowhead parameters for rendering
    /// * `mode` - Initial tool selection
    /// * `eraser_tolerance` - Chebyshev erase tolerance in pixels
    /// * `stamp_size` - Icon stamp box edge length in pixels
    pub fn with_defaults(
        style: RenderStyle,
        mode: Mode,
        eraser_tolerance: i32,
        stamp_size: u32,
    ) -> Self {
        Self {
            frame: Frame::new(),
            state: DrawingState::Idle,
            style,
            eraser_tolerance,
            stamp_size,
            mode,
            icon: None,
        }
    }

    /// Builds an InputState from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.render_style(),
            config.initial_mode(),
            config.eraser.tolerance,
            config.icon.stamp_size,
        )
    }

    /// Returns the currently selected tool.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Selects a tool.
    ///
    /// Switching tools while a pending shape is active discards it, so
    /// partial shapes never cross tool changes. No repaint is issued here:
    /// a stale preview stays visible until the next redraw.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.state != DrawingState::Idle {
            log::debug!("tool change discards the pending shape");
            self.state = DrawingState::Idle;
        }

        if self.mode != mode {
            log::info!("tool selected: {mode:?}");
            self.mode = mode;
        }
    }

    /// Installs a decoded uploaded icon and switches to move mode.
    ///
    /// Mirrors the upload flow: once the host finishes decoding the
    /// selected file, the widget is immediately ready to stamp it.
    pub fn set_icon(&mut self, icon: Icon) {
        log::info!("icon loaded ({}x{})", icon.width(), icon.height());
        self.icon = Some(icon);
        self.set_mode(Mode::Move);
    }

    /// Removes the uploaded icon; move-mode clicks become no-ops again.
    pub fn clear_icon(&mut self) {
        self.icon = None;
    }

    /// Returns the uploaded icon, if one has been installed.
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Redraws the committed picture onto `surface`.
    ///
    /// For host-initiated repaints (expose, resize). Any pending preview is
    /// repainted by the next pointer-move; any stamped icon is gone.
    pub fn render(&self, surface: &mut dyn Surface) {
        render::redraw(surface, &self.frame, &self.style);
    }

    /// Removes every shape with an endpoint near (x, y), then repaints.
    ///
    /// The repaint is unconditional - it runs even when nothing matched,
    /// which is also what wipes any stamped icon off the surface.
    pub(super) fn erase_at(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        let tolerance = self.eraser_tolerance;
        let removed = self
            .frame
            .remove_where(|shape| util::is_near(shape, x, y, tolerance));
        if removed > 0 {
            log::debug!("erased {removed} shape(s) at ({x}, {y})");
        }

        render::redraw(surface, &self.frame, &self.style);
    }
}
