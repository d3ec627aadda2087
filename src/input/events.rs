//! Generic input event types for cross-host compatibility.

/// Mouse button identification.
///
/// Host implementations map their native pointer events to these generic
/// values; coordinates are converted to canvas-relative pixels before they
/// reach the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (cancel action)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
