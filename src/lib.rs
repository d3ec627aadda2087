//! Whiteboard widget core.
//!
//! Exposes the shape model, renderer, drawing-surface abstraction, and
//! pointer input state machine so a host shell (browser canvas glue, native
//! window, test harness) can embed the whiteboard without owning any drawing
//! logic itself. The host feeds canvas-relative pointer events and tool
//! selections into [`input::InputState`]; the widget draws through whatever
//! [`surface::Surface`] the host provides.

pub mod config;
pub mod draw;
pub mod input;
pub mod surface;
pub mod util;

pub use config::Config;
