//! Pointer input for the windowed harness.
//!
//! Translates raw winit window events into the two signals the session
//! consumes: pointer movement in normalized device coordinates, and the
//! discrete mode-toggle click.
//!
//! # Usage
//!
//! ```ignore
//! match tracker.handle_event(&event) {
//!     Some(PointerAction::Moved(ndc)) => { session.pointer_moved(ndc, now); }
//!     Some(PointerAction::Toggle) => { session.toggle_mode(); }
//!     None => {}
//! }
//! ```

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// A pointer event relevant to the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerAction {
    /// The pointer moved; payload is its position in NDC.
    Moved(Vec2),
    /// Left button went down: toggle the interaction mode.
    Toggle,
}

/// Tracks pointer position and converts it to NDC.
#[derive(Debug)]
pub struct PointerTracker {
    ndc: Option<Vec2>,
    window_size: (u32, u32),
}

impl PointerTracker {
    /// Create a tracker for a window of the given size in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            ndc: None,
            window_size: (width, height),
        }
    }

    /// Update the window size after a resize.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Last known pointer position in NDC (-1 to 1, y up).
    pub fn ndc(&self) -> Option<Vec2> {
        self.ndc
    }

    /// Record a pointer position in device pixels.
    ///
    /// Returns the move action, or `None` while the window has no area
    /// (minimized).
    pub fn pointer_at(&mut self, x: f32, y: f32) -> Option<PointerAction> {
        let (w, h) = self.window_size;
        if w == 0 || h == 0 {
            return None;
        }
        let ndc = Vec2::new(
            (x / w as f32) * 2.0 - 1.0,
            1.0 - (y / h as f32) * 2.0, // y flipped
        );
        self.ndc = Some(ndc);
        Some(PointerAction::Moved(ndc))
    }

    /// Process a winit window event. Returns the action to forward to the
    /// session, if any.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerAction> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer_at(position.x as f32, position.y as f32)
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => Some(PointerAction::Toggle),

            _ => None,
        }
    }
}
