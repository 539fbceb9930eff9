//! Input router state machine

use crate::math::Vec2;
use crate::window::WindowId;
use super::DragState;

/// Input router managing the pointer session
///
/// Idle (no state) → Armed on press → Dragging on move → Idle on release
/// or when the pointer leaves the surface.
pub struct InputRouter {
    /// Current drag state (None = idle)
    drag: Option<DragState>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if the pointer is pressed
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.drag.is_some()
    }

    /// Check if a window is being moved
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.as_ref().is_some_and(DragState::is_dragging)
    }

    /// Window targeted by the current session
    #[inline]
    pub fn target(&self) -> Option<WindowId> {
        self.drag.as_ref().and_then(DragState::window_id)
    }

    /// Press: arm a session, optionally over a window with a known offset
    pub fn arm(&mut self, window_id: Option<WindowId>, offset: Option<Vec2>) {
        self.drag = Some(DragState::Armed { window_id, offset });
    }

    /// Move: switch to dragging `window_id` with `offset` cached
    pub fn drag(&mut self, window_id: WindowId, offset: Vec2) {
        self.drag = Some(DragState::Dragging { window_id, offset });
    }

    /// End current session
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Drop the session without finalizing (alias for end_drag)
    #[inline]
    pub fn cancel(&mut self) {
        self.end_drag();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_idle_by_default() {
        let router = InputRouter::new();
        assert!(!router.is_pressed());
        assert!(!router.is_dragging());
        assert!(router.target().is_none());
    }

    #[test]
    fn test_router_arm_then_drag_then_end() {
        let mut router = InputRouter::new();

        router.arm(Some(1), Some(Vec2::new(10.0, 10.0)));
        assert!(router.is_pressed());
        assert!(!router.is_dragging());
        assert_eq!(router.target(), Some(1));

        router.drag(1, Vec2::new(10.0, 10.0));
        assert!(router.is_dragging());

        router.end_drag();
        assert!(!router.is_pressed());
    }

    #[test]
    fn test_router_arm_over_nothing() {
        let mut router = InputRouter::new();
        router.arm(None, None);

        assert!(router.is_pressed());
        assert!(router.target().is_none());
        assert!(matches!(router.drag_state(), Some(DragState::Armed { window_id: None, .. })));

        router.cancel();
        assert!(!router.is_pressed());
    }
}
