//! Drag state for pointer sessions

use crate::math::Vec2;
use crate::window::WindowId;

/// State of a pressed pointer
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Pointer pressed; nothing has moved yet
    Armed {
        /// Window under the pointer at press time (None = empty surface)
        window_id: Option<WindowId>,
        /// Offset from window origin to cursor, if already known
        offset: Option<Vec2>,
    },
    /// Moving a window
    Dragging {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to cursor
        offset: Vec2,
    },
}

impl DragState {
    /// Check if a window is being moved
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Get the target window, if any
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            DragState::Armed { window_id, .. } => *window_id,
            DragState::Dragging { window_id, .. } => Some(*window_id),
        }
    }

    /// Get the cached pointer offset, if any
    pub fn offset(&self) -> Option<Vec2> {
        match self {
            DragState::Armed { offset, .. } => *offset,
            DragState::Dragging { offset, .. } => Some(*offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armed_over_empty_surface() {
        let state = DragState::Armed { window_id: None, offset: None };

        assert!(!state.is_dragging());
        assert!(state.window_id().is_none());
        assert!(state.offset().is_none());
    }

    #[test]
    fn test_armed_over_window() {
        let state = DragState::Armed {
            window_id: Some(3),
            offset: Some(Vec2::new(10.0, 20.0)),
        };

        assert_eq!(state.window_id(), Some(3));
        assert_eq!(state.offset(), Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn test_dragging_state() {
        let state = DragState::Dragging {
            window_id: 42,
            offset: Vec2::new(15.5, 25.5),
        };

        assert!(state.is_dragging());
        assert_eq!(state.window_id(), Some(42));
        if let Some(offset) = state.offset() {
            assert!((offset.x - 15.5).abs() < 0.001);
            assert!((offset.y - 25.5).abs() < 0.001);
        } else {
            panic!("Expected offset");
        }
    }
}
