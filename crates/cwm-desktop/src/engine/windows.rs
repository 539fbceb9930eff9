//! Window lifecycle and operations

use crate::window::{Status, Window, WindowId};
use super::DesktopEngine;

impl DesktopEngine {
    /// Register a window
    pub fn add_window(&mut self, window: Window) -> WindowId {
        self.windows.append(window)
    }

    /// Close a window
    pub fn close_window(&mut self, id: WindowId) -> Status {
        if self.input.target() == Some(id) {
            self.input.cancel();
        }
        self.windows.remove_window(|entry| entry.id == id)
    }

    /// Move a window so its top-left corner is at `(x, y)`
    pub fn move_window(&mut self, id: WindowId, x: f32, y: f32) -> Status {
        self.windows.update_window(
            |entry| entry.id == id,
            |window| {
                let mut moved = window.clone();
                moved.set_position(x, y);
                Some(moved)
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    #[test]
    fn test_add_and_move_window() {
        let mut engine = DesktopEngine::new();
        let id = engine.add_window(Window::new("Second", 50.0, 50.0));
        assert_eq!(id, 1);

        assert_eq!(engine.move_window(id, 10.0, 20.0), Status::Ok);
        assert_eq!(engine.windows.get(id).unwrap().position, Vec2::new(10.0, 20.0));
        assert_eq!(engine.move_window(99, 0.0, 0.0), Status::NotFound);
    }

    #[test]
    fn test_close_window_cancels_drag_on_it() {
        let mut engine = DesktopEngine::new();
        engine.handle_pointer_down(200.0, 200.0);
        assert_eq!(engine.input.target(), Some(0));

        assert_eq!(engine.close_window(0), Status::Ok);
        assert!(!engine.input.is_pressed());
        assert_eq!(engine.close_window(0), Status::NotFound);
    }
}
