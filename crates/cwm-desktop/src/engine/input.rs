//! Input handling for pointer events and drag operations

use crate::input::{InputResult, PointerEvent};
use crate::math::Vec2;
use crate::window::WindowId;
use super::DesktopEngine;

impl DesktopEngine {
    /// Dispatch a pointer event
    pub fn handle_event(&mut self, event: PointerEvent) -> InputResult {
        match event {
            PointerEvent::Down { x, y } => self.handle_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.handle_pointer_move(x, y),
            PointerEvent::Up { x, y } => self.handle_pointer_up(x, y),
            PointerEvent::Click { x, y } => self.handle_click(x, y),
            PointerEvent::Leave => self.handle_pointer_leave(),
        }
    }

    /// Handle pointer down: arm a session over the window under the cursor
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        self.windows.clear_temp();

        let pos = Vec2::new(x, y);
        match self.windows.entry_at(pos).map(|entry| (entry.id, pos - entry.window.position)) {
            Some((window_id, offset)) => self.input.arm(Some(window_id), Some(offset)),
            None => self.input.arm(None, None),
        }
        InputResult::Unhandled
    }

    /// Handle pointer move: drag the armed window
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        match self.drag_to(Vec2::new(x, y)) {
            Some((window_id, offset)) => {
                self.input.drag(window_id, offset);
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer up: final reposition, then back to idle
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> InputResult {
        let moved = self.drag_to(Vec2::new(x, y)).is_some();
        self.input.end_drag();
        self.windows.clear_temp();

        if moved {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle the pointer leaving the surface: drop the session where it is
    pub fn handle_pointer_leave(&mut self) -> InputResult {
        self.input.cancel();
        self.windows.clear_temp();
        InputResult::Unhandled
    }

    /// Handle click: run the handlers of every button under the cursor
    /// until one closes the window
    pub fn handle_click(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);
        let window_id = match self.windows.entry_at(pos) {
            Some(entry) => entry.id,
            None => return InputResult::Unhandled,
        };

        let mut hit = false;
        let mut close = false;
        self.windows.update_window(
            |entry| entry.id == window_id,
            |window| {
                let rect = window.rect();
                for button in window.buttons() {
                    if !button.hit_rect(rect).contains(pos) {
                        continue;
                    }
                    hit = true;
                    if button.click().close {
                        close = true;
                        break;
                    }
                }
                None
            },
        );

        if close {
            self.close_window(window_id);
            InputResult::Closed { window_id }
        } else if hit {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Move the armed window so its origin sits at `pos - offset`.
    ///
    /// The offset cached at press time is reused; it is computed from the
    /// window's current position if the session has none yet.
    fn drag_to(&mut self, pos: Vec2) -> Option<(WindowId, Vec2)> {
        let state = self.input.drag_state()?;
        let window_id = state.window_id()?;
        let cached = state.offset();

        let offset = match cached {
            Some(offset) => offset,
            None => pos - self.windows.get(window_id)?.position,
        };

        let target = pos - offset;
        if !self.move_window(window_id, target.x, target.y).is_ok() {
            self.input.cancel();
            return None;
        }
        Some((window_id, offset))
    }
}
