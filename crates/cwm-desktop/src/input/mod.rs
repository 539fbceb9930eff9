//! Input routing module
//!
//! Provides the pointer event type and the drag state machine.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::InputResult;

use serde::{Deserialize, Serialize};
use crate::math::Vec2;

/// Discrete pointer event in surface coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Click { x: f32, y: f32 },
    /// The pointer left the surface
    Leave,
}

impl PointerEvent {
    /// Cursor position carried by the event
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            PointerEvent::Down { x, y }
            | PointerEvent::Move { x, y }
            | PointerEvent::Up { x, y }
            | PointerEvent::Click { x, y } => Some(Vec2::new(x, y)),
            PointerEvent::Leave => None,
        }
    }
}
