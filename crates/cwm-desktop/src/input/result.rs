//! Input result type

use serde::Serialize;
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// State changed; the surface needs a full repaint
    Handled,
    /// Nothing visible changed
    Unhandled,
    /// A button click closed a window
    Closed {
        /// The removed window
        window_id: WindowId,
    },
}

impl InputResult {
    /// Check if the surface must be repainted
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Closed { .. })
    }

    /// Check if a window was closed
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, InputResult::Closed { .. })
    }
}
