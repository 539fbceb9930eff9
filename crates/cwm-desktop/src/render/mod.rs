//! Drawing surface abstraction and full-surface repaint
//!
//! The registry never draws incrementally: every state change clears the
//! surface and repaints all windows and buttons in registration order.

mod surface;
mod image;
mod paint;

pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use image::{ImageCatalog, ImageId};
