//! Core geometry types
//!
//! Pixel-space positions, sizes and rectangles on the drawing surface.

mod vec2;
mod rect;
mod size;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
