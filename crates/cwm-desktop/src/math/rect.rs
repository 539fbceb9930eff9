//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is strictly inside the rectangle.
    ///
    /// All four edges are excluded: a point on the boundary is outside.
    /// Window and button hit testing both rely on this rule.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.x && p.y > self.y && p.x < self.right() && p.y < self.bottom()
    }

    /// Inset the rectangle by half of `margin` on the top-left corner and
    /// shrink its size by `shrink`
    #[inline]
    pub fn inset_by(&self, margin: f32, shrink: f32) -> Rect {
        let half = margin * 0.5;
        Rect::from_pos_size(self.position() + Vec2::new(half, half), self.size().inset(shrink))
    }
}
