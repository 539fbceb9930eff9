//! Drawing surface trait and a recording implementation

use serde::Serialize;
use crate::color::Color;
use crate::math::{Rect, Size, Vec2};
use super::ImageId;

/// 2D drawing primitives in absolute pixel coordinates
pub trait Surface {
    /// Size of the drawable area
    fn size(&self) -> Size;

    /// Clear a rectangle to transparent
    fn clear_rect(&mut self, rect: Rect);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, color: &Color);

    /// Outline a rectangle
    fn stroke_rect(&mut self, rect: Rect, color: &Color);

    /// Draw an image scaled into `rect`.
    ///
    /// Drawing an image that has not finished loading is a no-op.
    fn draw_image(&mut self, image: ImageId, rect: Rect, tint: Option<&Color>);

    /// Stroke an open polyline
    fn stroke_path(&mut self, points: &[Vec2], color: &Color);
}

/// A recorded drawing primitive
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear { rect: Rect },
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color },
    DrawImage { image: ImageId, rect: Rect, tint: Option<Color> },
    StrokePath { points: Vec<Vec2>, color: Color },
}

/// Surface that records every primitive instead of drawing it
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create a recording surface of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Commands recorded so far
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the log empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded commands as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.commands).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear { rect });
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.commands.push(DrawCommand::FillRect { rect, color: color.clone() });
    }

    fn stroke_rect(&mut self, rect: Rect, color: &Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, color: color.clone() });
    }

    fn draw_image(&mut self, image: ImageId, rect: Rect, tint: Option<&Color>) {
        self.commands.push(DrawCommand::DrawImage {
            image,
            rect,
            tint: tint.cloned(),
        });
    }

    fn stroke_path(&mut self, points: &[Vec2], color: &Color) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            color: color.clone(),
        });
    }
}
