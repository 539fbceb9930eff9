//! Repaint and window inspection

use serde::Serialize;
use crate::color::Color;
use crate::math::Rect;
use crate::render::Surface;
use crate::window::WindowId;
use super::DesktopEngine;

/// Snapshot of one registered window for inspection
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    pub rect: Rect,
    pub background: Color,
    pub border: Option<Color>,
    pub button_count: usize,
}

impl DesktopEngine {
    /// Repaint the whole scene onto `surface`
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.windows.call_update(surface);
    }

    /// Registered windows in registration (paint) order
    pub fn window_views(&self) -> Vec<WindowView> {
        self.windows
            .entries()
            .iter()
            .map(|entry| WindowView {
                id: entry.id,
                title: entry.window.title.clone(),
                rect: entry.window.rect(),
                background: entry.window.background.clone(),
                border: entry.window.border.clone(),
                button_count: entry.window.buttons().len(),
            })
            .collect()
    }

    /// Registered windows as JSON
    pub fn windows_json(&self) -> String {
        serde_json::to_string(&self.window_views()).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn test_render_paints_default_scene() {
        let engine = DesktopEngine::new();
        let mut surface = RecordingSurface::new(640.0, 480.0);

        engine.render(&mut surface);

        let commands = surface.commands();
        assert_eq!(commands[0], DrawCommand::Clear { rect: Rect::new(0.0, 0.0, 640.0, 480.0) });
        assert!(commands.iter().any(|c| matches!(c, DrawCommand::DrawImage { .. })));
    }

    #[test]
    fn test_window_views() {
        let mut engine = DesktopEngine::new();
        engine.move_window(0, 20.0, 30.0);

        let views = engine.window_views();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, 0);
        assert_eq!(views[0].title, "Frame");
        assert_eq!(views[0].rect, Rect::new(20.0, 30.0, 300.0, 300.0));
        assert_eq!(views[0].border, Some(Color::from("#fff")));
        assert_eq!(views[0].button_count, 1);
    }

    #[test]
    fn test_windows_json() {
        let engine = DesktopEngine::new();
        let value: serde_json::Value = serde_json::from_str(&engine.windows_json()).unwrap();

        assert_eq!(value[0]["id"], 0);
        assert_eq!(value[0]["title"], "Frame");
        assert_eq!(value[0]["background"], "#111");
        assert_eq!(value[0]["rect"]["width"], 300.0);
    }
}
