//! Full repaint of the registry onto a surface

use crate::math::Rect;
use crate::window::{Button, Window, WindowRegistry};
use super::Surface;

impl WindowRegistry {
    /// Clear the whole surface and repaint every window, then its buttons,
    /// in registration order
    pub fn call_update<S: Surface + ?Sized>(&self, surface: &mut S) {
        let size = surface.size();
        surface.clear_rect(Rect::new(0.0, 0.0, size.width, size.height));

        for entry in self.entries() {
            paint_window(surface, &entry.window);
        }
    }
}

fn paint_window<S: Surface + ?Sized>(surface: &mut S, window: &Window) {
    let rect = window.rect();
    surface.fill_rect(rect, &window.background);
    if let Some(border) = &window.border {
        surface.stroke_rect(rect, border);
    }

    if window.buttons().is_empty() {
        return;
    }
    for button in window.buttons() {
        paint_button(surface, button, rect);
    }
}

fn paint_button<S: Surface + ?Sized>(surface: &mut S, button: &Button, window: Rect) {
    let at = button.paint_rect(window);
    surface.fill_rect(at, &button.color);
    surface.stroke_rect(at, &button.border);

    if let Some(icon) = button.icon {
        surface.draw_image(icon, button.icon_rect(at), button.icon_options.color.as_ref());
    }
    if let Some(points) = &button.path {
        surface.stroke_path(points, &button.border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::math::Vec2;
    use crate::render::{DrawCommand, ImageCatalog, RecordingSurface};
    use crate::window::{Alignment, IconOptions};

    fn frame() -> Window {
        let mut w = Window::new("Frame", 300.0, 300.0);
        w.set_position(100.0, 100.0)
            .set_background_color("#111")
            .set_border_color("#fff");
        w
    }

    #[test]
    fn test_call_update_clears_then_paints_in_order() {
        let mut registry = WindowRegistry::new();
        registry.append(frame());
        let mut second = Window::new("Second", 50.0, 50.0);
        second.set_position(10.0, 10.0);
        registry.append(second);

        let mut surface = RecordingSurface::new(800.0, 600.0);
        registry.call_update(&mut surface);
        let commands = surface.commands();

        assert_eq!(
            commands[0],
            DrawCommand::Clear { rect: Rect::new(0.0, 0.0, 800.0, 600.0) }
        );
        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                rect: Rect::new(100.0, 100.0, 300.0, 300.0),
                color: Color::from("#111"),
            }
        );
        assert!(matches!(commands[2], DrawCommand::StrokeRect { .. }));
        // Second window has no border
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[3], DrawCommand::FillRect { .. }));
    }

    #[test]
    fn test_call_update_places_right_aligned_button_with_icon() {
        let mut images = ImageCatalog::new();
        let cross = images.register("./cross.svg");
        let mut w = frame();
        w.add_button(
            Button::new(0.0, 0.0, 20.0, 20.0)
                .with_color("#ccc")
                .with_border("#fff")
                .with_align(Alignment::Right)
                .with_icon(cross, IconOptions { color: Some("#fff".into()), margin: Some(6.0) }),
        );
        let mut registry = WindowRegistry::new();
        registry.append(w);

        let mut surface = RecordingSurface::new(800.0, 600.0);
        registry.call_update(&mut surface);
        let commands = surface.commands();

        let button_rect = Rect::new(380.0, 100.0, 20.0, 20.0);
        assert_eq!(
            commands[3],
            DrawCommand::FillRect { rect: button_rect, color: Color::from("#ccc") }
        );
        assert_eq!(
            commands[4],
            DrawCommand::StrokeRect { rect: button_rect, color: Color::from("#fff") }
        );
        assert_eq!(
            commands[5],
            DrawCommand::DrawImage {
                image: cross,
                rect: Rect::new(383.0, 103.0, 14.0, 14.0),
                tint: Some(Color::from("#fff")),
            }
        );
    }

    #[test]
    fn test_call_update_left_aligned_button_and_path() {
        let mut w = frame();
        w.add_button(
            Button::new(4.0, 10.0, 16.0, 8.0)
                .with_path(vec![Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0)]),
        );
        let mut registry = WindowRegistry::new();
        registry.append(w);

        let mut surface = RecordingSurface::new(800.0, 600.0);
        registry.call_update(&mut surface);
        let commands = surface.commands();

        // x = offset + width, y = window top - offset
        assert_eq!(
            commands[3],
            DrawCommand::FillRect { rect: Rect::new(20.0, 90.0, 16.0, 8.0), color: Color::white() }
        );
        assert!(matches!(commands.last(), Some(DrawCommand::StrokePath { .. })));
    }

    #[test]
    fn test_call_update_empty_registry_only_clears() {
        let registry = WindowRegistry::new();
        let mut surface = RecordingSurface::new(10.0, 10.0);
        registry.call_update(&mut surface);
        assert_eq!(surface.commands().len(), 1);
    }
}
