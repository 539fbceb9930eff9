//! WASM exports for the canvas window manager
//!
//! This module provides a `Surface` over a 2D canvas context and a
//! wasm-bindgen controller wrapping the DesktopEngine.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::color::Color;
use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::input::InputResult;
use crate::math::{Rect, Size, Vec2};
use crate::render::{ImageCatalog, ImageId, Surface};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Surface drawing onto a `<canvas>` 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Size,
    images: Vec<HtmlImageElement>,
    on_load: Option<js_sys::Function>,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            size: Size::new(canvas.width() as f32, canvas.height() as f32),
            images: Vec::new(),
            on_load: None,
        })
    }

    /// Start loading every image of the catalog, replacing any loaded before
    pub fn load_images(&mut self, catalog: &ImageCatalog) -> Result<(), JsValue> {
        self.images.clear();
        for (_, path) in catalog.iter() {
            let image = HtmlImageElement::new()?;
            image.set_onload(self.on_load.as_ref());
            image.set_src(path);
            self.images.push(image);
        }
        Ok(())
    }

    /// Call `callback` whenever an icon finishes loading
    pub fn set_on_load(&mut self, callback: Option<js_sys::Function>) {
        for image in &self.images {
            image.set_onload(callback.as_ref());
        }
        self.on_load = callback;
    }

    /// Track a new canvas size
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.fill_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    }

    fn stroke_rect(&mut self, rect: Rect, color: &Color) {
        self.ctx.set_stroke_style_str(color.as_str());
        self.ctx.stroke_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    }

    fn draw_image(&mut self, image: ImageId, rect: Rect, tint: Option<&Color>) {
        let Some(element) = self.images.get(image.index()) else {
            return;
        };
        if !element.complete() {
            return;
        }
        if let Some(tint) = tint {
            self.ctx.set_fill_style_str(tint.as_str());
            self.ctx.set_stroke_style_str(tint.as_str());
        }
        // Broken images throw; the frame is still usable without the icon
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            element,
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn stroke_path(&mut self, points: &[Vec2], color: &Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_stroke_style_str(color.as_str());
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for point in rest {
            self.ctx.line_to(point.x as f64, point.y as f64);
        }
        self.ctx.stroke();
    }
}

/// Desktop controller for WASM - wraps DesktopEngine and its canvas
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller drawing onto `canvas`.
    ///
    /// `config_json` replaces the default startup scene when given.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<DesktopController, JsValue> {
        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => DesktopConfig::default(),
        };
        let engine = DesktopEngine::with_config(config);
        let mut surface = CanvasSurface::new(&canvas)?;
        surface.load_images(&engine.images)?;

        log(&format!("[cwm] Desktop ready with {} window(s)", engine.windows.len()));
        let mut controller = Self { engine, surface };
        controller.render();
        Ok(controller)
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_down(x, y);
        self.finish(result)
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_move(x, y);
        self.finish(result)
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_up(x, y);
        self.finish(result)
    }

    /// Handle click event
    #[wasm_bindgen]
    pub fn click(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_click(x, y);
        if let InputResult::Closed { window_id } = result {
            log(&format!("[cwm] Closed window {}", window_id));
        }
        self.finish(result)
    }

    /// Handle the pointer leaving the page
    #[wasm_bindgen]
    pub fn pointer_leave(&mut self) -> String {
        let result = self.engine.handle_pointer_leave();
        self.finish(result)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Repaint the whole canvas
    #[wasm_bindgen]
    pub fn render(&mut self) {
        self.engine.render(&mut self.surface);
    }

    /// Viewport resize: rebuild the startup scene at the new size
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.engine.handle_resize();
        self.surface.set_size(width, height);
        self.surface.load_images(&self.engine.images)?;
        log(&format!("[cwm] Resized to {}x{}, scene rebuilt", width, height));
        self.render();
        Ok(())
    }

    /// Call `callback` whenever an icon finishes loading, so the frontend
    /// can repaint with it
    #[wasm_bindgen]
    pub fn set_image_load_callback(&mut self, callback: js_sys::Function) {
        self.surface.set_on_load(Some(callback));
    }

    /// Get registered windows as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        self.engine.windows_json()
    }
}

impl DesktopController {
    fn finish(&mut self, result: InputResult) -> String {
        if result.needs_redraw() {
            self.render();
        }
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }
}
