//! Browser entry point for the canvas window manager
//!
//! Looks up the page's `#canvas`, sizes its drawing buffer to its layout box,
//! creates the desktop controller and forwards mouse events to it.

mod events;
mod util;

use std::cell::RefCell;
use std::rc::Rc;

use cwm_desktop::DesktopController;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::util::{log, missing};

/// Id of the canvas element the desktop draws on
pub const CANVAS_ID: &str = "canvas";

/// Module entry point, run once when the WASM module is instantiated
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| missing("window"))?;
    let document = window.document().ok_or_else(|| missing("document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| missing("#canvas"))?
        .dyn_into::<HtmlCanvasElement>()?;

    // Drawing buffer matches the CSS box so client coordinates map 1:1
    canvas.set_width(canvas.client_width().max(0) as u32);
    canvas.set_height(canvas.client_height().max(0) as u32);
    log(&format!(
        "[cwm-web] Canvas {}x{}",
        canvas.width(),
        canvas.height()
    ));

    let controller = Rc::new(RefCell::new(DesktopController::new(canvas.clone(), None)?));
    events::attach(&window, &document, &canvas, &controller)?;

    log("[cwm-web] Event handlers attached");
    Ok(())
}
