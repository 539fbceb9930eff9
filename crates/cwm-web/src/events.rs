//! DOM event wiring
//!
//! Every handler borrows the shared controller for the duration of one
//! event. Handlers live as long as the page, so their closures are leaked.

use std::cell::RefCell;
use std::rc::Rc;

use cwm_desktop::DesktopController;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use crate::util::log;

type SharedController = Rc<RefCell<DesktopController>>;

/// Attach canvas, document and window handlers
pub(crate) fn attach(
    window: &Window,
    document: &Document,
    canvas: &HtmlCanvasElement,
    controller: &SharedController,
) -> Result<(), JsValue> {
    listen(canvas, "mousedown", pointer(controller, |c, x, y| c.pointer_down(x, y)))?;
    listen(canvas, "mousemove", pointer(controller, |c, x, y| c.pointer_move(x, y)))?;
    listen(canvas, "mouseup", pointer(controller, |c, x, y| c.pointer_up(x, y)))?;
    listen(canvas, "click", pointer(controller, |c, x, y| c.click(x, y)))?;

    // Leaving any element ends the press
    listen(document, "mouseout", page(controller, |c| {
        c.pointer_leave();
    }))?;

    // Icons finishing after the first paint need another frame
    listen(window, "load", page(controller, DesktopController::render))?;
    let repaint = page(controller, DesktopController::render);
    if let Ok(mut c) = controller.try_borrow_mut() {
        c.set_image_load_callback(repaint.as_ref().unchecked_ref::<js_sys::Function>().clone());
    }
    repaint.forget();

    // The scene is rebuilt from scratch at the new size
    let resize = Closure::wrap(Box::new(move |_event: Event| {
        let reload = web_sys::window().map(|w| w.location().reload());
        if let Some(Err(e)) = reload {
            log(&format!("[cwm-web] Reload failed: {:?}", e));
        }
    }) as Box<dyn FnMut(Event)>);
    listen(window, "resize", resize)?;

    Ok(())
}

/// Handler reading the pointer position in client coordinates
fn pointer<F>(controller: &SharedController, handle: F) -> Closure<dyn FnMut(MouseEvent)>
where
    F: Fn(&mut DesktopController, f32, f32) -> String + 'static,
{
    let controller = controller.clone();
    Closure::wrap(Box::new(move |event: MouseEvent| {
        let (x, y) = (event.client_x() as f32, event.client_y() as f32);
        if let Ok(mut c) = controller.try_borrow_mut() {
            handle(&mut c, x, y);
        }
    }) as Box<dyn FnMut(MouseEvent)>)
}

/// Handler that ignores the event payload
fn page<F>(controller: &SharedController, handle: F) -> Closure<dyn FnMut(Event)>
where
    F: Fn(&mut DesktopController) + 'static,
{
    let controller = controller.clone();
    Closure::wrap(Box::new(move |_event: Event| {
        if let Ok(mut c) = controller.try_borrow_mut() {
            handle(&mut c);
        }
    }) as Box<dyn FnMut(Event)>)
}

fn listen<T>(target: &EventTarget, name: &str, closure: Closure<T>) -> Result<(), JsValue>
where
    T: ?Sized + WasmClosure,
{
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
