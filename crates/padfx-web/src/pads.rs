use crate::constants::{PAD_ACTIVE_CLASS, PAD_SELECTOR};
use crate::dom;
use crate::frame::CanvasScene;
use glam::DVec2;
use padfx_core::constants::PAD_ACTIVE_MS;
use padfx_core::{Activation, Trigger};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type PadTrigger = Trigger<StdRng>;

/// Attach a click handler to every pad on the page. Returns how many were wired.
pub fn wire_pads(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<CanvasScene>>,
    trigger: Rc<RefCell<PadTrigger>>,
) -> usize {
    let pads = dom::query_all(document, PAD_SELECTOR);
    for pad in &pads {
        let pad_el = pad.clone();
        let canvas = canvas.clone();
        let scene = scene.clone();
        let trigger = trigger.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            flash_active_class(&pad_el);
            let mut trigger = trigger.borrow_mut();
            let activation = match pad_activation(&pad_el, &canvas, &trigger) {
                Ok(a) => a,
                Err(e) => {
                    log::error!("[pad] {}", e);
                    return;
                }
            };
            trigger.activate(&mut *scene.borrow_mut(), &activation);
        }) as Box<dyn FnMut(_)>);
        _ = pad.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    pads.len()
}

/// Identity from the pad's classes; center of its box in canvas pixels.
fn pad_activation(
    pad: &web::Element,
    canvas: &web::HtmlCanvasElement,
    trigger: &PadTrigger,
) -> Result<Activation, padfx_core::FxError> {
    let classes = pad.class_name();
    let identity = trigger
        .palette()
        .find_identity(classes.split_whitespace())
        .unwrap_or_default();

    let pad_rect = pad.get_bounding_client_rect();
    let canvas_rect = canvas.get_bounding_client_rect();
    let center = DVec2::new(
        pad_rect.left() + pad_rect.width() / 2.0,
        pad_rect.top() + pad_rect.height() / 2.0,
    );
    let origin = DVec2::new(canvas_rect.left(), canvas_rect.top());
    let scale = if canvas_rect.width() > 0.0 && canvas_rect.height() > 0.0 {
        DVec2::new(
            canvas.width() as f64 / canvas_rect.width(),
            canvas.height() as f64 / canvas_rect.height(),
        )
    } else {
        DVec2::ONE
    };
    let p = (center - origin) * scale;
    Activation::new(identity, p.x, p.y)
}

/// Mark the pad active, clearing the mark after `PAD_ACTIVE_MS`.
fn flash_active_class(pad: &web::Element) {
    _ = pad.class_list().add_1(PAD_ACTIVE_CLASS);
    let Some(window) = web::window() else {
        return;
    };
    let pad = pad.clone();
    let clear = Closure::once_into_js(move || {
        _ = pad.class_list().remove_1(PAD_ACTIVE_CLASS);
    });
    let callback: &js_sys::Function = clear.unchecked_ref();
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback, PAD_ACTIVE_MS)
        .is_err()
    {
        log::warn!("[pad] could not schedule active-state reset");
    }
}
