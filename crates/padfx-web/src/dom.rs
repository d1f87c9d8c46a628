use crate::constants::PALETTE_SCRIPT_ID;
use padfx_core::Palette;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Size the canvas backing store to the window's inner size.
pub fn fit_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((width as u32).max(1));
        canvas.set_height((height as u32).max(1));
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    fit_canvas_to_window(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        fit_canvas_to_window(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Palette from the page's JSON script block, or the built-in one.
pub fn load_palette(document: &web::Document) -> Palette {
    let Some(text) = document
        .get_element_by_id(PALETTE_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        return Palette::default();
    };
    match Palette::from_json(&text) {
        Ok(p) => {
            log::info!("[palette] loaded {} entries from #{}", p.len(), PALETTE_SCRIPT_ID);
            p
        }
        Err(e) => {
            log::warn!("[palette] {}; falling back to built-in colors", e);
            Palette::default()
        }
    }
}

/// Every element matching `selector`.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}
