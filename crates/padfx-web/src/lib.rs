#![cfg(target_arch = "wasm32")]
use padfx_core::{Scene, Trigger};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod pads;

use canvas::CanvasSurface;
use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("padfx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    dom::wire_canvas_resize(&canvas);

    let palette = dom::load_palette(&document);
    let scene = Rc::new(RefCell::new(Scene::new(CanvasSurface::new(canvas.clone(), ctx))));
    let trigger = Rc::new(RefCell::new(Trigger::new(palette, StdRng::from_entropy())));

    let wired = pads::wire_pads(&document, &canvas, scene.clone(), trigger);
    log::info!("[init] wired {} pads", wired);
    if wired == 0 {
        log::warn!("[init] no elements match {}", constants::PAD_SELECTOR);
    }

    frame::start_loop(scene);
    Ok(())
}
