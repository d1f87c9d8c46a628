use crate::canvas::CanvasSurface;
use padfx_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type CanvasScene = Scene<CanvasSurface>;

/// Drive `scene.frame()` from requestAnimationFrame until the canvas goes away.
pub fn start_loop(scene: Rc<RefCell<CanvasScene>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut scene = scene.borrow_mut();
            if !scene.frame() {
                log::warn!(
                    "[frame] canvas detached after {} frames; stopping loop",
                    scene.frames()
                );
                return;
            }
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
