use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive `step` once per animation frame until it returns `false`.
///
/// `step` receives the frame timestamp in milliseconds (same clock as
/// `performance.now()`). The next frame is only requested after the current
/// step has finished.
pub fn start_loop(mut step: impl FnMut(f64) -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        if !step(now_ms) {
            // drop our own handle so the closure is freed once this call returns
            let _ = tick_clone.borrow_mut().take();
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) {
    if let Some(w) = web::window() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
