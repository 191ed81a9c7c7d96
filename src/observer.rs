use apex_core::{TriggerAction, ViewportTrigger, WatchConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe `elements` and call `on_fire` when each one's trigger fires.
///
/// Persistent watches call `on_fire` on every crossing; once-watches call it
/// a single time and then stop observing that element.
pub fn watch(
    elements: Vec<web::Element>,
    config: WatchConfig,
    mut on_fire: impl FnMut(&web::Element) + 'static,
) -> anyhow::Result<()> {
    if elements.is_empty() {
        return Ok(());
    }
    let triggers: Rc<RefCell<Vec<(web::Element, ViewportTrigger)>>> = Rc::new(RefCell::new(
        elements
            .iter()
            .map(|el| (el.clone(), ViewportTrigger::new(config.mode)))
            .collect(),
    ));

    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let action = {
                    let mut triggers = triggers.borrow_mut();
                    match triggers.iter_mut().find(|(el, _)| *el == target) {
                        Some((_, trigger)) => trigger.observe(entry.is_intersecting()),
                        None => TriggerAction::Ignore,
                    }
                };
                match action {
                    TriggerAction::Ignore => {}
                    TriggerAction::MarkVisible => on_fire(&target),
                    TriggerAction::FireAndDetach => {
                        observer.unobserve(&target);
                        on_fire(&target);
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    if let Some(margin) = config.root_margin {
        init.set_root_margin(margin);
    }
    let observer = web::IntersectionObserver::new_with_options(
        closure.as_ref().unchecked_ref(),
        &init,
    )
    .map_err(crate::dom::js_err)?;
    closure.forget();

    for el in &elements {
        observer.observe(el);
    }
    log::debug!(
        "[observer] watching {} element(s) at threshold {}",
        elements.len(),
        config.threshold
    );
    Ok(())
}
