use crate::constants::{SEL_BA_AFTER, SEL_BA_BEFORE, SEL_BA_CONTAINER, SEL_BA_HANDLE};
use crate::dom;
use apex_core::{SliderPatches, SliderState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct SliderWiring {
    container: web::Element,
    state: Rc<RefCell<SliderState>>,
}

impl SliderWiring {
    fn apply(&self, patches: Option<SliderPatches>) {
        let Some(p) = patches else {
            return;
        };
        // parts are looked up per move so replaced images still get clipped
        if let Some(el) = dom::query_in(&self.container, SEL_BA_BEFORE) {
            dom::apply_style(&el, &p.before);
        }
        if let Some(el) = dom::query_in(&self.container, SEL_BA_AFTER) {
            dom::apply_style(&el, &p.after);
        }
        if let Some(el) = dom::query_in(&self.container, SEL_BA_HANDLE) {
            dom::apply_style(&el, &p.handle);
        }
    }

    fn press(&self, client_x: f32) {
        let bounds = dom::bounds(&self.container);
        let patches = self.state.borrow_mut().press(bounds, client_x);
        self.apply(patches);
    }

    fn drag(&self, client_x: f32) {
        let bounds = dom::bounds(&self.container);
        let patches = self.state.borrow_mut().drag(bounds, client_x);
        self.apply(patches);
    }

    fn release(&self) {
        self.state.borrow_mut().release();
    }
}

fn first_touch_x(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_x() as f32)
}

/// Before/after comparison: press inside the container, drag and release anywhere.
pub fn wire_before_after(document: &web::Document) {
    let Some(container) = dom::query(document, SEL_BA_CONTAINER) else {
        return;
    };
    let w = SliderWiring {
        container: container.clone(),
        state: Rc::new(RefCell::new(SliderState::default())),
    };

    {
        let w = w.clone();
        dom::on(&container, "mousedown", move |ev: web::MouseEvent| {
            w.press(ev.client_x() as f32);
        });
    }
    {
        let w = w.clone();
        dom::on_passive(&container, "touchstart", move |ev: web::TouchEvent| {
            if let Some(x) = first_touch_x(&ev) {
                w.press(x);
            }
        });
    }
    {
        let w = w.clone();
        dom::on(document, "mousemove", move |ev: web::MouseEvent| {
            w.drag(ev.client_x() as f32);
        });
    }
    {
        let w = w.clone();
        dom::on_passive(document, "touchmove", move |ev: web::TouchEvent| {
            if let Some(x) = first_touch_x(&ev) {
                w.drag(x);
            }
        });
    }
    {
        let w = w.clone();
        dom::on(document, "mouseup", move |_: web::MouseEvent| w.release());
    }
    dom::on(document, "touchend", move |_: web::TouchEvent| w.release());
    log::debug!("[slider] before/after slider wired");
}
