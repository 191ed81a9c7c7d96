use crate::constants::{
    ATTR_ANNUAL, ATTR_MONTHLY, CLASS_DONE, ID_LOADER, SEL_PLAN_PERIOD, SEL_PLAN_PRICE,
    SEL_PLAN_TOGGLE,
};
use crate::dom;
use apex_core::{
    price_fade_in, price_fade_out, BillingPeriod, PlanPrices, StyleProp, StylePatch,
    LOADER_FADE_MS, LOADER_HOLD_MS, PRICE_SWAP_MS,
};
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn dismiss_loader(window: &web::Window, loader: web::Element) {
    window.scroll_to_with_x_and_y(0.0, 0.0);
    Timeout::new(LOADER_HOLD_MS, move || {
        dom::set_class(&loader, CLASS_DONE, true);
        Timeout::new(LOADER_FADE_MS, move || {
            dom::apply_style(&loader, &StylePatch::new().set(StyleProp::Display, "none"));
        })
        .forget();
    })
    .forget();
}

/// Hide the splash loader once the page has loaded.
pub fn wire_loader(window: &web::Window, document: &web::Document) {
    let Some(loader) = document.get_element_by_id(ID_LOADER) else {
        return;
    };
    // the module may finish loading after the window load event
    if document.ready_state() == "complete" {
        dismiss_loader(window, loader);
        return;
    }
    let win = window.clone();
    let mut pending = Some(loader);
    dom::on(window, "load", move |_: web::Event| {
        if let Some(loader) = pending.take() {
            dismiss_loader(&win, loader);
        }
    });
}

/// Monthly/annual price switch.
pub fn wire_plan_toggle(document: &web::Document) {
    let Some(toggle) = dom::query(document, SEL_PLAN_TOGGLE)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let prices = Rc::new(PlanPrices::parse(
        dom::attr(&toggle, ATTR_MONTHLY).as_deref(),
        dom::attr(&toggle, ATTR_ANNUAL).as_deref(),
    ));
    let price_els = dom::query_all(document, SEL_PLAN_PRICE);
    let period_els = dom::query_all(document, SEL_PLAN_PERIOD);

    let input = toggle.clone();
    dom::on(&toggle, "change", move |_: web::Event| {
        let period = BillingPeriod::from_checked(input.checked());
        for (i, el) in price_els.iter().enumerate() {
            dom::apply_style(el, &price_fade_out());
            let el = el.clone();
            let prices = prices.clone();
            Timeout::new(PRICE_SWAP_MS, move || {
                if let Some(p) = prices.price(period, i) {
                    dom::set_text(&el, p);
                }
                dom::apply_style(&el, &price_fade_in());
            })
            .forget();
        }
        for p in &period_els {
            dom::set_text(p, period.period_label());
        }
    });
}
