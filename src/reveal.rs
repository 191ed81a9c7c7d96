use crate::constants::{ATTR_COUNT, CLASS_VISIBLE, SEL_COUNTER, SEL_REVEAL};
use crate::dom;
use crate::frame;
use crate::observer;
use apex_core::{parse_count_target, CounterAnimation, WatchConfig};
use web_sys as web;

/// Scroll reveals: elements gain `visible` once and keep it.
pub fn wire_reveals(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all(document, SEL_REVEAL);
    observer::watch(elements, WatchConfig::reveal(), |el| {
        dom::set_class(el, CLASS_VISIBLE, true);
    })
}

/// Animated counters, started the first time each one is half visible.
pub fn wire_counters(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all(document, SEL_COUNTER);
    observer::watch(elements, WatchConfig::counter(), |el| {
        let raw = dom::attr(el, ATTR_COUNT).unwrap_or_default();
        match parse_count_target(&raw) {
            Some(target) => animate_counter(el.clone(), target),
            None => log::debug!("[counter] ignoring data-count={:?}", raw),
        }
    })
}

fn animate_counter(el: web::Element, target: f64) {
    let anim = CounterAnimation::with_default_duration(target, instant::now());
    frame::start_loop(move |now_ms| {
        let f = anim.sample(now_ms);
        dom::set_text(&el, &f.text);
        !f.finished
    });
}
