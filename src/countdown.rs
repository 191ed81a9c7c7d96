use crate::constants::{SEL_COUNTDOWN, SEL_COUNTDOWN_NUM};
use crate::dom;
use apex_core::{countdown_target, CountdownUnit, Remaining, COUNTDOWN_TICK_MS};
use chrono::{Local, TimeZone, Utc};
use gloo_timers::callback::Interval;
use web_sys as web;

/// Local deadline in epoch milliseconds, fixed for the page session.
fn target_ms() -> Option<i64> {
    let naive = countdown_target(Local::now().naive_local())?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|t| t.timestamp_millis())
}

pub fn wire_countdown(document: &web::Document) -> anyhow::Result<()> {
    let Some(root) = dom::query(document, SEL_COUNTDOWN) else {
        return Ok(());
    };
    let target = target_ms().ok_or_else(|| anyhow::anyhow!("no local countdown target"))?;

    let slots: Vec<(CountdownUnit, web::Element)> = CountdownUnit::ALL
        .iter()
        .filter_map(|unit| {
            let sel = format!("[data-cd=\"{}\"] {}", unit.data_key(), SEL_COUNTDOWN_NUM);
            dom::query_in(&root, &sel).map(|el| (*unit, el))
        })
        .collect();

    let render = move || {
        let remaining = Remaining::between(target, Utc::now().timestamp_millis());
        for (unit, text) in remaining.slots() {
            if let Some((_, el)) = slots.iter().find(|(u, _)| *u == unit) {
                dom::set_text(el, &text);
            }
        }
    };
    render();
    Interval::new(COUNTDOWN_TICK_MS, render).forget();
    log::debug!("[countdown] target {}", target);
    Ok(())
}
