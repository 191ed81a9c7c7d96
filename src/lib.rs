#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod countdown;
mod dom;
mod events;
mod form;
mod frame;
mod observer;
mod overlay;
mod reveal;
mod ui;

const LOG_LEVEL: log::Level = log::Level::Info;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("APEX GYM");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Log and carry on: one broken effect must not take the page down.
fn report(component: &str, res: anyhow::Result<()>) {
    if let Err(e) = res {
        log::warn!("[{}] disabled: {:?}", component, e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    ui::wire_loader(&window, &document);
    events::wire_cursor(&document);

    events::wire_nav_scroll(&window, &document);
    events::wire_mobile_menu(&document);
    events::highlight_active_link(&window, &document);

    report("reveal", reveal::wire_reveals(&document));
    report("counter", reveal::wire_counters(&document));

    events::wire_tilt(&document);
    events::wire_magnetic(&document);
    events::wire_program_rows(&document);
    events::wire_before_after(&document);
    events::wire_hero_parallax(&window, &document);

    report("countdown", countdown::wire_countdown(&document));
    form::wire_forms(&document);
    ui::wire_plan_toggle(&document);
    report("lightbox", overlay::wire_lightbox(&document));

    log::info!("apex-web ready");
    Ok(())
}
