use crate::constants::{
    ATTR_EMOJI, ATTR_LIGHTBOX, ID_LIGHTBOX, ID_LIGHTBOX_CLOSE, ID_LIGHTBOX_LABEL, SEL_GALLERY_ITEM,
};
use crate::dom;
use apex_core::LightboxState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const LIGHTBOX_STYLE: &str = "position:fixed;inset:0;z-index:5000;background:rgba(0,0,0,0.92);display:flex;align-items:center;justify-content:center;opacity:0;pointer-events:none;transition:opacity 0.3s;";

const LIGHTBOX_MARKUP: &str = concat!(
    r#"<div style="text-align:center;color:#f5f5f0;">"#,
    r#"<div class="lb-icon" style="font-size:5rem;margin-bottom:20px"></div>"#,
    r#"<p style="font-family:'Bebas Neue',sans-serif;font-size:1.5rem;letter-spacing:0.1em;color:#b5ff2e" id="lb-label"></p>"#,
    r#"</div>"#,
    r#"<button id="lb-close" style="position:absolute;top:24px;right:32px;font-size:2rem;color:#b5ff2e;background:none;border:none;cursor:pointer;">&#x2715;</button>"#,
);

#[derive(Clone)]
struct Lightbox {
    root: web::Element,
    state: Rc<RefCell<LightboxState>>,
}

impl Lightbox {
    fn create(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let root = document.create_element("div").map_err(dom::js_err)?;
        root.set_id(ID_LIGHTBOX);
        root.set_attribute("style", LIGHTBOX_STYLE)
            .map_err(dom::js_err)?;
        root.set_inner_html(LIGHTBOX_MARKUP);
        body.append_child(&root).map_err(dom::js_err)?;
        Ok(Self {
            root,
            state: Rc::new(RefCell::new(LightboxState::default())),
        })
    }

    fn show(&self, caption: &str, icon: Option<&str>) {
        let mut state = self.state.borrow_mut();
        state.open(caption, icon);
        if let Some(icon_el) = dom::query_in(&self.root, ".lb-icon") {
            dom::set_text(&icon_el, state.icon());
        }
        if let Some(label) = dom::query_in(&self.root, &format!("#{}", ID_LIGHTBOX_LABEL)) {
            dom::set_text(&label, state.caption());
        }
        dom::apply_style(&self.root, &state.overlay_patch());
    }

    fn hide(&self) {
        let mut state = self.state.borrow_mut();
        state.close();
        dom::apply_style(&self.root, &state.overlay_patch());
    }
}

pub fn wire_lightbox(document: &web::Document) -> anyhow::Result<()> {
    let items = dom::query_all(document, SEL_GALLERY_ITEM);
    if items.is_empty() {
        return Ok(());
    }
    let lb = Lightbox::create(document)?;

    for item in &items {
        let lb = lb.clone();
        let target = item.clone();
        dom::on(item, "click", move |_: web::Event| {
            let caption = dom::attr(&target, ATTR_LIGHTBOX).unwrap_or_default();
            let icon = dom::attr(&target, ATTR_EMOJI);
            lb.show(&caption, icon.as_deref());
        });
    }
    {
        let lb = lb.clone();
        dom::add_click_listener(document, ID_LIGHTBOX_CLOSE, move || lb.hide());
    }
    let root = lb.root.clone();
    dom::on(&root, "click", move |ev: web::Event| {
        // backdrop only; clicks on the content bubble up with another target
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map_or(false, |t| t == lb.root);
        if on_backdrop {
            lb.hide();
        }
    });
    log::debug!("[lightbox] {} gallery item(s)", items.len());
    Ok(())
}
