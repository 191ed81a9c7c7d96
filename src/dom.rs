use apex_core::{Bounds, StylePatch};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_in(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

fn collect_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn as_html(el: &web::Element) -> Option<&web::HtmlElement> {
    el.dyn_ref::<web::HtmlElement>()
}

pub fn attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(name)
}

/// Register a listener for the lifetime of the page.
pub fn on<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Like [`on`], but marked passive for scroll and touch listeners.
pub fn on_passive<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        on(&el, "click", move |_: web::Event| handler());
    }
}

/// Bounds at event time; never cached so layout shifts are picked up.
pub fn bounds(el: &web::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// The single place style patches reach the DOM.
pub fn apply_style(el: &web::Element, patch: &StylePatch) {
    let Some(html) = as_html(el) else {
        return;
    };
    let style = html.style();
    for (prop, value) in patch.iter() {
        let res = match value {
            Some(v) => style.set_property(prop.css_name(), v),
            None => style.remove_property(prop.css_name()).map(|_| ()),
        };
        if let Err(e) = res {
            log::warn!("[dom] style {} failed: {:?}", prop.css_name(), e);
        }
    }
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    let res = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = res {
        log::warn!("[dom] class {} failed: {:?}", class, e);
    }
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = window_document().and_then(|d| d.body()) {
        set_class(&body, class, on);
    }
}

pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
