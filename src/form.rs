use crate::constants::{
    ATTR_LABEL, ATTR_MINLENGTH, CLASS_ERROR, CLASS_FIELD_ERROR, CLASS_LOADING, CLASS_VISIBLE,
    SEL_FIELD_ERROR, SEL_FORM, SEL_FORM_FIELDS, SEL_FORM_GROUP, SEL_FORM_SUCCESS, SEL_SUBMIT,
};
use crate::dom;
use apex_core::{FieldKind, FieldSpec, FieldState, FieldTracker, SubmitMachine, SubmitView};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
enum FieldHandle {
    Input(web::HtmlInputElement),
    TextArea(web::HtmlTextAreaElement),
    Select(web::HtmlSelectElement),
}

impl FieldHandle {
    fn from_element(el: web::Element) -> Option<Self> {
        let el = match el.dyn_into::<web::HtmlInputElement>() {
            Ok(i) => return Some(FieldHandle::Input(i)),
            Err(el) => el,
        };
        let el = match el.dyn_into::<web::HtmlTextAreaElement>() {
            Ok(t) => return Some(FieldHandle::TextArea(t)),
            Err(el) => el,
        };
        el.dyn_into::<web::HtmlSelectElement>()
            .ok()
            .map(FieldHandle::Select)
    }

    fn element(&self) -> &web::Element {
        match self {
            FieldHandle::Input(i) => i,
            FieldHandle::TextArea(t) => t,
            FieldHandle::Select(s) => s,
        }
    }

    fn value(&self) -> String {
        match self {
            FieldHandle::Input(i) => i.value(),
            FieldHandle::TextArea(t) => t.value(),
            FieldHandle::Select(s) => s.value(),
        }
    }

    fn spec(&self) -> FieldSpec {
        let (required, kind) = match self {
            FieldHandle::Input(i) => (i.required(), FieldKind::from_input_type(&i.type_())),
            FieldHandle::TextArea(t) => (t.required(), FieldKind::Text),
            FieldHandle::Select(s) => (s.required(), FieldKind::Other),
        };
        FieldSpec {
            required,
            kind,
            min_length: FieldSpec::parse_min_length(
                dom::attr(self.element(), ATTR_MINLENGTH).as_deref(),
            ),
        }
    }
}

struct Field {
    handle: FieldHandle,
    tracker: RefCell<FieldTracker>,
}

impl Field {
    fn blur(&self) {
        let state = self.tracker.borrow_mut().on_blur(&self.handle.value()).clone();
        self.render(&state);
    }

    fn input(&self) {
        let state = self
            .tracker
            .borrow_mut()
            .on_input(&self.handle.value())
            .cloned();
        if let Some(state) = state {
            self.render(&state);
        }
    }

    /// Validate for submission; `true` when the field passes.
    fn check(&self) -> bool {
        let state = self.tracker.borrow_mut().check(&self.handle.value()).clone();
        self.render(&state);
        state == FieldState::Valid
    }

    fn reset(&self) {
        self.tracker.borrow_mut().reset();
        self.render(&FieldState::Untouched);
    }

    fn render(&self, state: &FieldState) {
        let el = self.handle.element();
        let group = el.closest(SEL_FORM_GROUP).ok().flatten();
        let existing = group.as_ref().and_then(|g| dom::query_in(g, SEL_FIELD_ERROR));
        match state {
            FieldState::Invalid(err) => {
                dom::set_class(el, CLASS_ERROR, true);
                let msg_el = existing.or_else(|| group.as_ref().and_then(create_error_el));
                if let Some(msg_el) = msg_el {
                    dom::set_text(&msg_el, &err.to_string());
                }
            }
            FieldState::Valid | FieldState::Untouched => {
                dom::set_class(el, CLASS_ERROR, false);
                if let Some(msg_el) = existing {
                    dom::set_text(&msg_el, "");
                }
            }
        }
    }
}

fn create_error_el(group: &web::Element) -> Option<web::Element> {
    let document = dom::window_document()?;
    let p = document.create_element("p").ok()?;
    p.set_class_name(CLASS_FIELD_ERROR);
    group.append_child(&p).ok()?;
    Some(p)
}

/// Everything a submission step needs to update the page.
#[derive(Clone)]
struct FormParts {
    form: web::HtmlFormElement,
    fields: Rc<Vec<Field>>,
    button: Option<web::Element>,
    banner: Option<web::Element>,
    machine: Rc<RefCell<SubmitMachine>>,
}

impl FormParts {
    fn apply(&self, view: &SubmitView) {
        if let Some(btn) = &self.button {
            if view.button_disabled {
                let _ = btn.set_attribute("disabled", "");
            } else {
                let _ = btn.remove_attribute("disabled");
            }
            dom::set_class(btn, CLASS_LOADING, view.button_loading);
            match btn.dyn_ref::<web::HtmlInputElement>() {
                Some(input) => input.set_value(&view.button_label),
                None => dom::set_text(btn, &view.button_label),
            }
        }
        if view.reset_fields {
            self.form.reset();
            for f in self.fields.iter() {
                f.reset();
            }
        }
        if let Some(banner) = &self.banner {
            dom::set_class(banner, CLASS_VISIBLE, view.banner_visible);
        }
    }

    fn revert(&self) {
        let reverted = self.machine.borrow_mut().revert();
        if let Some(view) = reverted {
            self.apply(&view);
        }
    }
}

#[derive(Clone)]
struct FormWiring {
    parts: FormParts,
    // holding the pending revert keeps it alive; dropping it cancels
    revert_timer: Rc<RefCell<Option<Timeout>>>,
}

impl FormWiring {
    fn submit(&self) {
        let p = &self.parts;
        let failed = p
            .fields
            .iter()
            .filter(|f| f.tracker.borrow().spec().required)
            .map(|f| f.check())
            .filter(|ok| !ok)
            .count();
        let begun = p.machine.borrow_mut().begin(failed);
        let view = match begun {
            Ok(view) => view,
            Err(e) => {
                log::debug!("[form] submit rejected: {}", e);
                return;
            }
        };
        p.apply(&view);

        let latency = p.machine.borrow().next_delay_ms().unwrap_or(0);
        let w = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(latency).await;
            w.finish();
        });
    }

    fn finish(&self) {
        let p = &self.parts;
        let completed = p.machine.borrow_mut().complete();
        let Some(view) = completed else {
            return;
        };
        p.apply(&view);

        let delay = p.machine.borrow().next_delay_ms().unwrap_or(0);
        let parts = p.clone();
        let timer = Timeout::new(delay, move || parts.revert());
        *self.revert_timer.borrow_mut() = Some(timer);
    }
}

fn wire_form(form: web::HtmlFormElement) {
    let fields: Vec<Field> = dom::query_all_in(&form, SEL_FORM_FIELDS)
        .into_iter()
        .filter_map(FieldHandle::from_element)
        .map(|handle| Field {
            tracker: RefCell::new(FieldTracker::new(handle.spec())),
            handle,
        })
        .collect();
    let button = dom::query_in(&form, SEL_SUBMIT);
    let label = button.as_ref().and_then(|b| dom::attr(b, ATTR_LABEL));
    let fields = Rc::new(fields);
    let w = FormWiring {
        parts: FormParts {
            fields: fields.clone(),
            banner: dom::query_in(&form, SEL_FORM_SUCCESS),
            button,
            machine: Rc::new(RefCell::new(SubmitMachine::new(label.as_deref()))),
            form: form.clone(),
        },
        revert_timer: Rc::new(RefCell::new(None)),
    };

    for i in 0..fields.len() {
        let el = fields[i].handle.element().clone();
        {
            let fields = fields.clone();
            dom::on(&el, "blur", move |_: web::Event| fields[i].blur());
        }
        let fields = fields.clone();
        dom::on(&el, "input", move |_: web::Event| fields[i].input());
    }
    log::debug!("[form] {} field(s) wired", fields.len());
    dom::on(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        w.submit();
    });
}

pub fn wire_forms(document: &web::Document) {
    for el in dom::query_all(document, SEL_FORM) {
        match el.dyn_into::<web::HtmlFormElement>() {
            Ok(form) => wire_form(form),
            Err(_) => log::warn!("[form] {} is not a <form>, skipping", SEL_FORM),
        }
    }
}
