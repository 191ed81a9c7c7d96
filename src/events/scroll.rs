use crate::constants::{
    CLASS_ACTIVE, CLASS_OPEN, CLASS_SCROLLED, ID_HERO, SEL_HAMBURGER, SEL_HERO_NUMBER,
    SEL_MOBILE_MENU, SEL_NAV, SEL_NAV_LINKS,
};
use crate::dom;
use apex_core::{current_page, hero_parallax, is_active_link, is_scrolled, MobileMenu};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_nav_scroll(window: &web::Window, document: &web::Document) {
    let Some(nav) = dom::query(document, SEL_NAV) else {
        return;
    };
    let update = move || dom::set_class(&nav, CLASS_SCROLLED, is_scrolled(dom::scroll_y()));
    update();
    dom::on_passive(window, "scroll", move |_: web::Event| update());
}

#[derive(Clone)]
struct MenuParts {
    hamburger: web::Element,
    menu: web::Element,
    body: Option<web::HtmlElement>,
    state: Rc<RefCell<MobileMenu>>,
}

impl MenuParts {
    fn update(&self, change: impl FnOnce(&mut MobileMenu)) {
        let m = {
            let mut state = self.state.borrow_mut();
            change(&mut *state);
            *state
        };
        dom::set_class(&self.hamburger, CLASS_OPEN, m.is_open());
        dom::set_class(&self.menu, CLASS_OPEN, m.is_open());
        if let Some(body) = &self.body {
            dom::apply_style(body, &m.body_patch());
        }
    }
}

pub fn wire_mobile_menu(document: &web::Document) {
    let (Some(hamburger), Some(menu)) = (
        dom::query(document, SEL_HAMBURGER),
        dom::query(document, SEL_MOBILE_MENU),
    ) else {
        return;
    };
    let parts = MenuParts {
        hamburger: hamburger.clone(),
        menu: menu.clone(),
        body: document.body(),
        state: Rc::new(RefCell::new(MobileMenu::default())),
    };

    {
        let parts = parts.clone();
        dom::on(&hamburger, "click", move |_: web::Event| {
            parts.update(|m| {
                m.toggle();
            });
        });
    }
    for link in dom::query_all_in(&menu, "a") {
        let parts = parts.clone();
        dom::on(&link, "click", move |_: web::Event| parts.update(MobileMenu::close));
    }
}

pub fn highlight_active_link(window: &web::Window, document: &web::Document) {
    let pathname = window.location().pathname().unwrap_or_default();
    let page = current_page(&pathname);
    for a in dom::query_all(document, SEL_NAV_LINKS) {
        if is_active_link(dom::attr(&a, "href").as_deref(), page) {
            dom::set_class(&a, CLASS_ACTIVE, true);
        }
    }
}

pub fn wire_hero_parallax(window: &web::Window, document: &web::Document) {
    let Some(hero) = document.get_element_by_id(ID_HERO) else {
        return;
    };
    let number = dom::query_in(&hero, SEL_HERO_NUMBER);
    dom::on_passive(window, "scroll", move |_: web::Event| {
        if let Some(n) = &number {
            dom::apply_style(n, &hero_parallax(dom::scroll_y()));
        }
    });
}
