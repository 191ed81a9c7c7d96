use crate::constants::{
    CLASS_CURSOR_HOVER, SEL_CURSOR, SEL_CURSOR_DOT, SEL_CURSOR_HOVER_TARGETS, SEL_CURSOR_RING,
    SEL_MAGNETIC, SEL_PROGRAM_ROW, SEL_SPOTLIGHT, SEL_TILT,
};
use crate::dom;
use crate::frame;
use apex_core::{
    magnetic_offset, magnetic_patch, program_row_patch, reset_transform, spotlight,
    spotlight_patch, tilt, CursorTrail,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Custom cursor: document-level pointer tracking plus a per-frame ring update.
///
/// Also wires hover highlighting and the HUD spotlight, which only make
/// sense while the custom cursor is present.
pub fn wire_cursor(document: &web::Document) {
    let (Some(_), Some(dot), Some(ring)) = (
        dom::query(document, SEL_CURSOR),
        dom::query(document, SEL_CURSOR_DOT),
        dom::query(document, SEL_CURSOR_RING),
    ) else {
        log::debug!("[cursor] no cursor elements, skipping");
        return;
    };

    let trail = Rc::new(RefCell::new(CursorTrail::default()));
    {
        let trail = trail.clone();
        dom::on(document, "mousemove", move |ev: web::MouseEvent| {
            trail.borrow_mut().pointer_moved(client_pos(&ev));
        });
    }
    {
        let trail = trail.clone();
        dom::on(document, "mouseleave", move |_: web::MouseEvent| {
            trail.borrow_mut().pointer_left();
        });
    }
    frame::start_loop(move |_now_ms| {
        let f = trail.borrow_mut().step();
        dom::apply_style(&dot, &f.dot_patch());
        dom::apply_style(&ring, &f.ring_patch());
        true
    });

    for el in dom::query_all(document, SEL_CURSOR_HOVER_TARGETS) {
        dom::on(&el, "mouseenter", |_: web::MouseEvent| {
            dom::set_body_class(CLASS_CURSOR_HOVER, true)
        });
        dom::on(&el, "mouseleave", |_: web::MouseEvent| {
            dom::set_body_class(CLASS_CURSOR_HOVER, false)
        });
    }

    for el in dom::query_all(document, SEL_SPOTLIGHT) {
        let target = el.clone();
        dom::on(&el, "mousemove", move |ev: web::MouseEvent| {
            if let Some(pct) = spotlight(dom::bounds(&target), client_pos(&ev)) {
                dom::apply_style(&target, &spotlight_patch(pct));
            }
        });
    }
    log::info!("[cursor] custom cursor active");
}

pub fn wire_tilt(document: &web::Document) {
    let cards = dom::query_all(document, SEL_TILT);
    for card in &cards {
        let target = card.clone();
        dom::on(card, "mousemove", move |ev: web::MouseEvent| {
            let t = tilt(dom::bounds(&target), client_pos(&ev));
            dom::apply_style(&target, &t.to_patch());
        });
        let target = card.clone();
        dom::on(card, "mouseleave", move |_: web::MouseEvent| {
            dom::apply_style(&target, &reset_transform());
        });
    }
    log::debug!("[tilt] {} card(s)", cards.len());
}

pub fn wire_magnetic(document: &web::Document) {
    let buttons = dom::query_all(document, SEL_MAGNETIC);
    for btn in &buttons {
        let target = btn.clone();
        dom::on(btn, "mousemove", move |ev: web::MouseEvent| {
            let offset = magnetic_offset(dom::bounds(&target), client_pos(&ev));
            dom::apply_style(&target, &magnetic_patch(offset));
        });
        let target = btn.clone();
        dom::on(btn, "mouseleave", move |_: web::MouseEvent| {
            dom::apply_style(&target, &reset_transform());
        });
    }
    log::debug!("[magnetic] {} element(s)", buttons.len());
}

pub fn wire_program_rows(document: &web::Document) {
    for row in dom::query_all(document, SEL_PROGRAM_ROW) {
        let target = row.clone();
        dom::on(&row, "mouseenter", move |_: web::MouseEvent| {
            dom::apply_style(&target, &program_row_patch(true));
        });
        let target = row.clone();
        dom::on(&row, "mouseleave", move |_: web::MouseEvent| {
            dom::apply_style(&target, &program_row_patch(false));
        });
    }
}
