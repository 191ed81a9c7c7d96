use crate::constants::{DEFAULT_PAGE, HERO_PARALLAX_FACTOR, NAV_SCROLLED_AFTER_PX};
use crate::style::{StyleProp, StylePatch};

#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AFTER_PX
}

/// Last path segment, or the index page for `/` and empty paths.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(seg) if !seg.is_empty() => seg,
        _ => DEFAULT_PAGE,
    }
}

pub fn is_active_link(href: Option<&str>, page: &str) -> bool {
    href == Some(page)
}

pub fn hero_parallax(scroll_y: f64) -> StylePatch {
    StylePatch::new().set(
        StyleProp::Transform,
        format!(
            "translateY(calc(-55% + {}px))",
            scroll_y * HERO_PARALLAX_FACTOR + 0.0
        ),
    )
}

/// Mobile menu open state, mirrored on the hamburger and the menu panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Body scroll lock while the menu covers the page.
    pub fn body_patch(&self) -> StylePatch {
        if self.open {
            StylePatch::new().set(StyleProp::Overflow, "hidden")
        } else {
            StylePatch::new().clear(StyleProp::Overflow)
        }
    }
}

/// Raise a hovered program row above its neighbours.
pub fn program_row_patch(hovered: bool) -> StylePatch {
    if hovered {
        StylePatch::new().set(StyleProp::ZIndex, "2")
    } else {
        StylePatch::new().clear(StyleProp::ZIndex)
    }
}
