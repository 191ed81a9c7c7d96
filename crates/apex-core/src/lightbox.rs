use crate::constants::LIGHTBOX_DEFAULT_ICON;
use crate::style::{StyleProp, StylePatch};

/// Gallery overlay contents and visibility.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    open: bool,
    caption: String,
    icon: String,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Show a gallery item. A missing or empty icon falls back to the default glyph.
    pub fn open(&mut self, caption: &str, icon: Option<&str>) {
        self.open = true;
        self.caption = caption.to_string();
        self.icon = icon
            .filter(|i| !i.is_empty())
            .unwrap_or(LIGHTBOX_DEFAULT_ICON)
            .to_string();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn overlay_patch(&self) -> StylePatch {
        let (opacity, events) = if self.open { ("1", "auto") } else { ("0", "none") };
        StylePatch::new()
            .set(StyleProp::Opacity, opacity)
            .set(StyleProp::PointerEvents, events)
    }
}
