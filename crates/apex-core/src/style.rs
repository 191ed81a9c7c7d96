//! Style patches: the only way effects describe visual changes.
//!
//! Every effect in this crate is a pure function returning a [`StylePatch`].
//! The web frontend applies patches to elements in one place, so the math
//! can be tested on the host without a DOM.

use smallvec::SmallVec;

/// Inline style properties touched by the page effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleProp {
    Transform,
    Left,
    Top,
    ClipPath,
    ZIndex,
    Opacity,
    Display,
    PointerEvents,
    Overflow,
    /// `--mouse-x`, read by the spotlight gradient in CSS.
    MouseX,
    /// `--mouse-y`, read by the spotlight gradient in CSS.
    MouseY,
}

impl StyleProp {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProp::Transform => "transform",
            StyleProp::Left => "left",
            StyleProp::Top => "top",
            StyleProp::ClipPath => "clip-path",
            StyleProp::ZIndex => "z-index",
            StyleProp::Opacity => "opacity",
            StyleProp::Display => "display",
            StyleProp::PointerEvents => "pointer-events",
            StyleProp::Overflow => "overflow",
            StyleProp::MouseX => "--mouse-x",
            StyleProp::MouseY => "--mouse-y",
        }
    }
}

/// Ordered set of property writes. `None` clears the inline value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StylePatch {
    entries: SmallVec<[(StyleProp, Option<String>); 4]>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, prop: StyleProp, value: impl Into<String>) -> Self {
        self.put(prop, Some(value.into()));
        self
    }

    pub fn clear(mut self, prop: StyleProp) -> Self {
        self.put(prop, None);
        self
    }

    // Later writes to the same property replace earlier ones.
    fn put(&mut self, prop: StyleProp, value: Option<String>) {
        if let Some(slot) = self.entries.iter_mut().find(|(p, _)| *p == prop) {
            slot.1 = value;
        } else {
            self.entries.push((prop, value));
        }
    }

    /// `Some(Some(v))` when set, `Some(None)` when cleared, `None` when untouched.
    pub fn get(&self, prop: StyleProp) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProp, Option<&str>)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format a CSS number, folding `-0` into `0`.
#[inline]
pub fn css_num(v: f32) -> String {
    format!("{}", v + 0.0)
}
