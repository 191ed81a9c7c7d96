use crate::pointer::Bounds;
use crate::style::{css_num, StyleProp, StylePatch};

/// Horizontal pointer position as a fraction of the container, clamped to [0, 1].
pub fn fraction_at(bounds: Bounds, client_x: f32) -> Option<f32> {
    if !(bounds.size.x > 0.0) {
        return None;
    }
    Some(((client_x - bounds.origin.x) / bounds.size.x).clamp(0.0, 1.0))
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderPatches {
    pub before: StylePatch,
    pub after: StylePatch,
    pub handle: StylePatch,
}

impl SliderPatches {
    pub fn for_fraction(fraction: f32) -> Self {
        let left_pct = fraction * 100.0;
        let right_pct = (1.0 - fraction) * 100.0;
        Self {
            before: StylePatch::new().set(
                StyleProp::ClipPath,
                format!("inset(0 {}% 0 0)", css_num(right_pct)),
            ),
            after: StylePatch::new().set(
                StyleProp::ClipPath,
                format!("inset(0 0 0 {}%)", css_num(left_pct)),
            ),
            handle: StylePatch::new().set(StyleProp::Left, format!("{}%", css_num(left_pct))),
        }
    }
}

/// Drag state for the before/after comparison slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    dragging: bool,
    fraction: f32,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            dragging: false,
            fraction: 0.5,
        }
    }
}

impl SliderState {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Pointer down / touch start inside the container.
    pub fn press(&mut self, bounds: Bounds, client_x: f32) -> Option<SliderPatches> {
        self.dragging = true;
        self.move_to(bounds, client_x)
    }

    /// Move anywhere in the document; ignored unless a drag is active.
    pub fn drag(&mut self, bounds: Bounds, client_x: f32) -> Option<SliderPatches> {
        if !self.dragging {
            return None;
        }
        self.move_to(bounds, client_x)
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    fn move_to(&mut self, bounds: Bounds, client_x: f32) -> Option<SliderPatches> {
        let f = fraction_at(bounds, client_x)?;
        self.fraction = f;
        Some(SliderPatches::for_fraction(f))
    }
}
