//! Custom cursor: a dot pinned to the pointer and a trailing ring.
//!
//! The ring is a first-order low-pass filter stepped once per animation
//! frame. The smoothing factor is applied per frame rather than per unit of
//! time, so the trailing distance depends on the display refresh rate.

use crate::constants::{CURSOR_OFFSCREEN, CURSOR_RING_SMOOTHING};
use crate::style::{css_num, StyleProp, StylePatch};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorTrail {
    pointer: Vec2,
    ring: Vec2,
    smoothing: f32,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new(CURSOR_RING_SMOOTHING)
    }
}

impl CursorTrail {
    pub fn new(smoothing: f32) -> Self {
        let offscreen = Vec2::from(CURSOR_OFFSCREEN);
        Self {
            pointer: offscreen,
            ring: offscreen,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    pub fn pointer_moved(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Park the dot off-screen when the pointer leaves the document.
    pub fn pointer_left(&mut self) {
        self.pointer = Vec2::from(CURSOR_OFFSCREEN);
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn ring(&self) -> Vec2 {
        self.ring
    }

    /// Advance one frame.
    pub fn step(&mut self) -> CursorFrame {
        self.ring += (self.pointer - self.ring) * self.smoothing;
        CursorFrame {
            dot: self.pointer,
            ring: self.ring,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: Vec2,
    pub ring: Vec2,
}

impl CursorFrame {
    pub fn dot_patch(&self) -> StylePatch {
        position_patch(self.dot)
    }

    pub fn ring_patch(&self) -> StylePatch {
        position_patch(self.ring)
    }
}

fn position_patch(p: Vec2) -> StylePatch {
    StylePatch::new()
        .set(StyleProp::Left, format!("{}px", css_num(p.x)))
        .set(StyleProp::Top, format!("{}px", css_num(p.y)))
}
