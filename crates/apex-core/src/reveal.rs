//! Viewport intersection triggers.
//!
//! The browser decides when an element crosses a threshold; this module
//! decides what that crossing means for the element.

use crate::constants::{COUNTER_THRESHOLD, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerMode {
    /// Mark visible on every crossing; the flag is never removed.
    Persistent,
    /// Fire on the first crossing, then stop observing.
    Once,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchConfig {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    pub mode: TriggerMode,
}

impl WatchConfig {
    pub fn reveal() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: Some(REVEAL_ROOT_MARGIN),
            mode: TriggerMode::Persistent,
        }
    }

    pub fn counter() -> Self {
        Self {
            threshold: COUNTER_THRESHOLD,
            root_margin: None,
            mode: TriggerMode::Once,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerAction {
    Ignore,
    MarkVisible,
    FireAndDetach,
}

/// Per-element trigger state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportTrigger {
    mode: TriggerMode,
    armed: bool,
}

impl ViewportTrigger {
    pub fn new(mode: TriggerMode) -> Self {
        Self { mode, armed: true }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn observe(&mut self, is_intersecting: bool) -> TriggerAction {
        if !is_intersecting {
            return TriggerAction::Ignore;
        }
        match self.mode {
            TriggerMode::Persistent => TriggerAction::MarkVisible,
            TriggerMode::Once if self.armed => {
                self.armed = false;
                TriggerAction::FireAndDetach
            }
            TriggerMode::Once => TriggerAction::Ignore,
        }
    }
}
