//! Simulated form submission.
//!
//! Nothing is sent anywhere. The machine only sequences the button and
//! banner states the page shows while pretending to deliver the message:
//!
//! ```text
//! Idle --begin--> Submitting --complete--> SuccessDisplay --revert--> Idle
//!                                              |
//!                                              +--cancel_display--> Idle
//! ```
//!
//! The frontend owns the timers and calls `complete` / `revert` when they
//! fire; [`SubmitMachine::next_delay_ms`] says how long to wait.

use crate::constants::{
    SUBMIT_DEFAULT_LABEL, SUBMIT_LATENCY_MS, SUBMIT_SENT_LABEL, SUCCESS_DISPLAY_MS,
};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{failed} required field(s) failed validation")]
    Invalid { failed: usize },
    #[error("a submission is already in progress")]
    Busy,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    SuccessDisplay,
}

/// What the submit button and success banner should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitView {
    pub button_disabled: bool,
    pub button_loading: bool,
    pub button_label: String,
    pub banner_visible: bool,
    /// Clear every field of the form when applying this view.
    pub reset_fields: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitMachine {
    phase: SubmitPhase,
    default_label: String,
}

impl Default for SubmitMachine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SubmitMachine {
    /// `label` is the button's `data-label`; empty or missing falls back to "Submit".
    pub fn new(label: Option<&str>) -> Self {
        let default_label = label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(SUBMIT_DEFAULT_LABEL)
            .to_string();
        Self {
            phase: SubmitPhase::Idle,
            default_label,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Delay before the next automatic transition, if one is pending.
    pub fn next_delay_ms(&self) -> Option<u32> {
        match self.phase {
            SubmitPhase::Idle => None,
            SubmitPhase::Submitting => Some(SUBMIT_LATENCY_MS),
            SubmitPhase::SuccessDisplay => Some(SUCCESS_DISPLAY_MS),
        }
    }

    /// Start a submission once every required field has been checked.
    pub fn begin(&mut self, failed_fields: usize) -> Result<SubmitView, SubmitError> {
        if self.phase != SubmitPhase::Idle {
            return Err(SubmitError::Busy);
        }
        if failed_fields > 0 {
            return Err(SubmitError::Invalid {
                failed: failed_fields,
            });
        }
        self.phase = SubmitPhase::Submitting;
        log::debug!("[submit] submitting");
        Ok(SubmitView {
            button_disabled: true,
            button_loading: true,
            button_label: String::new(),
            banner_visible: false,
            reset_fields: false,
        })
    }

    /// Simulated latency elapsed.
    pub fn complete(&mut self) -> Option<SubmitView> {
        if self.phase != SubmitPhase::Submitting {
            return None;
        }
        self.phase = SubmitPhase::SuccessDisplay;
        log::debug!("[submit] sent");
        Some(SubmitView {
            button_disabled: false,
            button_loading: false,
            button_label: SUBMIT_SENT_LABEL.to_string(),
            banner_visible: true,
            reset_fields: true,
        })
    }

    /// Success display elapsed.
    pub fn revert(&mut self) -> Option<SubmitView> {
        if self.phase != SubmitPhase::SuccessDisplay {
            return None;
        }
        self.phase = SubmitPhase::Idle;
        Some(self.idle_view())
    }

    /// End the success display early; the caller drops its pending timer.
    pub fn cancel_display(&mut self) -> Option<SubmitView> {
        let view = self.revert()?;
        log::debug!("[submit] success display cancelled");
        Some(view)
    }

    fn idle_view(&self) -> SubmitView {
        SubmitView {
            button_disabled: false,
            button_loading: false,
            button_label: self.default_label.clone(),
            banner_visible: false,
            reset_fields: false,
        }
    }
}
