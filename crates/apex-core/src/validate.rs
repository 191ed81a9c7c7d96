//! Field-level validation for the contact and membership forms.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A user-correctable problem with a field. `Display` is the inline message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Minimum {0} characters.")]
    TooShort(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Other,
}

impl FieldKind {
    /// Map an input's `type` property.
    pub fn from_input_type(ty: &str) -> Self {
        match ty.to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "text" | "textarea" | "" => FieldKind::Text,
            _ => FieldKind::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldSpec {
    pub required: bool,
    pub kind: FieldKind,
    pub min_length: Option<usize>,
}

impl FieldSpec {
    /// Read `data-minlength`; anything that is not a count is ignored.
    pub fn parse_min_length(raw: Option<&str>) -> Option<usize> {
        raw.and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
    }
}

#[inline]
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check `raw` against `spec`. Rules run in order; the first failure wins.
pub fn validate(spec: &FieldSpec, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if spec.required && value.is_empty() {
        return Err(FieldError::Required);
    }
    if spec.kind == FieldKind::Email && !value.is_empty() && !is_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    if let Some(min) = spec.min_length {
        if value.chars().count() < min {
            return Err(FieldError::TooShort(min));
        }
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid(FieldError),
}

/// Validation state of one field.
///
/// Blur always validates. Typing only re-validates a field that is already
/// invalid, so errors appear on leaving a field and clear as soon as the
/// value is fixed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldTracker {
    spec: FieldSpec,
    state: FieldState,
}

impl FieldTracker {
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            state: FieldState::Untouched,
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.state, FieldState::Invalid(_))
    }

    pub fn on_blur(&mut self, value: &str) -> &FieldState {
        self.check(value)
    }

    /// `None` when the keystroke does not trigger validation.
    pub fn on_input(&mut self, value: &str) -> Option<&FieldState> {
        if self.is_invalid() {
            Some(self.check(value))
        } else {
            None
        }
    }

    pub fn check(&mut self, value: &str) -> &FieldState {
        self.state = match validate(&self.spec, value) {
            Ok(()) => FieldState::Valid,
            Err(e) => FieldState::Invalid(e),
        };
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = FieldState::Untouched;
    }
}
