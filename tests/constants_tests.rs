// Host-side tests for selectors and tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod selectors {
    include!("../src/constants.rs");
}

use apex_core::*;
use selectors::*;

#[test]
fn class_names_are_bare() {
    for class in [
        CLASS_VISIBLE,
        CLASS_SCROLLED,
        CLASS_OPEN,
        CLASS_ACTIVE,
        CLASS_CURSOR_HOVER,
        CLASS_ERROR,
        CLASS_FIELD_ERROR,
        CLASS_LOADING,
        CLASS_DONE,
    ] {
        assert!(!class.is_empty());
        assert!(!class.starts_with('.'), "{class} should not carry a dot");
        assert!(!class.contains(' '), "{class} should be a single class");
    }
}

#[test]
fn configuration_attributes_are_data_attributes() {
    for attr in [
        ATTR_COUNT,
        ATTR_MINLENGTH,
        ATTR_LABEL,
        ATTR_LIGHTBOX,
        ATTR_EMOJI,
        ATTR_MONTHLY,
        ATTR_ANNUAL,
    ] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
    assert!(SEL_COUNTER.contains(ATTR_COUNT));
    assert!(SEL_GALLERY_ITEM.contains(ATTR_LIGHTBOX));
}

#[test]
fn field_error_selector_matches_created_class() {
    assert_eq!(SEL_FIELD_ERROR, format!(".{}", CLASS_FIELD_ERROR));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(COUNTER_THRESHOLD > 0.0 && COUNTER_THRESHOLD <= 1.0);
    // counters wait until they are well inside the viewport
    assert!(COUNTER_THRESHOLD > REVEAL_THRESHOLD);
    assert!(CURSOR_RING_SMOOTHING > 0.0 && CURSOR_RING_SMOOTHING < 1.0);
    assert!(MAGNETIC_PULL > 0.0 && MAGNETIC_PULL < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn time_units_chain() {
    assert_eq!(MS_PER_MINUTE, 60 * MS_PER_SECOND);
    assert_eq!(MS_PER_HOUR, 60 * MS_PER_MINUTE);
    assert_eq!(MS_PER_DAY, 24 * MS_PER_HOUR);
    assert_eq!(COUNTDOWN_TICK_MS as i64, MS_PER_SECOND);
    assert!(SUCCESS_DISPLAY_MS > SUBMIT_LATENCY_MS);
    assert!(COUNTER_DURATION_MS > 0.0);
}
