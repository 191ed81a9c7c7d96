// Host-side tests for the counter animation and viewport triggers.

use apex_core::*;

#[test]
fn ease_out_quart_endpoints() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
}

#[test]
fn counter_lands_exactly_on_target() {
    for (target, expected) in [(250.0, "250"), (4.5, "4.5"), (98.6, "98.6"), (0.0, "0")] {
        for duration in [1.0, 1800.0, 60_000.0] {
            let anim = CounterAnimation::starting_at(target, duration, 100.0);
            let f = anim.sample(100.0 + duration);
            assert_eq!(f.text, expected, "target {target} duration {duration}");
            assert!(f.finished);
        }
    }
}

#[test]
fn counter_keeps_final_value_after_duration() {
    let anim = CounterAnimation::starting_at(1200.0, 1000.0, 0.0);
    assert_eq!(anim.sample(5_000.0).text, "1200");
}

#[test]
fn counter_starts_at_zero_even_for_early_frames() {
    let anim = CounterAnimation::starting_at(250.0, 1000.0, 500.0);
    // a frame timestamp slightly before the recorded start
    let f = anim.sample(495.0);
    assert_eq!(f.text, "0");
    assert!(!f.finished);
}

#[test]
fn counter_midpoint_uses_quartic_ease() {
    let anim = CounterAnimation::starting_at(250.0, 1000.0, 0.0);
    // 250 * 0.9375 = 234.375
    assert_eq!(anim.sample(500.0).text, "234");
}

#[test]
fn counter_text_never_decreases() {
    let anim = CounterAnimation::with_default_duration(500.0, 0.0);
    let mut prev = -1i64;
    let mut t = 0.0;
    while t <= COUNTER_DURATION_MS {
        let v: i64 = anim.sample(t).text.parse().unwrap();
        assert!(v >= prev, "value dropped at {t}ms");
        prev = v;
        t += 16.0;
    }
}

#[test]
fn fractional_targets_render_one_decimal() {
    assert_eq!(CountFormat::for_target(4.9), CountFormat::OneDecimal);
    assert_eq!(CountFormat::for_target(12.0), CountFormat::Integer);
    let anim = CounterAnimation::starting_at(4.9, 1000.0, 0.0);
    let text = anim.sample(300.0).text;
    assert_eq!(text.split('.').nth(1).map(str::len), Some(1), "{text}");
}

#[test]
fn zero_duration_finishes_immediately() {
    let anim = CounterAnimation::starting_at(42.0, 0.0, 10.0);
    let f = anim.sample(10.0);
    assert_eq!(f.text, "42");
    assert!(f.finished);
}

#[test]
fn integer_format_rounds_half_up() {
    assert_eq!(format_count(2.5, CountFormat::Integer), "3");
    assert_eq!(format_count(2.49, CountFormat::Integer), "2");
    assert_eq!(format_count(7.0, CountFormat::OneDecimal), "7.0");
}

#[test]
fn one_decimal_format_rounds_ties_up() {
    assert_eq!(format_count(2.25, CountFormat::OneDecimal), "2.3");
    assert_eq!(format_count(0.25, CountFormat::OneDecimal), "0.3");
    assert_eq!(format_count(0.24, CountFormat::OneDecimal), "0.2");
    let anim = CounterAnimation::starting_at(2.25, 1000.0, 0.0);
    assert_eq!(anim.sample(1000.0).text, "2.3");
}

#[test]
fn count_target_reads_leading_number() {
    assert_eq!(parse_count_target("500+"), Some(500.0));
    assert_eq!(parse_count_target("  98.6%"), Some(98.6));
    assert_eq!(parse_count_target("-3 days"), Some(-3.0));
    assert_eq!(parse_count_target(".5x"), Some(0.5));
    assert_eq!(parse_count_target("2e3 reps"), Some(2000.0));
    assert_eq!(parse_count_target("1e"), Some(1.0));
    assert_eq!(parse_count_target("+"), None);
    assert_eq!(parse_count_target("x500"), None);
    assert_eq!(parse_count_target("1e400"), None);
}

#[test]
fn count_target_parsing() {
    assert_eq!(parse_count_target("12.5"), Some(12.5));
    assert_eq!(parse_count_target(" 300 "), Some(300.0));
    assert_eq!(parse_count_target(""), None);
    assert_eq!(parse_count_target("lots"), None);
    assert_eq!(parse_count_target("inf"), None);
    assert_eq!(parse_count_target("NaN"), None);
}

#[test]
fn reveal_trigger_marks_every_crossing() {
    let mut t = ViewportTrigger::new(WatchConfig::reveal().mode);
    assert_eq!(t.observe(false), TriggerAction::Ignore);
    assert_eq!(t.observe(true), TriggerAction::MarkVisible);
    assert_eq!(t.observe(true), TriggerAction::MarkVisible);
    assert!(t.is_armed());
}

#[test]
fn counter_trigger_fires_once() {
    let mut t = ViewportTrigger::new(WatchConfig::counter().mode);
    assert_eq!(t.observe(false), TriggerAction::Ignore);
    assert_eq!(t.observe(true), TriggerAction::FireAndDetach);
    assert!(!t.is_armed());
    // re-entering the viewport does not restart the counter
    assert_eq!(t.observe(false), TriggerAction::Ignore);
    assert_eq!(t.observe(true), TriggerAction::Ignore);
}

#[test]
fn watch_presets() {
    let reveal = WatchConfig::reveal();
    assert_eq!(reveal.threshold, 0.12);
    assert_eq!(reveal.root_margin, Some("0px 0px -40px 0px"));
    assert_eq!(reveal.mode, TriggerMode::Persistent);

    let counter = WatchConfig::counter();
    assert_eq!(counter.threshold, 0.5);
    assert_eq!(counter.root_margin, None);
    assert_eq!(counter.mode, TriggerMode::Once);
}
