// Host-side tests for the before/after slider.

use apex_core::*;

fn container() -> Bounds {
    Bounds::new(100.0, 0.0, 200.0, 50.0)
}

#[test]
fn fraction_clamps_outside_container() {
    let b = container();
    assert_eq!(fraction_at(b, 150.0), Some(0.25));
    assert_eq!(fraction_at(b, 300.0), Some(1.0));
    for x in [-5000.0, -1.0, 0.0, 99.9] {
        assert_eq!(fraction_at(b, x), Some(0.0), "x={x}");
    }
    for x in [300.1, 1000.0, 1e9] {
        assert_eq!(fraction_at(b, x), Some(1.0), "x={x}");
    }
}

#[test]
fn zero_width_container_is_ignored() {
    assert_eq!(fraction_at(Bounds::new(0.0, 0.0, 0.0, 10.0), 5.0), None);
}

#[test]
fn patches_clip_complementary_regions() {
    let p = SliderPatches::for_fraction(0.25);
    assert_eq!(
        p.before.get(StyleProp::ClipPath),
        Some(Some("inset(0 75% 0 0)"))
    );
    assert_eq!(
        p.after.get(StyleProp::ClipPath),
        Some(Some("inset(0 0 0 25%)"))
    );
    assert_eq!(p.handle.get(StyleProp::Left), Some(Some("25%")));
}

#[test]
fn moves_only_count_while_dragging() {
    let b = container();
    let mut s = SliderState::default();
    assert_eq!(s.fraction(), 0.5);
    assert!(s.drag(b, 120.0).is_none());
    assert_eq!(s.fraction(), 0.5);

    assert!(s.press(b, 200.0).is_some());
    assert!(s.is_dragging());
    assert_eq!(s.fraction(), 0.5);

    // dragging past the edge of the container keeps tracking, clamped
    let p = s.drag(b, 900.0).unwrap();
    assert_eq!(s.fraction(), 1.0);
    assert_eq!(p.handle.get(StyleProp::Left), Some(Some("100%")));

    s.release();
    assert!(!s.is_dragging());
    assert!(s.drag(b, 150.0).is_none());
    assert_eq!(s.fraction(), 1.0);
}
