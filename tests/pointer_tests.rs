// Host-side tests for pointer-driven effects: tilt, magnetic, spotlight, cursor.

use apex_core::*;
use glam::Vec2;

fn card() -> Bounds {
    Bounds::new(40.0, 80.0, 200.0, 100.0)
}

#[test]
fn tilt_is_neutral_at_center() {
    let t = tilt(card(), card().center());
    assert_eq!(t.rotate_y_deg, 0.0);
    assert_eq!(t.rotate_x_deg, 0.0);
    assert_eq!(
        t.to_patch().get(StyleProp::Transform),
        Some(Some("perspective(800px) rotateY(0deg) rotateX(0deg)"))
    );
}

#[test]
fn tilt_stays_within_limits_inside_bounds() {
    let b = card();
    for ix in 0..=20 {
        for iy in 0..=10 {
            let p = b.origin + Vec2::new(ix as f32 * 10.0, iy as f32 * 10.0);
            let t = tilt(b, p);
            assert!(t.rotate_y_deg.abs() <= TILT_MAX_Y_DEG, "{p:?} -> {t:?}");
            assert!(t.rotate_x_deg.abs() <= TILT_MAX_X_DEG, "{p:?} -> {t:?}");
        }
    }
}

#[test]
fn tilt_follows_pointer_direction() {
    let b = card();
    // right edge, vertically centered
    let right = tilt(b, Vec2::new(240.0, 130.0));
    assert_eq!(right.rotate_y_deg, 7.0);
    assert_eq!(right.rotate_x_deg, 0.0);
    // top-left corner tips the card back and to the left
    let corner = tilt(b, b.origin);
    assert_eq!(corner.rotate_y_deg, -7.0);
    assert_eq!(corner.rotate_x_deg, 5.0);
}

#[test]
fn tilt_limits_are_per_unit_of_offset() {
    let b = card();
    // an edge is half a unit from the center
    assert_eq!(tilt(b, Vec2::new(240.0, 130.0)).rotate_y_deg, TILT_MAX_Y_DEG / 2.0);
    assert_eq!(tilt(b, Vec2::new(140.0, 80.0)).rotate_x_deg, TILT_MAX_X_DEG / 2.0);
    assert_eq!(tilt(b, Vec2::new(140.0, 180.0)).rotate_x_deg, -TILT_MAX_X_DEG / 2.0);
}

#[test]
fn tilt_on_collapsed_element_is_neutral() {
    let t = tilt(Bounds::new(0.0, 0.0, 0.0, 50.0), Vec2::new(3.0, 4.0));
    assert_eq!(t, Tilt::NEUTRAL);
}

#[test]
fn reset_clears_transform() {
    assert_eq!(reset_transform().get(StyleProp::Transform), Some(None));
}

#[test]
fn magnetic_pulls_a_quarter_of_the_offset() {
    let b = Bounds::new(10.0, 20.0, 100.0, 40.0);
    let offset = magnetic_offset(b, Vec2::new(100.0, 60.0));
    assert_eq!(offset, Vec2::new(10.0, 5.0));
    assert_eq!(
        magnetic_patch(offset).get(StyleProp::Transform),
        Some(Some("translate(10px, 5px)"))
    );
    assert_eq!(magnetic_offset(b, b.center()), Vec2::ZERO);
}

#[test]
fn spotlight_publishes_percentages() {
    let b = Bounds::new(0.0, 0.0, 200.0, 100.0);
    let pct = spotlight(b, Vec2::new(50.0, 25.0)).unwrap();
    let patch = spotlight_patch(pct);
    assert_eq!(patch.get(StyleProp::MouseX), Some(Some("25%")));
    assert_eq!(patch.get(StyleProp::MouseY), Some(Some("25%")));
    assert_eq!(StyleProp::MouseX.css_name(), "--mouse-x");
    assert!(spotlight(Bounds::new(0.0, 0.0, 0.0, 0.0), Vec2::ZERO).is_none());
}

#[test]
fn cursor_starts_offscreen() {
    let trail = CursorTrail::default();
    assert_eq!(trail.pointer(), Vec2::new(-100.0, -100.0));
    assert_eq!(trail.ring(), Vec2::new(-100.0, -100.0));
}

#[test]
fn cursor_dot_is_exact_and_ring_trails() {
    let mut trail = CursorTrail::default();
    trail.pointer_moved(Vec2::new(100.0, 100.0));
    let f = trail.step();
    assert_eq!(f.dot, Vec2::new(100.0, 100.0));
    // one frame covers 12% of the gap
    assert!((f.ring.x - -76.0).abs() < 1e-3, "{:?}", f.ring);
    assert!((f.ring.y - -76.0).abs() < 1e-3, "{:?}", f.ring);
    assert_eq!(f.dot_patch().get(StyleProp::Left), Some(Some("100px")));
}

#[test]
fn cursor_ring_converges_without_overshoot() {
    let mut trail = CursorTrail::default();
    let target = Vec2::new(300.0, 150.0);
    trail.pointer_moved(target);
    let mut prev_gap = f32::MAX;
    for _ in 0..200 {
        let f = trail.step();
        let gap = (target - f.ring).length();
        assert!(gap <= prev_gap);
        assert!(f.ring.x <= target.x && f.ring.y <= target.y);
        prev_gap = gap;
    }
    assert!(prev_gap < 0.01, "ring still {prev_gap}px away");
}

#[test]
fn cursor_leaving_parks_the_dot() {
    let mut trail = CursorTrail::default();
    trail.pointer_moved(Vec2::new(10.0, 10.0));
    trail.pointer_left();
    assert_eq!(trail.step().dot, Vec2::new(-100.0, -100.0));
}
