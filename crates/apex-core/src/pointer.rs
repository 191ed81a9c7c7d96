use crate::constants::{MAGNETIC_PULL, TILT_MAX_X_DEG, TILT_MAX_Y_DEG, TILT_PERSPECTIVE_PX};
use crate::style::{css_num, StyleProp, StylePatch};
use glam::Vec2;

/// Element bounds in client pixels, read fresh on every event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    /// Pointer position as a fraction of the bounds (0..1 inside).
    #[inline]
    pub fn relative(&self, pointer: Vec2) -> Option<Vec2> {
        if self.is_degenerate() {
            return None;
        }
        Some((pointer - self.origin) / self.size)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_y_deg: f32,
    pub rotate_x_deg: f32,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_y_deg: 0.0,
        rotate_x_deg: 0.0,
    };

    pub fn to_patch(self) -> StylePatch {
        StylePatch::new().set(
            StyleProp::Transform,
            format!(
                "perspective({}px) rotateY({}deg) rotateX({}deg)",
                css_num(TILT_PERSPECTIVE_PX),
                css_num(self.rotate_y_deg),
                css_num(self.rotate_x_deg)
            ),
        )
    }
}

/// Rotation proportional to the pointer offset from the element center.
pub fn tilt(bounds: Bounds, pointer: Vec2) -> Tilt {
    let Some(rel) = bounds.relative(pointer) else {
        return Tilt::NEUTRAL;
    };
    let n = (rel - Vec2::splat(0.5)).clamp(Vec2::splat(-0.5), Vec2::splat(0.5));
    Tilt {
        rotate_y_deg: n.x * TILT_MAX_Y_DEG + 0.0,
        rotate_x_deg: -n.y * TILT_MAX_X_DEG + 0.0,
    }
}

/// Clears the inline transform; shared by tilt and magnetic on pointer exit.
pub fn reset_transform() -> StylePatch {
    StylePatch::new().clear(StyleProp::Transform)
}

/// Translation pulling the element toward the pointer.
pub fn magnetic_offset(bounds: Bounds, pointer: Vec2) -> Vec2 {
    if bounds.is_degenerate() {
        return Vec2::ZERO;
    }
    (pointer - bounds.center()) * MAGNETIC_PULL
}

pub fn magnetic_patch(offset: Vec2) -> StylePatch {
    StylePatch::new().set(
        StyleProp::Transform,
        format!("translate({}px, {}px)", css_num(offset.x), css_num(offset.y)),
    )
}

/// Pointer position in percent of the bounds, for the spotlight gradient.
pub fn spotlight(bounds: Bounds, pointer: Vec2) -> Option<Vec2> {
    bounds.relative(pointer).map(|rel| rel * 100.0)
}

pub fn spotlight_patch(percent: Vec2) -> StylePatch {
    StylePatch::new()
        .set(StyleProp::MouseX, format!("{}%", css_num(percent.x)))
        .set(StyleProp::MouseY, format!("{}%", css_num(percent.y)))
}
