//! Interpolation between values

use crate::color::Color;

/// Values that can be linearly interpolated
///
/// `t` is expected in `0.0..=1.0` but is not clamped, so easing curves that
/// overshoot produce overshooting values.
pub trait Lerp: Sized {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Color {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Color::lerp(from, to, t)
    }
}

impl<A: Lerp, B: Lerp> Lerp for (A, B) {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        (A::lerp(&from.0, &to.0, t), B::lerp(&from.1, &to.1, t))
    }
}
