//! Easing curves

/// Easing curve applied to linear animation progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material "standard" curve, `cubic-bezier(0.4, 0.0, 0.2, 1.0)`
    FastOutSlowIn,
    /// `cubic-bezier(0.0, 0.0, 0.2, 1.0)`
    Decelerate,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Map progress in `0.0..=1.0` through the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::FastOutSlowIn => cubic_bezier(t, 0.4, 0.0, 0.2, 1.0),
            Easing::Decelerate => cubic_bezier(t, 0.0, 0.0, 0.2, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// CSS-style cubic bezier with fixed endpoints (0,0) and (1,1).
///
/// Finds the curve parameter for `x` by Newton iteration, bisecting when the
/// slope flattens out. Computed in f64.
fn cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let target = f64::from(x);
    let curve_x = Cubic::new(f64::from(x1), f64::from(x2));
    let curve_y = Cubic::new(f64::from(y1), f64::from(y2));

    let mut p = target;
    for _ in 0..8 {
        let err = curve_x.sample(p) - target;
        if err.abs() < 1e-7 {
            return curve_y.sample(p) as f32;
        }
        let slope = curve_x.slope(p);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = target;
    for _ in 0..24 {
        let value = curve_x.sample(p);
        if (value - target).abs() < 1e-7 {
            break;
        }
        if value < target {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    curve_y.sample(p) as f32
}

/// One axis of a cubic bezier in polynomial form `((a*t + b)*t + c)*t`
struct Cubic {
    a: f64,
    b: f64,
    c: f64,
}

impl Cubic {
    fn new(p1: f64, p2: f64) -> Self {
        Self {
            a: 1.0 - 3.0 * p2 + 3.0 * p1,
            b: 3.0 * p2 - 6.0 * p1,
            c: 3.0 * p1,
        }
    }

    #[inline]
    fn sample(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    #[inline]
    fn slope(&self, t: f64) -> f64 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
        Easing::Decelerate,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 1..=50 {
                let value = easing.apply(step as f32 / 50.0);
                assert!(value + 1e-5 >= last, "{easing:?} decreased at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn linear_bezier_matches_linear() {
        let bezier = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            assert!((bezier.apply(t) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::EaseOut.apply(-1.0), 0.0);
        assert!((Easing::EaseIn.apply(2.0) - 1.0).abs() < 1e-6);
    }
}
