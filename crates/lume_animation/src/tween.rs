//! Tweens map controller progress onto concrete values

use crate::controller::AnimationController;
use crate::easing::Easing;
use lume_core::Lerp;

/// Interpolates from `begin` to `end` through an easing curve
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    pub begin: T,
    pub end: T,
    pub easing: Easing,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(begin: T, end: T) -> Self {
        Self {
            begin,
            end,
            easing: Easing::Linear,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Value at raw progress `t`
    pub fn transform(&self, t: f32) -> T {
        T::lerp(&self.begin, &self.end, self.easing.apply(t))
    }

    /// Value at the controller's current progress
    pub fn evaluate(&self, controller: &AnimationController) -> T {
        self.transform(controller.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lume_core::Color;
    use std::time::Duration;

    #[test]
    fn linear_tween_tracks_controller() {
        let tween = Tween::new(10.0_f32, 20.0);
        let mut controller = AnimationController::new(Duration::from_secs(1));
        assert_eq!(tween.evaluate(&controller), 10.0);

        controller.set_value(0.5);
        assert!((tween.evaluate(&controller) - 15.0).abs() < 1e-5);

        controller.set_value(1.0);
        assert_eq!(tween.evaluate(&controller), 20.0);
    }

    #[test]
    fn color_tween_applies_easing() {
        let tween = Tween::new(Color::BLACK, Color::WHITE).easing(Easing::EaseIn);
        let mid = tween.transform(0.5);
        // ease-in cubic: 0.5^3
        assert!((mid.r - 0.125).abs() < 1e-5);
        assert_eq!(mid.a, 1.0);
    }
}
