//! Motion tokens for theming

use lume_animation::Easing;
use std::time::Duration;

/// Semantic duration token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum MotionToken {
    Fast,
    Normal,
    Slow,
}

/// Durations and the default easing for transitions
#[derive(Clone, Debug, PartialEq)]
pub struct MotionTokens {
    pub fast: Duration,
    pub normal: Duration,
    pub slow: Duration,
    pub easing: Easing,
}

impl MotionTokens {
    /// Get a duration by token key
    pub fn get(&self, token: MotionToken) -> Duration {
        match token {
            MotionToken::Fast => self.fast,
            MotionToken::Normal => self.normal,
            MotionToken::Slow => self.slow,
        }
    }

    /// Tokens for the reduced-motion preference: every transition is instant
    pub fn reduced() -> Self {
        Self {
            fast: Duration::ZERO,
            normal: Duration::ZERO,
            slow: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    pub fn is_reduced(&self) -> bool {
        self.fast.is_zero() && self.normal.is_zero() && self.slow.is_zero()
    }
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self {
            fast: Duration::from_millis(150),
            normal: Duration::from_millis(250),
            slow: Duration::from_millis(400),
            easing: Easing::FastOutSlowIn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_token() {
        let motion = MotionTokens::default();
        assert_eq!(motion.get(MotionToken::Fast), Duration::from_millis(150));
        assert_eq!(motion.get(MotionToken::Normal), Duration::from_millis(250));
        assert_eq!(motion.get(MotionToken::Slow), Duration::from_millis(400));
        assert!(!motion.is_reduced());
    }

    #[test]
    fn reduced_motion_is_instant() {
        let motion = MotionTokens::reduced();
        assert!(motion.is_reduced());
        assert!(motion.get(MotionToken::Slow).is_zero());
    }
}
