//! Animation controller
//!
//! Drives a progress value between `0.0` and `1.0` over a fixed duration.
//! The controller does not own a clock: the host calls [`AnimationController::tick`]
//! from its frame loop. Every change to the value is published through a
//! [`Notifier`], which is what builders listen to.

use lume_core::{ListenerId, Notifier};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_CONTROLLER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`AnimationController`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct ControllerId(u64);

impl ControllerId {
    fn next() -> Self {
        Self(NEXT_CONTROLLER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Where the controller is in its run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationStatus {
    /// Stopped at the beginning (value 0.0)
    #[default]
    Dismissed,
    /// Running towards 1.0
    Forward,
    /// Running towards 0.0
    Reverse,
    /// Stopped at the end (value 1.0)
    Completed,
}

impl AnimationStatus {
    pub fn is_running(self) -> bool {
        matches!(self, Self::Forward | Self::Reverse)
    }
}

/// Progress driver for a single animation
pub struct AnimationController {
    id: ControllerId,
    duration: Duration,
    reverse_duration: Option<Duration>,
    value: f32,
    status: AnimationStatus,
    /// When set, runs complete immediately instead of animating
    reduce_motion: bool,
    notifier: Notifier<f32>,
}

impl AnimationController {
    pub fn new(duration: Duration) -> Self {
        Self {
            id: ControllerId::next(),
            duration,
            reverse_duration: None,
            value: 0.0,
            status: AnimationStatus::Dismissed,
            reduce_motion: false,
            notifier: Notifier::new(),
        }
    }

    /// Use a different duration when running in reverse
    pub fn with_reverse_duration(mut self, duration: Duration) -> Self {
        self.reverse_duration = Some(duration);
        self
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    pub fn is_animating(&self) -> bool {
        self.status.is_running()
    }

    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }

    /// Honor a reduced-motion preference. A run in progress jumps to its end.
    pub fn set_reduce_motion(&mut self, reduce: bool) {
        self.reduce_motion = reduce;
        if reduce {
            match self.status {
                AnimationStatus::Forward => self.finish(1.0, AnimationStatus::Completed),
                AnimationStatus::Reverse => self.finish(0.0, AnimationStatus::Dismissed),
                _ => {}
            }
        }
    }

    /// Start running towards 1.0
    pub fn forward(&mut self) {
        if self.reduce_motion || self.duration.is_zero() || self.value >= 1.0 {
            self.finish(1.0, AnimationStatus::Completed);
            return;
        }
        tracing::trace!(from = self.value, "AnimationController::forward");
        self.status = AnimationStatus::Forward;
    }

    /// Start running towards 0.0
    pub fn reverse(&mut self) {
        let duration = self.reverse_duration.unwrap_or(self.duration);
        if self.reduce_motion || duration.is_zero() || self.value <= 0.0 {
            self.finish(0.0, AnimationStatus::Dismissed);
            return;
        }
        tracing::trace!(from = self.value, "AnimationController::reverse");
        self.status = AnimationStatus::Reverse;
    }

    /// Stop and return to 0.0
    pub fn reset(&mut self) {
        self.finish(0.0, AnimationStatus::Dismissed);
    }

    /// Stop where the value currently is
    pub fn stop(&mut self) {
        if self.status.is_running() {
            self.status = if self.value >= 1.0 {
                AnimationStatus::Completed
            } else {
                AnimationStatus::Dismissed
            };
        }
    }

    /// Jump to a value (clamped to `0.0..=1.0`) and stop
    pub fn set_value(&mut self, value: f32) {
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        let status = if value >= 1.0 {
            AnimationStatus::Completed
        } else {
            AnimationStatus::Dismissed
        };
        self.finish(value, status);
    }

    /// Advance by `dt`. Returns true while the controller still needs frames.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let (duration, direction) = match self.status {
            AnimationStatus::Forward => (self.duration, 1.0),
            AnimationStatus::Reverse => (self.reverse_duration.unwrap_or(self.duration), -1.0),
            _ => return false,
        };

        let step = dt.as_secs_f32() / duration.as_secs_f32();
        let next = self.value + step * direction;
        tracing::trace!(value = next, "AnimationController::tick");

        if next >= 1.0 {
            self.finish(1.0, AnimationStatus::Completed);
            false
        } else if next <= 0.0 {
            self.finish(0.0, AnimationStatus::Dismissed);
            false
        } else {
            self.value = next;
            self.notifier.notify(&self.value);
            true
        }
    }

    /// Listen to value changes
    pub fn subscribe(&mut self, listener: impl FnMut(&f32) + 'static) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Number of value notifications emitted so far
    pub fn revision(&self) -> u64 {
        self.notifier.revision()
    }

    fn finish(&mut self, value: f32, status: AnimationStatus) {
        self.status = status;
        if self.value != value {
            self.value = value;
            self.notifier.notify(&self.value);
        }
    }
}

impl std::fmt::Debug for AnimationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationController")
            .field("id", &self.id)
            .field("duration", &self.duration)
            .field("value", &self.value)
            .field("status", &self.status)
            .field("reduce_motion", &self.reduce_motion)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn forward_runs_to_completion() {
        let mut controller = AnimationController::new(Duration::from_millis(160));
        controller.forward();
        assert_eq!(controller.status(), AnimationStatus::Forward);

        let mut frames = 0;
        while controller.tick(FRAME) {
            frames += 1;
            assert!(frames < 100, "controller never completed");
        }

        assert_eq!(controller.value(), 1.0);
        assert_eq!(controller.status(), AnimationStatus::Completed);
    }

    #[test]
    fn reverse_uses_its_own_duration() {
        let mut controller = AnimationController::new(Duration::from_secs(1))
            .with_reverse_duration(Duration::from_millis(100));
        controller.set_value(1.0);
        controller.reverse();

        assert!(controller.tick(Duration::from_millis(50)));
        assert!((controller.value() - 0.5).abs() < 1e-4);
        assert!(!controller.tick(Duration::from_millis(60)));
        assert_eq!(controller.status(), AnimationStatus::Dismissed);
    }

    #[test]
    fn reduce_motion_skips_to_the_end() {
        let mut controller = AnimationController::new(Duration::from_millis(300));
        controller.set_reduce_motion(true);
        controller.forward();

        assert_eq!(controller.value(), 1.0);
        assert_eq!(controller.status(), AnimationStatus::Completed);
        assert!(!controller.tick(FRAME));
    }

    #[test]
    fn enabling_reduce_motion_mid_run_completes_it() {
        let mut controller = AnimationController::new(Duration::from_millis(300));
        controller.forward();
        controller.tick(FRAME);
        controller.set_reduce_motion(true);

        assert_eq!(controller.value(), 1.0);
        assert!(!controller.is_animating());
    }

    #[test]
    fn every_value_change_notifies() {
        let seen = Rc::new(Cell::new(0));
        let mut controller = AnimationController::new(Duration::from_secs(1));
        let counter = seen.clone();
        controller.subscribe(move |_| counter.set(counter.get() + 1));

        controller.forward();
        while controller.tick(Duration::from_millis(250)) {}

        // Quarter steps: 3 intermediate values plus the final one
        assert_eq!(seen.get(), 4);
        assert_eq!(controller.revision(), 4);
    }

    #[test]
    fn stop_holds_the_current_value() {
        let mut controller = AnimationController::new(Duration::from_secs(1));
        controller.forward();
        controller.tick(Duration::from_millis(500));
        controller.stop();

        assert_eq!(controller.status(), AnimationStatus::Dismissed);
        assert!((controller.value() - 0.5).abs() < 1e-4);
        assert!(!controller.tick(FRAME));
        assert!((controller.value() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn controllers_have_distinct_ids() {
        let a = AnimationController::new(FRAME);
        let b = AnimationController::new(FRAME);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn set_value_clamps() {
        let mut controller = AnimationController::new(FRAME);
        controller.set_value(3.0);
        assert_eq!(controller.value(), 1.0);
        controller.set_value(-1.0);
        assert_eq!(controller.value(), 0.0);
        controller.set_value(f32::NAN);
        assert_eq!(controller.value(), 0.0);
    }
}
