//! Animated builder
//!
//! Wraps a builder closure and re-runs it only when the controller it watches
//! has notified since the last build. Hosts call [`AnimatedBuilder::build`]
//! every frame; unchanged animations return the cached output. Passing a
//! different controller always rebuilds.

use lume_animation::{AnimationController, ControllerId};

/// Caches the output of `builder` per controller and revision
pub struct AnimatedBuilder<T, F>
where
    F: FnMut(&AnimationController) -> T,
{
    builder: F,
    cached: Option<(ControllerId, u64, T)>,
    builds: u64,
}

impl<T, F> AnimatedBuilder<T, F>
where
    F: FnMut(&AnimationController) -> T,
{
    pub fn new(builder: F) -> Self {
        Self {
            builder,
            cached: None,
            builds: 0,
        }
    }

    /// Current output, rebuilt if the controller changed since the last call
    pub fn build(&mut self, controller: &AnimationController) -> &T {
        let id = controller.id();
        let revision = controller.revision();
        let stale = match &self.cached {
            Some((built_for, built_at, _)) => *built_for != id || *built_at != revision,
            None => false,
        };
        if stale {
            self.cached = None;
        }

        let builder = &mut self.builder;
        let builds = &mut self.builds;
        let (_, _, output) = self.cached.get_or_insert_with(|| {
            tracing::trace!(?id, revision, "AnimatedBuilder: rebuilding");
            *builds += 1;
            (id, revision, builder(controller))
        });
        output
    }

    /// Drop the cached output so the next build always runs the closure
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// How many times the closure has run
    pub fn build_count(&self) -> u64 {
        self.builds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lume_animation::Tween;
    use std::time::Duration;

    #[test]
    fn rebuilds_only_on_change() {
        let mut controller = AnimationController::new(Duration::from_secs(1));
        let opacity = Tween::new(0.0_f32, 1.0);
        let mut builder = AnimatedBuilder::new(move |c: &AnimationController| opacity.evaluate(c));

        assert_eq!(*builder.build(&controller), 0.0);
        assert_eq!(*builder.build(&controller), 0.0);
        assert_eq!(builder.build_count(), 1);

        controller.forward();
        controller.tick(Duration::from_millis(500));
        assert!((*builder.build(&controller) - 0.5).abs() < 1e-4);
        assert_eq!(builder.build_count(), 2);
    }

    #[test]
    fn invalidate_forces_rebuild() {
        let controller = AnimationController::new(Duration::from_secs(1));
        let mut builder = AnimatedBuilder::new(|c: &AnimationController| c.value());

        builder.build(&controller);
        builder.invalidate();
        builder.build(&controller);
        assert_eq!(builder.build_count(), 2);
    }
}
