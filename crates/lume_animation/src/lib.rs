//! Lume Animation
//!
//! Small, host-driven animation helpers:
//!
//! - **Easing**: standard curves plus arbitrary cubic beziers
//! - **Controllers**: progress values advanced by the host's frame loop, with
//!   change notification and reduced-motion support
//! - **Tweens**: map progress onto any [`lume_core::Lerp`] value
//!
//! Scheduling frames is the host's job; controllers only expose
//! [`AnimationController::tick`].

pub mod controller;
pub mod easing;
pub mod tween;

pub use controller::{AnimationController, AnimationStatus, ControllerId};
pub use easing::Easing;
pub use tween::Tween;
