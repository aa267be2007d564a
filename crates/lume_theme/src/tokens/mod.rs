//! Design tokens
//!
//! The atomic values a style sheet is made of:
//! - Colors
//! - Typography (family, sizes, weights)
//! - Spacing
//! - Border radii
//! - Motion durations and easing

mod color;
mod motion;
mod radius;
mod spacing;
mod typography;

pub use color::*;
pub use motion::*;
pub use radius::*;
pub use spacing::*;
pub use typography::*;
