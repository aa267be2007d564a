//! Lume Core
//!
//! Foundational primitives shared by the Lume theming crates:
//!
//! - **Colors**: RGBA color values, hex parsing, WCAG contrast math
//! - **Interpolation**: the [`Lerp`] trait used by tweens and theme transitions
//! - **Change notification**: an explicit, synchronous listener registry
//!
//! # Example
//!
//! ```rust
//! use lume_core::{Color, Notifier};
//!
//! let mut notifier = Notifier::new();
//! let id = notifier.subscribe(|color: &Color| {
//!     assert_eq!(*color, Color::from_hex(0x1E66F5));
//! });
//!
//! notifier.notify(&Color::from_hex(0x1E66F5));
//! assert_eq!(notifier.revision(), 1);
//! assert!(notifier.unsubscribe(id));
//! ```

pub mod color;
pub mod lerp;
pub mod notifier;

pub use color::{Color, ColorParseError};
pub use lerp::Lerp;
pub use notifier::{ListenerId, Notifier};
