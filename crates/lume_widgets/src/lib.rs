//! Lume Widget Helpers
//!
//! Widgets here describe what to draw; turning a description into pixels is
//! the host renderer's job.
//!
//! - [`AnimatedBuilder`]: rebuilds a value whenever an animation changes
//! - [`BrandLogo`]: the brand mark and wordmark, styled from a style sheet

pub mod animated_builder;
pub mod logo;
pub mod widget;

pub use animated_builder::AnimatedBuilder;
pub use logo::{BrandLogo, LogoLayout, LogoSize, LogoVariant, Wordmark};
pub use widget::Widget;
