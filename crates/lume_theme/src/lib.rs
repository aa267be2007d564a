//! Lume Theme System
//!
//! Design tokens, accessibility-aware theme state, and the style sheets the
//! renderer consumes.
//!
//! # Overview
//!
//! - **Design tokens**: colors, typography, spacing, radii, motion
//! - **Style table**: light/dark × normal/high-contrast sheets, built once
//! - **Theme state**: mode, high contrast, font scale, reduced motion
//! - **Accessibility mapping**: platform signals to theme state, see [`derive`]
//! - **Change notification**: [`ThemeManager`] notifies subscribers on every update
//!
//! # Quick Start
//!
//! ```rust
//! use lume_theme::{AccessibilitySignals, ColorToken, ThemeManager, ThemeMode};
//!
//! let mut theme = ThemeManager::default();
//! theme.subscribe(|state| println!("theme changed: {state:?}"));
//!
//! theme.update_from_system(&AccessibilitySignals {
//!     high_contrast: true,
//!     ..Default::default()
//! });
//! assert_eq!(theme.mode(), ThemeMode::Dark);
//!
//! let sheet = theme.style_sheet();
//! let background = sheet.color(ColorToken::Background);
//! assert_eq!(background.to_css(), "#000000");
//! ```
//!
//! # Configuration
//!
//! [`ThemeConfig`] reads the initial state and per-sheet color overrides from
//! TOML. See the [`config`] module.

pub mod accessibility;
pub mod config;
pub mod error;
pub mod manager;
pub mod state;
pub mod style;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use accessibility::{derive, AccessibilitySignals};
pub use config::{ColorOverrides, ThemeConfig};
pub use error::{Result, ThemeError};
pub use manager::ThemeManager;
pub use state::{clamp_font_scale, ThemeState, MAX_FONT_SCALE, MIN_FONT_SCALE};
pub use style::{StyleSheet, StyleTable};
pub use theme::{Brightness, ThemeMode};
pub use tokens::*;
