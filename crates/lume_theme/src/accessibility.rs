//! Accessibility-driven theme derivation
//!
//! The host platform reports four accessibility signals; [`derive`] maps them
//! onto a [`ThemeState`]. The mapping is pure and total.
//!
//! Entering the accessible branch (high contrast or assistive navigation)
//! forces dark mode and a larger font scale. Leaving it does not revert them:
//! mode and scale stay where the last accessible update put them until the
//! user changes them explicitly.

use crate::state::ThemeState;
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};

/// Font scale applied when accessibility forces the theme
pub const ACCESSIBLE_FONT_SCALE: f32 = 1.1;
/// Font scale applied when accessibility forces the theme and bold text is requested
pub const BOLD_TEXT_FONT_SCALE: f32 = 1.2;

/// Platform accessibility flags, as reported by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySignals {
    /// Stronger visual contrast requested
    pub high_contrast: bool,
    /// An assistive input/output modality (screen reader, switch access) is active
    pub accessible_navigation_active: bool,
    /// Non-essential animation should be suppressed
    pub reduce_motion_requested: bool,
    /// Bold text requested
    pub bold_text_requested: bool,
}

impl AccessibilitySignals {
    /// True when the signals force the accessible theme
    pub fn forces_accessible_theme(&self) -> bool {
        self.high_contrast || self.accessible_navigation_active
    }
}

/// Compute the next theme state from platform signals and the previous state
pub fn derive(signals: &AccessibilitySignals, previous: &ThemeState) -> ThemeState {
    let mut next = previous
        .with_reduce_motion(signals.reduce_motion_requested)
        .with_high_contrast(signals.high_contrast);

    if signals.forces_accessible_theme() {
        let scale = if signals.bold_text_requested {
            BOLD_TEXT_FONT_SCALE
        } else {
            ACCESSIBLE_FONT_SCALE
        };
        next = next.with_mode(ThemeMode::Dark).with_font_scale(scale);
    }

    next
}
