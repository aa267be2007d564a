//! Theme state
//!
//! A small, copyable value describing what the user sees: mode, contrast,
//! text scale and motion. It is owned by a [`crate::ThemeManager`]; everything
//! else receives copies through change notifications.

use crate::theme::ThemeMode;

/// Smallest allowed font scale
pub const MIN_FONT_SCALE: f32 = 0.8;
/// Largest allowed font scale
pub const MAX_FONT_SCALE: f32 = 1.5;

/// Clamp a requested font scale into `MIN_FONT_SCALE..=MAX_FONT_SCALE`.
///
/// NaN has no position on the scale and maps to `1.0`.
pub fn clamp_font_scale(value: f32) -> f32 {
    if value.is_nan() {
        return 1.0;
    }
    value.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
}

/// Current appearance settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeState {
    mode: ThemeMode,
    high_contrast_enabled: bool,
    /// Always within `MIN_FONT_SCALE..=MAX_FONT_SCALE`
    font_scale: f32,
    reduce_motion: bool,
}

impl ThemeState {
    pub fn new(
        mode: ThemeMode,
        high_contrast_enabled: bool,
        font_scale: f32,
        reduce_motion: bool,
    ) -> Self {
        Self {
            mode,
            high_contrast_enabled,
            font_scale: clamp_font_scale(font_scale),
            reduce_motion,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn high_contrast_enabled(&self) -> bool {
        self.high_contrast_enabled
    }

    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }

    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast_enabled = enabled;
        self
    }

    /// Set the font scale, clamped
    pub fn with_font_scale(mut self, scale: f32) -> Self {
        self.font_scale = clamp_font_scale(scale);
        self
    }

    pub fn with_reduce_motion(mut self, reduce: bool) -> Self {
        self.reduce_motion = reduce;
        self
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            high_contrast_enabled: false,
            font_scale: 1.0,
            reduce_motion: false,
        }
    }
}
