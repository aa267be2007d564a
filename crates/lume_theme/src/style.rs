//! Style sheets and the token table
//!
//! A [`StyleSheet`] is the record the renderer consumes. The four base sheets
//! (light/dark × normal/high contrast) live in a [`StyleTable`] that is built
//! once and shared; per-state adjustments (font scale, reduced motion) are
//! applied by [`StyleTable::resolve`] on a copy, never on the table.

use crate::config::ColorOverrides;
use crate::state::ThemeState;
use crate::theme::Brightness;
use crate::themes::build_sheet;
use crate::tokens::*;
use lume_core::Color;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Process-wide built-in table
static BUILTIN_TABLE: OnceLock<Arc<StyleTable>> = OnceLock::new();

/// Colors, typography and shape for one appearance
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    pub brightness: Brightness,
    pub high_contrast: bool,
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub radii: RadiusTokens,
    pub motion: MotionTokens,
    /// Stroke width for borders and dividers
    pub border_width: f32,
}

impl StyleSheet {
    pub fn is_light(&self) -> bool {
        self.brightness.is_light()
    }

    /// Get a color token value
    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    /// Get a text style
    pub fn text(&self, token: TypographyToken) -> TextStyle {
        self.typography.get(token)
    }

    pub fn spacing(&self, token: SpacingToken) -> f32 {
        self.spacing.get(token)
    }

    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.radii.get(token)
    }

    /// Map of color variable names to CSS color strings.
    ///
    /// Keys are the token names without a `--` prefix, e.g. `text-primary`.
    pub fn to_variable_map(&self) -> HashMap<String, String> {
        ColorToken::ALL
            .iter()
            .map(|token| (token.name().to_string(), self.color(*token).to_css()))
            .collect()
    }
}

/// The four base style sheets
#[derive(Clone, Debug, PartialEq)]
pub struct StyleTable {
    light: StyleSheet,
    dark: StyleSheet,
    light_high_contrast: StyleSheet,
    dark_high_contrast: StyleSheet,
}

impl StyleTable {
    /// Build the built-in sheets
    pub fn new() -> Self {
        Self {
            light: build_sheet(Brightness::Light, false),
            dark: build_sheet(Brightness::Dark, false),
            light_high_contrast: build_sheet(Brightness::Light, true),
            dark_high_contrast: build_sheet(Brightness::Dark, true),
        }
    }

    /// Built-in sheets with configured color overrides applied
    pub fn with_overrides(overrides: &ColorOverrides) -> Self {
        let mut table = Self::new();
        for (brightness, high_contrast) in [
            (Brightness::Light, false),
            (Brightness::Dark, false),
            (Brightness::Light, true),
            (Brightness::Dark, true),
        ] {
            let sheet = table.sheet_mut(brightness, high_contrast);
            for (token, color) in overrides.for_sheet(brightness, high_contrast) {
                sheet.colors.set(*token, *color);
            }
        }
        if !overrides.is_empty() {
            tracing::debug!(count = overrides.len(), "StyleTable: applied color overrides");
        }
        table
    }

    /// The shared built-in table, built on first use
    pub fn builtin() -> Arc<StyleTable> {
        BUILTIN_TABLE
            .get_or_init(|| {
                tracing::debug!("StyleTable: building built-in sheets");
                Arc::new(StyleTable::new())
            })
            .clone()
    }

    /// Base sheet for an appearance
    pub fn sheet(&self, brightness: Brightness, high_contrast: bool) -> &StyleSheet {
        match (brightness, high_contrast) {
            (Brightness::Light, false) => &self.light,
            (Brightness::Dark, false) => &self.dark,
            (Brightness::Light, true) => &self.light_high_contrast,
            (Brightness::Dark, true) => &self.dark_high_contrast,
        }
    }

    fn sheet_mut(&mut self, brightness: Brightness, high_contrast: bool) -> &mut StyleSheet {
        match (brightness, high_contrast) {
            (Brightness::Light, false) => &mut self.light,
            (Brightness::Dark, false) => &mut self.dark,
            (Brightness::Light, true) => &mut self.light_high_contrast,
            (Brightness::Dark, true) => &mut self.dark_high_contrast,
        }
    }

    /// Sheet for a theme state: base sheet, text scaled by `font_scale`, and
    /// instant motion when reduced motion is on
    pub fn resolve(&self, state: &ThemeState, platform: Brightness) -> StyleSheet {
        let brightness = state.mode().resolve(platform);
        let mut sheet = self.sheet(brightness, state.high_contrast_enabled()).clone();

        if state.font_scale() != 1.0 {
            sheet.typography = sheet.typography.scaled(state.font_scale());
        }
        if state.reduce_motion() {
            sheet.motion = MotionTokens::reduced();
        }
        sheet
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}
