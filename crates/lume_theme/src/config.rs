//! Theme configuration
//!
//! Read once at startup from a TOML document:
//!
//! ```toml
//! [theme]
//! mode = "system"
//! font_scale = 1.2
//!
//! [colors.light]
//! primary = "#1E66F5"
//! ```
//!
//! Every field is optional. Unknown keys are rejected so typos surface as
//! errors instead of silently falling back to defaults.

use crate::error::{Result, ThemeError};
use crate::state::{clamp_font_scale, ThemeState};
use crate::style::StyleTable;
use crate::theme::{Brightness, ThemeMode};
use crate::tokens::ColorToken;
use lume_core::Color;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of the configuration document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub theme: ThemeSection,
    pub colors: ColorSection,
}

/// Initial theme state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSection {
    pub mode: ThemeMode,
    pub high_contrast: bool,
    pub font_scale: f32,
    pub reduce_motion: bool,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            high_contrast: false,
            font_scale: 1.0,
            reduce_motion: false,
        }
    }
}

/// Raw color overrides per sheet, `token name -> hex string`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorSection {
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
    pub high_contrast_light: BTreeMap<String, String>,
    pub high_contrast_dark: BTreeMap<String, String>,
}

impl ThemeConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ThemeConfig = toml::from_str(source)?;
        tracing::debug!(mode = ?config.theme.mode, "ThemeConfig loaded");
        Ok(config)
    }

    /// Theme state described by the `[theme]` section. High contrast implies
    /// dark mode, as it does for [`crate::ThemeManager::set_high_contrast`].
    pub fn initial_state(&self) -> ThemeState {
        let section = &self.theme;
        let scale = clamp_font_scale(section.font_scale);
        if scale != section.font_scale {
            tracing::warn!(
                requested = section.font_scale,
                applied = scale,
                "font_scale out of range, clamped"
            );
        }
        let mode = if section.high_contrast {
            ThemeMode::Dark
        } else {
            section.mode
        };
        ThemeState::new(
            mode,
            section.high_contrast,
            scale,
            section.reduce_motion,
        )
    }

    /// Validated color overrides from the `[colors.*]` sections
    pub fn color_overrides(&self) -> Result<ColorOverrides> {
        let mut overrides = ColorOverrides::default();
        let sections = [
            (Brightness::Light, false, &self.colors.light),
            (Brightness::Dark, false, &self.colors.dark),
            (Brightness::Light, true, &self.colors.high_contrast_light),
            (Brightness::Dark, true, &self.colors.high_contrast_dark),
        ];

        for (brightness, high_contrast, entries) in sections {
            for (name, value) in entries {
                let token = ColorToken::from_name(name)
                    .ok_or_else(|| ThemeError::UnknownColorToken(name.clone()))?;
                let color = Color::parse_hex(value).map_err(|source| ThemeError::InvalidColor {
                    token: name.clone(),
                    source,
                })?;
                overrides.insert(brightness, high_contrast, token, color);
            }
        }
        Ok(overrides)
    }

    /// Style table with this configuration's overrides applied
    pub fn build_table(&self) -> Result<StyleTable> {
        let overrides = self.color_overrides()?;
        Ok(StyleTable::with_overrides(&overrides))
    }
}

/// Validated per-sheet color overrides
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorOverrides {
    light: FxHashMap<ColorToken, Color>,
    dark: FxHashMap<ColorToken, Color>,
    light_high_contrast: FxHashMap<ColorToken, Color>,
    dark_high_contrast: FxHashMap<ColorToken, Color>,
}

impl ColorOverrides {
    pub fn insert(
        &mut self,
        brightness: Brightness,
        high_contrast: bool,
        token: ColorToken,
        color: Color,
    ) {
        self.map_mut(brightness, high_contrast).insert(token, color);
    }

    /// Overrides for one sheet
    pub fn for_sheet(&self, brightness: Brightness, high_contrast: bool) -> &FxHashMap<ColorToken, Color> {
        match (brightness, high_contrast) {
            (Brightness::Light, false) => &self.light,
            (Brightness::Dark, false) => &self.dark,
            (Brightness::Light, true) => &self.light_high_contrast,
            (Brightness::Dark, true) => &self.dark_high_contrast,
        }
    }

    fn map_mut(&mut self, brightness: Brightness, high_contrast: bool) -> &mut FxHashMap<ColorToken, Color> {
        match (brightness, high_contrast) {
            (Brightness::Light, false) => &mut self.light,
            (Brightness::Dark, false) => &mut self.dark,
            (Brightness::Light, true) => &mut self.light_high_contrast,
            (Brightness::Dark, true) => &mut self.dark_high_contrast,
        }
    }

    /// Total number of overridden colors across all sheets
    pub fn len(&self) -> usize {
        self.light.len()
            + self.dark.len()
            + self.light_high_contrast.len()
            + self.dark_high_contrast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.initial_state(), ThemeState::default());
        assert!(config.color_overrides().unwrap().is_empty());
    }

    #[test]
    fn initial_state_clamps_font_scale() {
        let config = ThemeConfig::from_toml_str("[theme]\nfont_scale = 3.0\n").unwrap();
        assert_eq!(config.initial_state().font_scale(), 1.5);
    }

    #[test]
    fn high_contrast_starts_dark() {
        let config =
            ThemeConfig::from_toml_str("[theme]\nmode = \"light\"\nhigh_contrast = true\n").unwrap();
        let state = config.initial_state();
        assert_eq!(state.mode(), ThemeMode::Dark);
        assert!(state.high_contrast_enabled());

        let config = ThemeConfig::from_toml_str("[theme]\nmode = \"light\"\n").unwrap();
        assert_eq!(config.initial_state().mode(), ThemeMode::Light);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ThemeConfig::from_toml_str("[theme]\nfont_size = 1.0\n").unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }
}
