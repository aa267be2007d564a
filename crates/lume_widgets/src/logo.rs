//! Brand logo widget
//!
//! The logo is a rounded-square mark with an inset glyph, optionally followed
//! by the wordmark. Colors come from the style sheet; high-contrast sheets
//! always get the monochrome variant.

use crate::widget::Widget;
use lume_core::Color;
use lume_theme::{ColorToken, FontWeight, RadiusToken, SpacingToken, StyleSheet, TextStyle};

/// Mark size at which sheet radii and spacing apply unscaled
const REFERENCE_MARK_SIZE: f32 = 48.0;

/// Logo size presets
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Explicit mark edge length in logical pixels
    Custom(f32),
}

impl LogoSize {
    /// Mark edge length in logical pixels
    pub fn px(self) -> f32 {
        match self {
            LogoSize::Small => 32.0,
            LogoSize::Medium => 48.0,
            LogoSize::Large => 96.0,
            LogoSize::Custom(px) => px.max(0.0),
        }
    }
}

/// Coloring of the logo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogoVariant {
    /// Brand primary mark
    #[default]
    FullColor,
    /// Mark drawn in the text color
    Monochrome,
}

/// Brand logo description
#[derive(Clone, Debug, PartialEq)]
pub struct BrandLogo {
    size: LogoSize,
    variant: LogoVariant,
    wordmark: Option<String>,
}

impl BrandLogo {
    pub fn new() -> Self {
        Self {
            size: LogoSize::default(),
            variant: LogoVariant::default(),
            wordmark: Some("Lume".to_string()),
        }
    }

    pub fn size(mut self, size: LogoSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: LogoVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Replace the wordmark text
    pub fn wordmark(mut self, text: impl Into<String>) -> Self {
        self.wordmark = Some(text.into());
        self
    }

    /// Mark only
    pub fn mark_only(mut self) -> Self {
        self.wordmark = None;
        self
    }

    /// Layout and colors for a style sheet
    pub fn resolve(&self, sheet: &StyleSheet) -> LogoLayout {
        let variant = if sheet.high_contrast {
            LogoVariant::Monochrome
        } else {
            self.variant
        };

        let (mark_color, glyph_color) = match variant {
            LogoVariant::FullColor => (
                sheet.color(ColorToken::Primary),
                sheet.color(ColorToken::OnPrimary),
            ),
            LogoVariant::Monochrome => (
                sheet.color(ColorToken::TextPrimary),
                sheet.color(ColorToken::Background),
            ),
        };

        let mark_size = self.size.px();
        let scale = mark_size / REFERENCE_MARK_SIZE;

        let weight = if sheet.high_contrast {
            FontWeight::ExtraBold
        } else {
            FontWeight::Bold
        };
        let wordmark = self.wordmark.as_ref().map(|text| Wordmark {
            text: text.clone(),
            style: TextStyle::new(mark_size * 0.5, weight).line_height(1.0),
            color: sheet.color(ColorToken::TextPrimary),
            gap: sheet.spacing(SpacingToken::Sm) * scale,
        });

        LogoLayout {
            variant,
            mark_size,
            corner_radius: sheet.radius(RadiusToken::Lg) * scale,
            glyph_inset: mark_size * 0.25,
            mark_color,
            glyph_color,
            wordmark,
        }
    }
}

impl Default for BrandLogo {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for BrandLogo {
    type Output = LogoLayout;

    fn build(&self, sheet: &StyleSheet) -> LogoLayout {
        self.resolve(sheet)
    }
}

/// Resolved logo, ready for the renderer
#[derive(Clone, Debug, PartialEq)]
pub struct LogoLayout {
    /// Variant actually used (high contrast overrides the requested one)
    pub variant: LogoVariant,
    pub mark_size: f32,
    pub corner_radius: f32,
    /// Distance from the mark edge to the glyph
    pub glyph_inset: f32,
    pub mark_color: Color,
    pub glyph_color: Color,
    pub wordmark: Option<Wordmark>,
}

impl LogoLayout {
    /// Width of the mark plus gap and an estimate of the wordmark advance
    pub fn estimated_width(&self) -> f32 {
        match &self.wordmark {
            Some(wordmark) => {
                // Average glyph advance of ~0.6em for the brand face
                let advance = wordmark.text.chars().count() as f32 * wordmark.style.size * 0.6;
                self.mark_size + wordmark.gap + advance
            }
            None => self.mark_size,
        }
    }
}

/// Wordmark text next to the mark
#[derive(Clone, Debug, PartialEq)]
pub struct Wordmark {
    pub text: String,
    pub style: TextStyle,
    pub color: Color,
    /// Space between the mark and the text
    pub gap: f32,
}
