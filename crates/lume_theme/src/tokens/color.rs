//! Color tokens for theming

use lume_core::{Color, Lerp};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryVariant,
    OnPrimary,
    Secondary,
    OnSecondary,
    Accent,

    // Surface colors
    Background,
    Surface,
    SurfaceVariant,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextDisabled,
    TextInverse,
    TextLink,

    // Border colors
    Border,
    BorderFocus,
    Divider,

    // Feedback colors
    Success,
    Warning,
    Error,
    Info,

    // Overlays
    Selection,
    Scrim,
}

impl ColorToken {
    /// Every token, in declaration order
    pub const ALL: [ColorToken; 23] = [
        ColorToken::Primary,
        ColorToken::PrimaryVariant,
        ColorToken::OnPrimary,
        ColorToken::Secondary,
        ColorToken::OnSecondary,
        ColorToken::Accent,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::SurfaceVariant,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextDisabled,
        ColorToken::TextInverse,
        ColorToken::TextLink,
        ColorToken::Border,
        ColorToken::BorderFocus,
        ColorToken::Divider,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::Error,
        ColorToken::Info,
        ColorToken::Selection,
        ColorToken::Scrim,
    ];

    /// Stable kebab-case name, used by config files and variable maps
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryVariant => "primary-variant",
            ColorToken::OnPrimary => "on-primary",
            ColorToken::Secondary => "secondary",
            ColorToken::OnSecondary => "on-secondary",
            ColorToken::Accent => "accent",
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::SurfaceVariant => "surface-variant",
            ColorToken::TextPrimary => "text-primary",
            ColorToken::TextSecondary => "text-secondary",
            ColorToken::TextDisabled => "text-disabled",
            ColorToken::TextInverse => "text-inverse",
            ColorToken::TextLink => "text-link",
            ColorToken::Border => "border",
            ColorToken::BorderFocus => "border-focus",
            ColorToken::Divider => "divider",
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::Error => "error",
            ColorToken::Info => "info",
            ColorToken::Selection => "selection",
            ColorToken::Scrim => "scrim",
        }
    }

    /// Look a token up by its name. Underscores are accepted for dashes.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|token| token.name() == normalized)
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    // Brand colors
    pub primary: Color,
    pub primary_variant: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub on_secondary: Color,
    pub accent: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub surface_variant: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
    pub text_inverse: Color,
    pub text_link: Color,

    // Border colors
    pub border: Color,
    pub border_focus: Color,
    pub divider: Color,

    // Feedback colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Overlays
    pub selection: Color,
    pub scrim: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        *self.slot(token)
    }

    /// Replace a color by token key
    pub fn set(&mut self, token: ColorToken, color: Color) {
        *self.slot_mut(token) = color;
    }

    fn slot(&self, token: ColorToken) -> &Color {
        match token {
            ColorToken::Primary => &self.primary,
            ColorToken::PrimaryVariant => &self.primary_variant,
            ColorToken::OnPrimary => &self.on_primary,
            ColorToken::Secondary => &self.secondary,
            ColorToken::OnSecondary => &self.on_secondary,
            ColorToken::Accent => &self.accent,
            ColorToken::Background => &self.background,
            ColorToken::Surface => &self.surface,
            ColorToken::SurfaceVariant => &self.surface_variant,
            ColorToken::TextPrimary => &self.text_primary,
            ColorToken::TextSecondary => &self.text_secondary,
            ColorToken::TextDisabled => &self.text_disabled,
            ColorToken::TextInverse => &self.text_inverse,
            ColorToken::TextLink => &self.text_link,
            ColorToken::Border => &self.border,
            ColorToken::BorderFocus => &self.border_focus,
            ColorToken::Divider => &self.divider,
            ColorToken::Success => &self.success,
            ColorToken::Warning => &self.warning,
            ColorToken::Error => &self.error,
            ColorToken::Info => &self.info,
            ColorToken::Selection => &self.selection,
            ColorToken::Scrim => &self.scrim,
        }
    }

    fn slot_mut(&mut self, token: ColorToken) -> &mut Color {
        match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryVariant => &mut self.primary_variant,
            ColorToken::OnPrimary => &mut self.on_primary,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::OnSecondary => &mut self.on_secondary,
            ColorToken::Accent => &mut self.accent,
            ColorToken::Background => &mut self.background,
            ColorToken::Surface => &mut self.surface,
            ColorToken::SurfaceVariant => &mut self.surface_variant,
            ColorToken::TextPrimary => &mut self.text_primary,
            ColorToken::TextSecondary => &mut self.text_secondary,
            ColorToken::TextDisabled => &mut self.text_disabled,
            ColorToken::TextInverse => &mut self.text_inverse,
            ColorToken::TextLink => &mut self.text_link,
            ColorToken::Border => &mut self.border,
            ColorToken::BorderFocus => &mut self.border_focus,
            ColorToken::Divider => &mut self.divider,
            ColorToken::Success => &mut self.success,
            ColorToken::Warning => &mut self.warning,
            ColorToken::Error => &mut self.error,
            ColorToken::Info => &mut self.info,
            ColorToken::Selection => &mut self.selection,
            ColorToken::Scrim => &mut self.scrim,
        }
    }

    /// Linear interpolation between two color token sets
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mut out = from.clone();
        for token in ColorToken::ALL {
            out.set(token, Color::lerp(&from.get(token), &to.get(token), t));
        }
        out
    }
}

impl Lerp for ColorTokens {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        ColorTokens::lerp(from, to, t)
    }
}
