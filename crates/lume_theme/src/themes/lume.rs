//! Built-in Lume brand theme
//!
//! An indigo brand color on cool grays, with a teal secondary. The
//! high-contrast variants drop the grays in favour of pure black and white,
//! use the deepest (light) or palest (dark) indigo, and embolden every text
//! style.

use crate::style::StyleSheet;
use crate::theme::Brightness;
use crate::tokens::*;
use lume_core::Color;

/// Lume brand palette
pub mod palette {
    use lume_core::Color;

    // Brand
    pub const INDIGO_200: Color = Color::rgb(199.0 / 255.0, 210.0 / 255.0, 254.0 / 255.0);
    pub const INDIGO_300: Color = Color::rgb(165.0 / 255.0, 180.0 / 255.0, 252.0 / 255.0);
    pub const INDIGO_400: Color = Color::rgb(129.0 / 255.0, 140.0 / 255.0, 248.0 / 255.0);
    pub const INDIGO_600: Color = Color::rgb(79.0 / 255.0, 70.0 / 255.0, 229.0 / 255.0);
    pub const INDIGO_700: Color = Color::rgb(67.0 / 255.0, 56.0 / 255.0, 202.0 / 255.0);
    pub const INDIGO_800: Color = Color::rgb(55.0 / 255.0, 48.0 / 255.0, 163.0 / 255.0);
    pub const TEAL_300: Color = Color::rgb(94.0 / 255.0, 234.0 / 255.0, 212.0 / 255.0);
    pub const TEAL_700: Color = Color::rgb(15.0 / 255.0, 118.0 / 255.0, 110.0 / 255.0);
    pub const AMBER_400: Color = Color::rgb(251.0 / 255.0, 191.0 / 255.0, 36.0 / 255.0);
    pub const AMBER_600: Color = Color::rgb(217.0 / 255.0, 119.0 / 255.0, 6.0 / 255.0);

    // Feedback
    pub const GREEN_400: Color = Color::rgb(74.0 / 255.0, 222.0 / 255.0, 128.0 / 255.0);
    pub const GREEN_700: Color = Color::rgb(21.0 / 255.0, 128.0 / 255.0, 61.0 / 255.0);
    pub const RED_400: Color = Color::rgb(248.0 / 255.0, 113.0 / 255.0, 113.0 / 255.0);
    pub const RED_700: Color = Color::rgb(185.0 / 255.0, 28.0 / 255.0, 28.0 / 255.0);
    pub const SKY_400: Color = Color::rgb(56.0 / 255.0, 189.0 / 255.0, 248.0 / 255.0);
    pub const SKY_700: Color = Color::rgb(3.0 / 255.0, 105.0 / 255.0, 161.0 / 255.0);

    // Neutrals
    pub const GRAY_50: Color = Color::rgb(249.0 / 255.0, 250.0 / 255.0, 251.0 / 255.0);
    pub const GRAY_100: Color = Color::rgb(243.0 / 255.0, 244.0 / 255.0, 246.0 / 255.0);
    pub const GRAY_200: Color = Color::rgb(229.0 / 255.0, 231.0 / 255.0, 235.0 / 255.0);
    pub const GRAY_300: Color = Color::rgb(209.0 / 255.0, 213.0 / 255.0, 219.0 / 255.0);
    pub const GRAY_400: Color = Color::rgb(156.0 / 255.0, 163.0 / 255.0, 175.0 / 255.0);
    pub const GRAY_500: Color = Color::rgb(107.0 / 255.0, 114.0 / 255.0, 128.0 / 255.0);
    pub const GRAY_600: Color = Color::rgb(75.0 / 255.0, 85.0 / 255.0, 99.0 / 255.0);
    pub const GRAY_700: Color = Color::rgb(55.0 / 255.0, 65.0 / 255.0, 81.0 / 255.0);
    pub const GRAY_800: Color = Color::rgb(31.0 / 255.0, 41.0 / 255.0, 55.0 / 255.0);
    pub const GRAY_900: Color = Color::rgb(17.0 / 255.0, 24.0 / 255.0, 39.0 / 255.0);
    pub const GRAY_950: Color = Color::rgb(3.0 / 255.0, 7.0 / 255.0, 18.0 / 255.0);
}

use palette::*;

/// Build one of the four built-in sheets
pub fn build_sheet(brightness: Brightness, high_contrast: bool) -> StyleSheet {
    let colors = match (brightness, high_contrast) {
        (Brightness::Light, false) => light_colors(),
        (Brightness::Dark, false) => dark_colors(),
        (Brightness::Light, true) => light_high_contrast_colors(),
        (Brightness::Dark, true) => dark_high_contrast_colors(),
    };

    let typography = if high_contrast {
        TypographyTokens::default().emboldened()
    } else {
        TypographyTokens::default()
    };

    StyleSheet {
        brightness,
        high_contrast,
        colors,
        typography,
        spacing: SpacingTokens::default(),
        radii: RadiusTokens::default(),
        motion: MotionTokens::default(),
        border_width: if high_contrast { 2.0 } else { 1.0 },
    }
}

fn light_colors() -> ColorTokens {
    ColorTokens {
        primary: INDIGO_600,
        primary_variant: INDIGO_700,
        on_primary: Color::WHITE,
        secondary: TEAL_700,
        on_secondary: Color::WHITE,
        accent: AMBER_600,
        background: GRAY_50,
        surface: Color::WHITE,
        surface_variant: GRAY_100,
        text_primary: GRAY_900,
        text_secondary: GRAY_600,
        text_disabled: GRAY_400,
        text_inverse: Color::WHITE,
        text_link: INDIGO_600,
        border: GRAY_200,
        border_focus: INDIGO_600,
        divider: GRAY_200,
        success: GREEN_700,
        warning: AMBER_600,
        error: RED_700,
        info: SKY_700,
        selection: INDIGO_600.with_alpha(0.25),
        scrim: Color::BLACK.with_alpha(0.4),
    }
}

fn dark_colors() -> ColorTokens {
    ColorTokens {
        primary: INDIGO_400,
        primary_variant: INDIGO_300,
        on_primary: GRAY_950,
        secondary: TEAL_300,
        on_secondary: GRAY_950,
        accent: AMBER_400,
        background: GRAY_950,
        surface: GRAY_900,
        surface_variant: GRAY_800,
        text_primary: GRAY_50,
        text_secondary: GRAY_400,
        text_disabled: GRAY_600,
        text_inverse: GRAY_900,
        text_link: INDIGO_300,
        border: GRAY_700,
        border_focus: INDIGO_400,
        divider: GRAY_800,
        success: GREEN_400,
        warning: AMBER_400,
        error: RED_400,
        info: SKY_400,
        selection: INDIGO_400.with_alpha(0.3),
        scrim: Color::BLACK.with_alpha(0.6),
    }
}

fn light_high_contrast_colors() -> ColorTokens {
    ColorTokens {
        primary: INDIGO_800,
        primary_variant: INDIGO_800,
        on_primary: Color::WHITE,
        secondary: TEAL_700,
        on_secondary: Color::WHITE,
        accent: INDIGO_800,
        background: Color::WHITE,
        surface: Color::WHITE,
        surface_variant: Color::WHITE,
        text_primary: Color::BLACK,
        text_secondary: GRAY_800,
        text_disabled: GRAY_600,
        text_inverse: Color::WHITE,
        text_link: INDIGO_800,
        border: Color::BLACK,
        border_focus: INDIGO_800,
        divider: Color::BLACK,
        success: GREEN_700,
        warning: Color::BLACK,
        error: RED_700,
        info: SKY_700,
        selection: INDIGO_800.with_alpha(0.35),
        scrim: Color::BLACK.with_alpha(0.7),
    }
}

fn dark_high_contrast_colors() -> ColorTokens {
    ColorTokens {
        primary: INDIGO_200,
        primary_variant: INDIGO_200,
        on_primary: Color::BLACK,
        secondary: TEAL_300,
        on_secondary: Color::BLACK,
        accent: AMBER_400,
        background: Color::BLACK,
        surface: Color::BLACK,
        surface_variant: Color::BLACK,
        text_primary: Color::WHITE,
        text_secondary: GRAY_200,
        text_disabled: GRAY_400,
        text_inverse: Color::BLACK,
        text_link: INDIGO_200,
        border: Color::WHITE,
        border_focus: INDIGO_200,
        divider: Color::WHITE,
        success: GREEN_400,
        warning: AMBER_400,
        error: RED_400,
        info: SKY_400,
        selection: INDIGO_200.with_alpha(0.4),
        scrim: Color::BLACK.with_alpha(0.8),
    }
}
