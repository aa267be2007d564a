//! RGBA colors
//!
//! Channels are stored as linear `f32` values in `0.0..=1.0`. Hex input follows
//! the `#RRGGBB` / `#AARRGGBB` conventions used by design tools and mobile
//! toolkits.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string had a digit count other than 6 or 8
    #[error("expected 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),

    /// The string contained a non-hex character
    #[error("invalid hex digit in color '{0}'")]
    InvalidDigit(String),
}

/// An RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Build a color from `0xAARRGGBB`
    pub fn from_argb(argb: u32) -> Self {
        let a = ((argb >> 24) & 0xFF) as f32 / 255.0;
        let mut color = Self::from_hex(argb & 0x00FF_FFFF);
        color.a = a;
        color
    }

    /// Parse `#RRGGBB`, `#AARRGGBB`, or the same without the leading `#`
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))?;

        if digits.len() == 6 {
            Ok(Self::from_hex(value))
        } else {
            Ok(Self::from_argb(value))
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels quantized to 8 bits
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#rrggbb` for opaque colors, `rgba(r,g,b,a)` otherwise
    pub fn to_css(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        if self.a < 1.0 {
            format!("rgba({r},{g},{b},{})", self.a)
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }

    /// Relative luminance as defined by WCAG 2.x (alpha ignored)
    pub fn relative_luminance(&self) -> f32 {
        fn channel(c: f32) -> f32 {
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// WCAG contrast ratio between two colors, in `1.0..=21.0`
    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (light, dark) = if a > b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
