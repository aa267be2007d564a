//! Typography tokens for theming

/// Font weight on the usual 100..900 scale
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Default)]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    /// Numeric weight (CSS / OpenType `wght`)
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }

    /// One step heavier, saturating at `Black`
    pub fn bolder(self) -> Self {
        match self {
            FontWeight::Thin => FontWeight::Light,
            FontWeight::Light => FontWeight::Regular,
            FontWeight::Regular => FontWeight::Medium,
            FontWeight::Medium => FontWeight::SemiBold,
            FontWeight::SemiBold => FontWeight::Bold,
            FontWeight::Bold => FontWeight::ExtraBold,
            FontWeight::ExtraBold | FontWeight::Black => FontWeight::Black,
        }
    }
}

/// Semantic text style keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyToken {
    Display,
    Headline,
    Title,
    Body,
    Label,
    Caption,
}

/// A single text style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels
    pub size: f32,
    pub weight: FontWeight,
    /// Line height as a multiple of `size`
    pub line_height: f32,
    /// Letter spacing in logical pixels
    pub letter_spacing: f32,
}

impl TextStyle {
    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self {
            size,
            weight,
            line_height: 1.4,
            letter_spacing: 0.0,
        }
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub font_family: String,
    pub display: TextStyle,
    pub headline: TextStyle,
    pub title: TextStyle,
    pub body: TextStyle,
    pub label: TextStyle,
    pub caption: TextStyle,
}

impl TypographyTokens {
    /// Get a text style by token key
    pub fn get(&self, token: TypographyToken) -> TextStyle {
        match token {
            TypographyToken::Display => self.display,
            TypographyToken::Headline => self.headline,
            TypographyToken::Title => self.title,
            TypographyToken::Body => self.body,
            TypographyToken::Label => self.label,
            TypographyToken::Caption => self.caption,
        }
    }

    /// Multiply every font size by `factor`
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |style: TextStyle| TextStyle {
            size: style.size * factor,
            ..style
        };
        Self {
            font_family: self.font_family.clone(),
            display: scale(self.display),
            headline: scale(self.headline),
            title: scale(self.title),
            body: scale(self.body),
            label: scale(self.label),
            caption: scale(self.caption),
        }
    }

    /// Every style one weight step heavier
    pub fn emboldened(&self) -> Self {
        let bolder = |style: TextStyle| style.weight(style.weight.bolder());
        Self {
            font_family: self.font_family.clone(),
            display: bolder(self.display),
            headline: bolder(self.headline),
            title: bolder(self.title),
            body: bolder(self.body),
            label: bolder(self.label),
            caption: bolder(self.caption),
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_string(),
            display: TextStyle::new(32.0, FontWeight::Bold)
                .line_height(1.25)
                .letter_spacing(-0.5),
            headline: TextStyle::new(24.0, FontWeight::SemiBold).line_height(1.3),
            title: TextStyle::new(20.0, FontWeight::SemiBold).line_height(1.3),
            body: TextStyle::new(16.0, FontWeight::Regular).line_height(1.5),
            label: TextStyle::new(14.0, FontWeight::Medium).letter_spacing(0.1),
            caption: TextStyle::new(12.0, FontWeight::Regular).letter_spacing(0.2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_only_touches_sizes() {
        let base = TypographyTokens::default();
        let scaled = base.scaled(1.5);

        assert_eq!(scaled.body.size, 24.0);
        assert_eq!(scaled.body.weight, base.body.weight);
        assert_eq!(scaled.display.line_height, base.display.line_height);
        assert_eq!(scaled.font_family, base.font_family);
    }

    #[test]
    fn bolder_saturates() {
        assert_eq!(FontWeight::Regular.bolder(), FontWeight::Medium);
        assert_eq!(FontWeight::Black.bolder(), FontWeight::Black);
        assert!(FontWeight::Bold.value() > FontWeight::SemiBold.value());
    }
}
