//! Base widget trait

use lume_theme::StyleSheet;

/// A widget that can be described against a style sheet
pub trait Widget {
    /// The description handed to the renderer
    type Output;

    /// Build the description (called whenever the theme changes)
    fn build(&self, sheet: &StyleSheet) -> Self::Output;
}
