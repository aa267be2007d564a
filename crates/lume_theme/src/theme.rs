//! Appearance modes

use serde::{Deserialize, Serialize};

/// Resolved appearance of a style sheet
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    #[default]
    Light,
    Dark,
}

impl Brightness {
    pub fn is_light(self) -> bool {
        self == Brightness::Light
    }
}

/// The user's (or accessibility layer's) choice of appearance
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follow the platform brightness
    System,
}

impl ThemeMode {
    /// Swap light and dark. `System` has no opposite and is returned as is.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::System => ThemeMode::System,
        }
    }

    /// Brightness to render with, given what the platform reports
    pub fn resolve(self, platform: Brightness) -> Brightness {
        match self {
            ThemeMode::Light => Brightness::Light,
            ThemeMode::Dark => Brightness::Dark,
            ThemeMode::System => platform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_system_is_a_no_op() {
        assert_eq!(ThemeMode::System.toggled(), ThemeMode::System);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn system_follows_platform() {
        assert_eq!(ThemeMode::System.resolve(Brightness::Dark), Brightness::Dark);
        assert_eq!(ThemeMode::Light.resolve(Brightness::Dark), Brightness::Light);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ThemeMode::System).unwrap(), "\"system\"");
        let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(mode, ThemeMode::Dark);
    }
}
