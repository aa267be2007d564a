//! Theme error types

use lume_core::ColorParseError;
use thiserror::Error;

/// Errors raised while loading theme configuration
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The TOML document is malformed or has the wrong shape
    #[error("invalid theme configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A color override names a token that does not exist
    #[error("unknown color token '{0}'")]
    UnknownColorToken(String),

    /// A color override value is not a valid hex color
    #[error("invalid color for '{token}': {source}")]
    InvalidColor {
        token: String,
        #[source]
        source: ColorParseError,
    },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
