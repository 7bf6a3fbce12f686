//! Error types for parsing names and palette configuration.
//!
//! Sampling itself never fails. Only the text-facing layers (scheme names,
//! JSON configs, `key=value` settings) can reject their input.

use thiserror::Error;

/// A scheme or policy name that does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSchemeError {
    #[error("unknown palette type `{0}`")]
    PaletteType(String),

    #[error("unknown hue type `{0}`")]
    HueType(String),

    #[error("unknown saturation type `{0}`")]
    SaturationType(String),
}

/// Errors produced while loading or editing a [`PaletteConfig`](crate::PaletteConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be read or written.
    #[error("invalid palette config: {0}")]
    Json(#[from] serde_json::Error),

    /// A `key=value` setting named a key that does not exist.
    #[error("unknown setting `{0}`")]
    UnknownKey(String),

    /// A setting was given without `=value`.
    #[error("setting `{0}` needs a value")]
    MissingValue(String),

    /// A numeric setting could not be parsed.
    #[error("setting `{key}` expects a number, got `{value}`")]
    InvalidNumber { key: String, value: String },

    /// An enum-valued setting named an unknown variant.
    #[error(transparent)]
    Scheme(#[from] ParseSchemeError),
}
