//! Sampling policies — how a hue and a saturation are picked per color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSchemeError;
use crate::scheme::normalize_name;

/// How a hue is drawn from the derived hue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HueType {
    /// Every derived hue is equally likely.
    #[default]
    Uniform,
    /// The root hue is picked with the generator's root probability;
    /// otherwise one of the other hues, uniformly.
    SkewedRoot,
}

impl HueType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::SkewedRoot => "skewed-root",
        }
    }
}

/// How the saturation of a hued (non black, non white) color is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaturationType {
    /// Always the maximum saturation.
    Static,
    /// One of the discrete saturation levels, uniformly.
    #[default]
    Levels,
    /// Uniform between the minimum and maximum saturation.
    Random,
}

impl SaturationType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Levels => "levels",
            Self::Random => "random",
        }
    }
}

/// `count` evenly spaced saturation levels strictly between 0 and `max`.
///
/// Level `i` is `max * (i + 1) / (count + 1)`. Neither 0 nor `max` is ever
/// a level: gray and white come from the black/white probabilities.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn saturation_levels(max: f32, count: usize) -> Vec<f32> {
    let steps = (count + 1) as f32;
    (1..=count).map(|i| max * i as f32 / steps).collect()
}

impl fmt::Display for HueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SaturationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HueType {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "uniform" => Ok(Self::Uniform),
            "skewed-root" => Ok(Self::SkewedRoot),
            _ => Err(ParseSchemeError::HueType(s.to_string())),
        }
    }
}

impl FromStr for SaturationType {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "static" => Ok(Self::Static),
            "levels" => Ok(Self::Levels),
            "random" => Ok(Self::Random),
            _ => Err(ParseSchemeError::SaturationType(s.to_string())),
        }
    }
}
