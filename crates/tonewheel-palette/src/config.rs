//! Palette configuration — a serializable description of a generator.
//!
//! A [`PaletteConfig`] names a palette type and, optionally, overrides for
//! every tunable a [`PaletteGenerator`] has. Fields left at `None` keep
//! whatever initialization produced (including the one-shot scheme roll).
//!
//! Configs load from JSON or from `key=value` settings:
//!
//! ```
//! use tonewheel_palette::{PaletteConfig, PaletteType, Xorshift32};
//!
//! let mut config = PaletteConfig::from_json_str(r#"{ "palette-type": "triadic", "root-hue": 0 }"#)?;
//! config.apply_settings("saturation-type=static black=0 white=0 saturated=1")?;
//!
//! let (palette, _warnings) = config.build(Xorshift32::new(7));
//! assert_eq!(palette.palette_type(), PaletteType::Triadic);
//! assert_eq!(palette.hues(), &[0.0, 85.0, 170.0]);
//! # Ok::<(), tonewheel_palette::ConfigError>(())
//! ```
//!
//! # Settings
//!
//! | Key                 | Value                                  |
//! |---------------------|----------------------------------------|
//! | `palette-type`      | scheme name (`triadic`, `six-tone`, …) |
//! | `root-hue`          | number                                 |
//! | `hue-type`          | `uniform` / `skewed-root`              |
//! | `root-probability`  | number                                 |
//! | `saturation-type`   | `static` / `levels` / `random`         |
//! | `saturation-levels` | integer                                |
//! | `min-saturation`    | number                                 |
//! | `max-saturation`    | number                                 |
//! | `min-brightness`    | number                                 |
//! | `max-brightness`    | number                                 |
//! | `black`             | number                                 |
//! | `white`             | number                                 |
//! | `saturated`         | number                                 |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::generator::{PaletteGenerator, ProbabilityWarnings};
use crate::policy::{HueType, SaturationType};
use crate::random::RandomSource;
use crate::scheme::{normalize_name, PaletteType};

/// Black / white / saturated weights, applied together.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Probabilities {
    pub black: f32,
    pub white: f32,
    pub saturated: f32,
}

/// A serializable generator description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PaletteConfig {
    pub palette_type: PaletteType,

    /// Drawn from the random source when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_hue: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue_type: Option<HueType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_probability: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation_type: Option<SaturationType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation_levels: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_saturation: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_saturation: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_brightness: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_brightness: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<Probabilities>,
}

impl PaletteConfig {
    /// A config for `palette_type` with no overrides.
    #[must_use]
    pub fn new(palette_type: PaletteType) -> Self {
        Self { palette_type, ..Self::default() }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON, unknown enum names,
    /// or values of the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON, omitting unset overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a generator from this config.
    ///
    /// Returns the warnings raised while applying the probabilities.
    #[must_use]
    pub fn build<R: RandomSource>(&self, rng: R) -> (PaletteGenerator<R>, ProbabilityWarnings) {
        let mut generator = match self.root_hue {
            Some(root) => PaletteGenerator::new(self.palette_type, root, rng),
            None => PaletteGenerator::with_random_root(self.palette_type, rng),
        };
        let warnings = self.apply(&mut generator);
        (generator, warnings)
    }

    /// Apply every override that is set onto an existing generator.
    ///
    /// The palette type is only re-applied when it differs from the
    /// generator's. Ranges go first, so that the level count is scaled to the
    /// configured maximum, and an explicit saturation or hue type wins over
    /// the ones implied by the level count and the probabilities.
    pub fn apply<R: RandomSource>(&self, generator: &mut PaletteGenerator<R>) -> ProbabilityWarnings {
        if generator.palette_type() != self.palette_type {
            generator.set_palette_type(self.palette_type);
        }
        if let Some(root) = self.root_hue {
            generator.set_root_hue(root);
        }

        if let Some(v) = self.min_saturation {
            generator.set_min_saturation(v);
        }
        if let Some(v) = self.max_saturation {
            generator.set_max_saturation(v);
        }
        if let Some(v) = self.min_brightness {
            generator.set_min_brightness(v);
        }
        if let Some(v) = self.max_brightness {
            generator.set_max_brightness(v);
        }

        if let Some(count) = self.saturation_levels {
            generator.set_number_of_saturation_levels(count);
        }
        if let Some(saturation_type) = self.saturation_type {
            generator.set_saturation_type(saturation_type);
        }

        let mut warnings = ProbabilityWarnings::empty();
        if let Some(Probabilities { black, white, saturated }) = self.probabilities {
            warnings = match (self.hue_type, self.root_probability) {
                (Some(HueType::SkewedRoot), Some(root)) => {
                    generator.set_probabilities_with_root(black, white, saturated, root)
                }
                _ => generator.set_probabilities(black, white, saturated),
            };
            // An explicit hue type is applied below.
            if self.hue_type.is_some() {
                warnings.remove(ProbabilityWarnings::HUE_TYPE_SWITCHED);
            }
        }

        if let Some(hue_type) = self.hue_type {
            generator.set_hue_type(hue_type);
        }
        if let Some(root) = self.root_probability {
            generator.set_root_probability(root);
        }

        warnings
    }

    /// Apply whitespace-separated `key=value` settings.
    ///
    /// # Errors
    ///
    /// Stops at the first setting that fails; earlier ones stay applied.
    pub fn apply_settings(&mut self, args: &str) -> Result<(), ConfigError> {
        args.split_whitespace().try_for_each(|arg| self.apply_setting(arg))
    }

    /// Apply a single `key=value` setting.
    ///
    /// Keys are case-insensitive and accept `_` for `-`. Setting one of
    /// `black`, `white`, `saturated` starts from all-zero probabilities if
    /// none were configured yet.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingValue`], [`ConfigError::UnknownKey`],
    /// [`ConfigError::InvalidNumber`], or [`ConfigError::Scheme`] for an
    /// unknown enum name.
    pub fn apply_setting(&mut self, arg: &str) -> Result<(), ConfigError> {
        let Some((key, value)) = arg.split_once('=') else {
            return Err(ConfigError::MissingValue(arg.to_string()));
        };
        let key = normalize_name(key);
        let value = value.trim();

        match key.as_str() {
            "palette-type" | "palette" => self.palette_type = value.parse()?,
            "root-hue" | "root" => self.root_hue = Some(number(&key, value)?),
            "hue-type" => self.hue_type = Some(value.parse()?),
            "root-probability" => self.root_probability = Some(number(&key, value)?),
            "saturation-type" => self.saturation_type = Some(value.parse()?),
            "saturation-levels" | "levels" => self.saturation_levels = Some(number(&key, value)?),
            "min-saturation" => self.min_saturation = Some(number(&key, value)?),
            "max-saturation" => self.max_saturation = Some(number(&key, value)?),
            "min-brightness" => self.min_brightness = Some(number(&key, value)?),
            "max-brightness" => self.max_brightness = Some(number(&key, value)?),
            "black" => self.probabilities_mut().black = number(&key, value)?,
            "white" => self.probabilities_mut().white = number(&key, value)?,
            "saturated" => self.probabilities_mut().saturated = number(&key, value)?,
            _ => return Err(ConfigError::UnknownKey(key)),
        }
        Ok(())
    }

    fn probabilities_mut(&mut self) -> &mut Probabilities {
        self.probabilities.get_or_insert_with(Probabilities::default)
    }
}

fn number<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseSchemeError;
    use crate::random::Xorshift32;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_is_default() {
        let config = PaletteConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PaletteConfig::default());
        assert_eq!(config.palette_type, PaletteType::Monochrome);
    }

    #[test]
    fn json_fields_are_kebab_case() {
        let config = PaletteConfig::from_json_str(
            r#"{
                "palette-type": "split-complementary",
                "root-hue": 12.5,
                "hue-type": "skewed-root",
                "root-probability": 0.6,
                "saturation-type": "random",
                "probabilities": { "black": 0.1, "white": 0.2, "saturated": 0.7 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.palette_type, PaletteType::SplitComplementary);
        assert_eq!(config.root_hue, Some(12.5));
        assert_eq!(config.hue_type, Some(HueType::SkewedRoot));
        assert_eq!(config.saturation_type, Some(SaturationType::Random));
        assert_eq!(
            config.probabilities,
            Some(Probabilities { black: 0.1, white: 0.2, saturated: 0.7 })
        );
    }

    #[test]
    fn unknown_scheme_in_json_is_an_error() {
        let err = PaletteConfig::from_json_str(r#"{ "palette-type": "golden" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn json_roundtrip_skips_unset() {
        let mut config = PaletteConfig::new(PaletteType::Neutral);
        config.saturation_levels = Some(4);
        let json = config.to_json_string().unwrap();
        assert!(!json.contains("root-hue"), "{json}");
        assert_eq!(PaletteConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn build_applies_overrides() {
        let mut config = PaletteConfig::new(PaletteType::Tetradic);
        config.root_hue = Some(10.0);
        config.max_saturation = Some(100.0);
        config.saturation_levels = Some(3);
        config.max_brightness = Some(200.0);
        config.probabilities = Some(Probabilities { black: 0.25, white: 0.25, saturated: 0.5 });

        let (g, warnings) = config.build(Xorshift32::new(5));
        assert!(!warnings.contains(ProbabilityWarnings::SUM_MISMATCH));
        assert_eq!(g.hues(), &[10.0, 73.75, 137.5, 201.25]);
        assert_eq!(g.saturation_levels(), &[25.0, 50.0, 75.0]);
        assert_eq!(g.max_brightness(), 200.0);
        assert_eq!(g.black_probability(), 0.25);
        assert_eq!(g.hue_type(), HueType::Uniform);
    }

    #[test]
    fn build_with_skewed_root() {
        let mut config = PaletteConfig::new(PaletteType::Triadic);
        config.root_hue = Some(0.0);
        config.hue_type = Some(HueType::SkewedRoot);
        config.root_probability = Some(0.9);
        config.probabilities = Some(Probabilities { black: 0.0, white: 0.0, saturated: 1.0 });

        let (g, warnings) = config.build(Xorshift32::new(5));
        assert_eq!(warnings, ProbabilityWarnings::empty());
        assert_eq!(g.hue_type(), HueType::SkewedRoot);
        assert_eq!(g.root_probability(), 0.9);
    }

    #[test]
    fn explicit_saturation_type_wins_over_levels() {
        let mut config = PaletteConfig::new(PaletteType::Triadic);
        config.saturation_levels = Some(5);
        config.saturation_type = Some(SaturationType::Static);
        let (g, _) = config.build(Xorshift32::new(1));
        assert_eq!(g.saturation_type(), SaturationType::Static);
        assert_eq!(g.number_of_saturation_levels(), 5);
    }

    #[test]
    fn sum_mismatch_surfaces_from_build() {
        let mut config = PaletteConfig::new(PaletteType::Triadic);
        config.probabilities = Some(Probabilities { black: 0.5, white: 0.5, saturated: 0.5 });
        let (_, warnings) = config.build(Xorshift32::new(1));
        assert!(warnings.contains(ProbabilityWarnings::SUM_MISMATCH));
    }

    #[test]
    fn settings_parse() {
        let mut config = PaletteConfig::default();
        config
            .apply_settings("palette=FIVE_TONE root-hue=42 hue_type=skewed-root levels=3 white=0.5")
            .unwrap();
        assert_eq!(config.palette_type, PaletteType::FiveTone);
        assert_eq!(config.root_hue, Some(42.0));
        assert_eq!(config.hue_type, Some(HueType::SkewedRoot));
        assert_eq!(config.saturation_levels, Some(3));
        assert_eq!(
            config.probabilities,
            Some(Probabilities { black: 0.0, white: 0.5, saturated: 0.0 })
        );
    }

    #[test]
    fn settings_errors() {
        let mut config = PaletteConfig::default();
        assert!(matches!(
            config.apply_setting("root-hue"),
            Err(ConfigError::MissingValue(k)) if k == "root-hue"
        ));
        assert!(matches!(
            config.apply_setting("sparkle=1"),
            Err(ConfigError::UnknownKey(k)) if k == "sparkle"
        ));
        assert!(matches!(
            config.apply_setting("levels=-2"),
            Err(ConfigError::InvalidNumber { key, value }) if key == "levels" && value == "-2"
        ));
        assert!(matches!(
            config.apply_setting("hue-type=gaussian"),
            Err(ConfigError::Scheme(ParseSchemeError::HueType(_)))
        ));
    }
}
