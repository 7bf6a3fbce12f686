//! Palette schemes — pure hue derivation from a root hue.
//!
//! Each scheme takes a `root` hue (0-255) and derives a fixed set of related
//! hues at fractional offsets around the color wheel. The first hue in the
//! result is always `root` itself, untouched; every other hue lies in
//! `[0, 255)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tonewheel_color::LIMIT;

use crate::error::ParseSchemeError;

/// The harmony scheme used to derive hues from the root hue.
///
/// Offsets are fractions of a full turn (255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    /// Root hue only.
    #[default]
    Monochrome,
    /// Root + the opposite hue (1/2).
    Complementary,
    /// Root + both neighbours of the complement (5/12, 7/12).
    SplitComplementary,
    /// Three hues spaced a third apart.
    Triadic,
    /// Four hues spaced a quarter apart.
    Tetradic,
    /// Root + 1/6, 3/6, 4/6.
    FourTone,
    /// Root + 23/72, 31/72, 41/72, 49/72.
    FiveTone,
    /// Root + 1/12, 4/12, 5/12, 8/12, 9/12.
    SixTone,
    /// Root + five close neighbours, 1/24 apart.
    Neutral,
}

impl PaletteType {
    /// Offsets from the root as `(numerator, denominator)` fractions of a turn.
    #[must_use]
    pub const fn offsets(self) -> &'static [(u32, u32)] {
        match self {
            Self::Monochrome => &[],
            Self::Complementary => &[(1, 2)],
            Self::SplitComplementary => &[(5, 12), (7, 12)],
            Self::Triadic => &[(1, 3), (2, 3)],
            Self::Tetradic => &[(1, 4), (2, 4), (3, 4)],
            Self::FourTone => &[(1, 6), (3, 6), (4, 6)],
            Self::FiveTone => &[(23, 72), (31, 72), (41, 72), (49, 72)],
            Self::SixTone => &[(1, 12), (4, 12), (5, 12), (8, 12), (9, 12)],
            Self::Neutral => &[(1, 24), (2, 24), (3, 24), (4, 24), (5, 24)],
        }
    }

    /// Number of hues this scheme derives, root included.
    #[must_use]
    pub const fn hue_count(self) -> usize {
        self.offsets().len() + 1
    }

    /// Derive the hue list for `root`.
    ///
    /// Element 0 is `root` verbatim; the rest are
    /// `(root + 255 * fraction) mod 255`, computed in `f64`.
    #[must_use]
    pub fn derive_hues(self, root: f32) -> Vec<f32> {
        let base = f64::from(root);
        let mut hues = Vec::with_capacity(self.hue_count());
        hues.push(root);
        hues.extend(
            self.offsets()
                .iter()
                .map(|&(num, den)| offset_hue(base, num, den)),
        );
        hues
    }

    /// Kebab-case name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::FourTone => "four-tone",
            Self::FiveTone => "five-tone",
            Self::SixTone => "six-tone",
            Self::Neutral => "neutral",
        }
    }

    /// Parse a scheme from its name (case-insensitive, `_` accepted for `-`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        Self::all().iter().find(|p| p.name() == wanted).copied()
    }

    /// All palette types, in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochrome, Self::Complementary, Self::SplitComplementary,
            Self::Triadic, Self::Tetradic, Self::FourTone,
            Self::FiveTone, Self::SixTone, Self::Neutral,
        ]
    }
}

impl fmt::Display for PaletteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteType {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseSchemeError::PaletteType(s.to_string()))
    }
}

/// Wrap a hue into `[0, 255)`.
#[must_use]
pub fn wrap_hue(hue: f32) -> f32 {
    let h = hue.rem_euclid(LIMIT);
    // rem_euclid can round up to LIMIT for tiny negative inputs.
    if h >= LIMIT { 0.0 } else { h }
}

/// `(base + 255 * num / den) mod 255`, narrowed to `f32`.
#[allow(clippy::cast_possible_truncation)]
fn offset_hue(base: f64, num: u32, den: u32) -> f32 {
    let turn = f64::from(LIMIT);
    let h = (turn * f64::from(num) / f64::from(den) + base).rem_euclid(turn);
    wrap_hue(h as f32)
}

/// Lowercase and map `_` / spaces to `-`.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
