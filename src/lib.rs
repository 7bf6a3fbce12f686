// SPDX-License-Identifier: MIT
//
// tonewheel — procedural color palettes.
//
// This is the facade crate that wires the workspace together:
//
//   tonewheel-color   — Hsb triples and 8-bit Color values (0–255 scale)
//   tonewheel-palette — harmony schemes, random sources, the generator
//
// Pick a scheme and a root hue, then draw colors:
//
//   let mut palette = PaletteGenerator::new(PaletteType::Triadic, 0.0, ThreadRandom);
//   let color = palette.next_color();

pub use tonewheel_color as color;
pub use tonewheel_palette as palette;

pub use tonewheel_color::{Color, Hsb};
pub use tonewheel_palette::{
    ConfigError, HueType, PaletteConfig, PaletteGenerator, PaletteType, ParseSchemeError,
    Probabilities, ProbabilityWarnings, RandomSource, SaturationType, ThreadRandom, Xorshift32,
};
