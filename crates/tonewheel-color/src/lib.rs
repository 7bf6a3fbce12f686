// SPDX-License-Identifier: MIT
//
// tonewheel-color — the color value type for tonewheel.
//
// Palettes are sampled in HSB space with every channel on a 0–255 scale
// (hue included, so a full turn of the color wheel is 255, not 360).
// This crate holds the sampled triple (`Hsb`) and the 8-bit RGBA value it
// resolves to (`Color`), plus the conversions between them. It has no
// knowledge of palettes or randomness.

pub mod color;

pub use color::{Color, Hsb, LIMIT};
