//! # tonewheel-palette — procedural color palettes
//!
//! Derives a small set of related hues from a root hue and a harmony scheme,
//! then samples colors from them with configurable weighting toward black,
//! white, and saturation levels. Every channel, hue included, is on a 0–255
//! scale.
//!
//! # Architecture
//!
//! ```text
//! PaletteType + root_hue
//!     │
//!     ▼
//! scheme.rs:    derive the hue list (pure math)
//!     │
//!     ▼
//! generator.rs: one scheme roll at init, then per color:
//!               hue pick (policy.rs: HueType)
//!               black / white / saturated roll
//!               saturation pick (policy.rs: SaturationType)
//!     │
//!     ▼
//! tonewheel_color::Hsb ─► Color
//! ```
//!
//! All randomness goes through a [`RandomSource`] owned by the generator
//! (random.rs). [`ThreadRandom`] wraps `rand`; [`Xorshift32`] is seeded
//! and reproducible. config.rs loads a [`PaletteConfig`] from JSON or
//! `key=value` settings.
//!
//! Nothing here fails at sampling time. Probability sums that are off and
//! implicit hue-type switches are logged through `log` and returned as
//! [`ProbabilityWarnings`]; callers decide whether to care.

// Hue counts and level indices are tiny; usize ↔ f32 casts are exact.
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod error;
pub mod generator;
pub mod policy;
pub mod random;
pub mod scheme;

pub use config::{PaletteConfig, Probabilities};
pub use error::{ConfigError, ParseSchemeError};
pub use generator::{PaletteGenerator, ProbabilityWarnings, DEFAULT_SATURATION_LEVELS};
pub use policy::{HueType, SaturationType};
pub use random::{RandomSource, ThreadRandom, Xorshift32};
pub use scheme::PaletteType;
pub use tonewheel_color::{Color, Hsb};
