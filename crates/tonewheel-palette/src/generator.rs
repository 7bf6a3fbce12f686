//! The palette generator — root hue + scheme in, weighted random colors out.
//!
//! A [`PaletteGenerator`] keeps the hue list derived from its root hue and
//! [`PaletteType`], plus the knobs that shape sampling: hue policy, saturation
//! policy and levels, and the black / white / saturated probabilities.
//!
//! Each call to [`PaletteGenerator::next_color`] makes its draws in this
//! order, all through the generator's [`RandomSource`]:
//!
//! 1. hue (an index, or a root-probability roll followed by an index)
//! 2. black / white / saturated roll
//! 3. saturation (only for the saturated branch, and only for
//!    `Levels` or `Random`)
//!
//! A generator is mutated in place by its owner. It is `Send` when its
//! random source is, but it is not meant to be shared: use one per thread.

use bitflags::bitflags;
use log::{debug, trace, warn};
use tonewheel_color::{Color, Hsb, LIMIT};

use crate::policy::{saturation_levels, HueType, SaturationType};
use crate::random::{RandomSource, ThreadRandom};
use crate::scheme::{wrap_hue, PaletteType};

/// Level count a fresh generator starts with.
pub const DEFAULT_SATURATION_LEVELS: usize = 8;

bitflags! {
    /// Soft validation results of [`PaletteGenerator::set_probabilities`].
    ///
    /// Every flag here is also logged at `warn` level. None of them stops
    /// the call: the caller's values are stored as given.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct ProbabilityWarnings: u8 {
        /// Black + white + saturated is not exactly 1.0.
        const SUM_MISMATCH      = 1 << 0;
        /// The hue type was switched to match the overload that was called.
        const HUE_TYPE_SWITCHED = 1 << 1;
    }
}

// ---------------------------------------------------------------------------
// PaletteGenerator
// ---------------------------------------------------------------------------

/// Samples random colors that stay within a harmony scheme.
///
/// # Examples
///
/// ```
/// use tonewheel_palette::{PaletteGenerator, PaletteType, Xorshift32};
///
/// let mut palette = PaletteGenerator::new(PaletteType::Triadic, 0.0, Xorshift32::new(42));
/// assert_eq!(palette.hues(), &[0.0, 85.0, 170.0]);
///
/// palette.set_probabilities(0.0, 0.0, 1.0);
/// let hsb = palette.next_hsb();
/// assert!(palette.hues().contains(&hsb.hue));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteGenerator<R = ThreadRandom> {
    // ── Hues ──────────────────────────────────────────────────
    root_hue: f32,
    palette_type: PaletteType,
    hues: Vec<f32>,
    hue_type: HueType,
    root_probability: f32,

    // ── Saturation / brightness ───────────────────────────────
    saturation_type: SaturationType,
    saturation_levels: Vec<f32>,
    min_saturation: f32,
    max_saturation: f32,
    /// Stored for callers; sampling never reads it.
    min_brightness: f32,
    max_brightness: f32,

    // ── Black / white / saturated ─────────────────────────────
    black_probability: f32,
    white_probability: f32,
    saturated_probability: f32,

    rng: R,
}

impl<R: RandomSource> PaletteGenerator<R> {
    /// Create a generator around an explicit root hue.
    ///
    /// Initialization rolls [`randomize_palette`](Self::randomize_palette)
    /// once, so the starting probabilities depend on `rng`.
    #[must_use]
    pub fn new(palette_type: PaletteType, root_hue: f32, rng: R) -> Self {
        let mut generator = Self {
            root_hue,
            palette_type,
            hues: Vec::new(),
            hue_type: HueType::Uniform,
            root_probability: 0.0,
            saturation_type: SaturationType::Levels,
            saturation_levels: Vec::new(),
            min_saturation: 0.0,
            max_saturation: LIMIT,
            min_brightness: 0.0,
            max_brightness: LIMIT,
            black_probability: 0.0,
            white_probability: 0.0,
            saturated_probability: 0.0,
            rng,
        };
        generator.reset_palette(palette_type, root_hue);
        generator
    }

    /// Create a generator whose root hue is drawn uniformly from `[0, 255)`.
    #[must_use]
    pub fn with_random_root(palette_type: PaletteType, mut rng: R) -> Self {
        let root_hue = rng.uniform(0.0, LIMIT);
        Self::new(palette_type, root_hue, rng)
    }

    /// Re-run initialization in place: defaults, one scheme roll, hue rebuild.
    pub fn reset_palette(&mut self, palette_type: PaletteType, root_hue: f32) {
        self.palette_type = palette_type;
        self.hue_type = HueType::Uniform;
        self.black_probability = 0.0;
        self.white_probability = 0.0;
        self.saturated_probability = 0.0;
        self.root_probability = 0.0;
        self.max_brightness = LIMIT;
        self.max_saturation = LIMIT;
        self.min_brightness = 0.0;
        self.min_saturation = 0.0;
        self.set_number_of_saturation_levels(DEFAULT_SATURATION_LEVELS);

        // The roll sizes its probabilities by the hue count, which is the
        // root alone at this point.
        self.root_hue = root_hue;
        self.hues.clear();
        self.hues.push(root_hue);
        self.randomize_palette();

        self.set_root_hue(root_hue);
    }

    // ─── Hues ────────────────────────────────────────────────────────────

    #[must_use]
    pub const fn root_hue(&self) -> f32 {
        self.root_hue
    }

    /// Store `hue` and rebuild the hue list from scratch for the current
    /// palette type. `hues()[0]` is `hue` afterwards.
    pub fn set_root_hue(&mut self, hue: f32) {
        self.root_hue = hue;
        self.hues = self.palette_type.derive_hues(hue);
        trace!("{} hues from root {hue}: {:?}", self.palette_type, self.hues);
    }

    #[must_use]
    pub const fn palette_type(&self) -> PaletteType {
        self.palette_type
    }

    /// Switch scheme and rebuild the hue list around the same root.
    pub fn set_palette_type(&mut self, palette_type: PaletteType) {
        self.palette_type = palette_type;
        self.set_root_hue(self.root_hue);
    }

    /// The derived hues. Element 0 is the root hue.
    #[must_use]
    pub fn hues(&self) -> &[f32] {
        &self.hues
    }

    #[must_use]
    pub const fn hue_type(&self) -> HueType {
        self.hue_type
    }

    pub const fn set_hue_type(&mut self, hue_type: HueType) {
        self.hue_type = hue_type;
    }

    #[must_use]
    pub const fn root_probability(&self) -> f32 {
        self.root_probability
    }

    pub const fn set_root_probability(&mut self, probability: f32) {
        self.root_probability = probability;
    }

    // ─── Scheme Roll ─────────────────────────────────────────────────────

    /// Randomly pick one of four black/white/saturated regimes.
    ///
    /// | roll        | regime                                              |
    /// |-------------|-----------------------------------------------------|
    /// | `< 0.3`     | fully saturated                                     |
    /// | `< 0.4`     | black `1/(1+n)`, rest saturated                     |
    /// | `< 0.5`     | white `1/(1+n)`, rest saturated, hue policy coin    |
    /// | `< 0.6`     | black and white `1/(2+n)` each, hue policy coin     |
    /// | otherwise   | nothing changes                                     |
    ///
    /// `n` is the current hue count. The hue policy coin switches to
    /// [`HueType::SkewedRoot`] with a random root probability half the time,
    /// and to [`HueType::Uniform`] otherwise.
    #[allow(clippy::cast_precision_loss)]
    pub fn randomize_palette(&mut self) {
        let roll = self.rng.chance();
        let n = self.hues.len() as f32;

        if roll < 0.3 {
            self.saturated_probability = 1.0;
            self.black_probability = 0.0;
            self.white_probability = 0.0;
            debug!("palette roll {roll:.3}: saturated");
        } else if roll < 0.4 {
            self.black_probability = 1.0 / (1.0 + n);
            self.saturated_probability = 1.0 - self.black_probability;
            self.white_probability = 0.0;
            debug!("palette roll {roll:.3}: black-biased");
        } else if roll < 0.5 {
            self.white_probability = 1.0 / (1.0 + n);
            self.saturated_probability = 1.0 - self.white_probability;
            self.roll_hue_type();
            self.black_probability = 0.0;
            debug!("palette roll {roll:.3}: white-biased, {} hues", self.hue_type);
        } else if roll < 0.6 {
            self.black_probability = 1.0 / (2.0 + n);
            self.white_probability = 1.0 / (2.0 + n);
            self.saturated_probability = 1.0 - self.black_probability - self.white_probability;
            self.roll_hue_type();
            debug!("palette roll {roll:.3}: black-and-white-biased, {} hues", self.hue_type);
        } else {
            debug!("palette roll {roll:.3}: unchanged");
        }
    }

    fn roll_hue_type(&mut self) {
        if self.rng.chance() < 0.5 {
            self.hue_type = HueType::SkewedRoot;
            self.root_probability = self.rng.chance();
        } else {
            self.hue_type = HueType::Uniform;
        }
    }

    // ─── Probabilities ───────────────────────────────────────────────────

    /// Set black / white / saturated probabilities and use uniform hues.
    ///
    /// Values are stored verbatim. A sum other than exactly 1.0, or a hue
    /// type that had to be switched, is logged and reported in the result.
    pub fn set_probabilities(
        &mut self,
        black: f32,
        white: f32,
        saturated: f32,
    ) -> ProbabilityWarnings {
        let mut warnings = check_sum(black, white, saturated);
        if self.hue_type != HueType::Uniform {
            self.hue_type = HueType::Uniform;
            warn!("hue distribution type set to {}", HueType::Uniform);
            warnings |= ProbabilityWarnings::HUE_TYPE_SWITCHED;
        }
        self.black_probability = black;
        self.white_probability = white;
        self.saturated_probability = saturated;
        warnings
    }

    /// Like [`set_probabilities`](Self::set_probabilities), but switches to
    /// [`HueType::SkewedRoot`] and stores `root` as the root probability.
    pub fn set_probabilities_with_root(
        &mut self,
        black: f32,
        white: f32,
        saturated: f32,
        root: f32,
    ) -> ProbabilityWarnings {
        let mut warnings = check_sum(black, white, saturated);
        if self.hue_type != HueType::SkewedRoot {
            self.hue_type = HueType::SkewedRoot;
            warn!("hue distribution type set to {}", HueType::SkewedRoot);
            warnings |= ProbabilityWarnings::HUE_TYPE_SWITCHED;
        }
        self.black_probability = black;
        self.white_probability = white;
        self.saturated_probability = saturated;
        self.root_probability = root;
        warnings
    }

    #[must_use]
    pub const fn black_probability(&self) -> f32 {
        self.black_probability
    }

    pub const fn set_black_probability(&mut self, probability: f32) {
        self.black_probability = probability;
    }

    #[must_use]
    pub const fn white_probability(&self) -> f32 {
        self.white_probability
    }

    pub const fn set_white_probability(&mut self, probability: f32) {
        self.white_probability = probability;
    }

    #[must_use]
    pub const fn saturated_probability(&self) -> f32 {
        self.saturated_probability
    }

    pub const fn set_saturated_probability(&mut self, probability: f32) {
        self.saturated_probability = probability;
    }

    // ─── Saturation ──────────────────────────────────────────────────────

    #[must_use]
    pub const fn saturation_type(&self) -> SaturationType {
        self.saturation_type
    }

    pub const fn set_saturation_type(&mut self, saturation_type: SaturationType) {
        self.saturation_type = saturation_type;
    }

    /// Switch to [`SaturationType::Levels`] with `count` levels strictly
    /// between 0 and the maximum saturation.
    pub fn set_number_of_saturation_levels(&mut self, count: usize) {
        self.saturation_type = SaturationType::Levels;
        self.saturation_levels = saturation_levels(self.max_saturation, count);
    }

    #[must_use]
    pub fn number_of_saturation_levels(&self) -> usize {
        self.saturation_levels.len()
    }

    #[must_use]
    pub fn saturation_levels(&self) -> &[f32] {
        &self.saturation_levels
    }

    #[must_use]
    pub const fn min_saturation(&self) -> f32 {
        self.min_saturation
    }

    pub const fn set_min_saturation(&mut self, saturation: f32) {
        self.min_saturation = saturation;
    }

    #[must_use]
    pub const fn max_saturation(&self) -> f32 {
        self.max_saturation
    }

    /// Store the maximum saturation and rescale the levels to it, keeping
    /// the level count. The saturation type is left alone.
    pub fn set_max_saturation(&mut self, saturation: f32) {
        self.max_saturation = saturation;
        self.saturation_levels = saturation_levels(saturation, self.saturation_levels.len());
    }

    // ─── Brightness ──────────────────────────────────────────────────────

    #[must_use]
    pub const fn min_brightness(&self) -> f32 {
        self.min_brightness
    }

    pub const fn set_min_brightness(&mut self, brightness: f32) {
        self.min_brightness = brightness;
    }

    #[must_use]
    pub const fn max_brightness(&self) -> f32 {
        self.max_brightness
    }

    pub const fn set_max_brightness(&mut self, brightness: f32) {
        self.max_brightness = brightness;
    }

    // ─── Random Source ───────────────────────────────────────────────────

    #[must_use]
    pub const fn rng(&self) -> &R {
        &self.rng
    }

    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // ─── Sampling ────────────────────────────────────────────────────────

    /// Sample the next color as an HSB triple. Never fails.
    pub fn next_hsb(&mut self) -> Hsb {
        let hue = self.next_hue();

        let roll = self.rng.chance();
        let (saturation, brightness) = if roll < self.black_probability {
            (0.0, 0.0)
        } else if roll < self.black_probability + self.white_probability {
            (0.0, self.max_brightness)
        } else {
            (self.next_saturation(), self.max_brightness)
        };

        Hsb::new(hue, saturation, brightness)
    }

    /// Sample the next color. Never fails.
    pub fn next_color(&mut self) -> Color {
        self.next_hsb().to_color()
    }

    fn next_hue(&mut self) -> f32 {
        let uniform = self.hue_type == HueType::Uniform
            || self.palette_type == PaletteType::Monochrome
            || self.hues.len() < 2;

        if uniform {
            let i = self.rng.index(self.hues.len());
            return wrap_hue(self.hues[i]);
        }

        if self.rng.chance() < self.root_probability {
            self.hues[0]
        } else {
            let i = 1 + self.rng.index(self.hues.len() - 1);
            wrap_hue(self.hues[i])
        }
    }

    fn next_saturation(&mut self) -> f32 {
        match self.saturation_type {
            SaturationType::Static => self.max_saturation,
            SaturationType::Levels if self.saturation_levels.is_empty() => self.max_saturation,
            SaturationType::Levels => {
                let i = self.rng.index(self.saturation_levels.len());
                self.saturation_levels[i]
            }
            SaturationType::Random => self.rng.uniform(self.min_saturation, self.max_saturation),
        }
    }
}

/// Flag (and log) probabilities that do not add up to exactly 1.0.
#[allow(clippy::float_cmp)]
fn check_sum(black: f32, white: f32, saturated: f32) -> ProbabilityWarnings {
    let sum = black + white + saturated;
    if sum == 1.0 {
        ProbabilityWarnings::empty()
    } else {
        warn!("probabilities do not add up to one (black {black} + white {white} + saturated {saturated} = {sum})");
        ProbabilityWarnings::SUM_MISMATCH
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
