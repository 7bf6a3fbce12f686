//! Random sources — the only nondeterminism in palette generation.
//!
//! The generator never reaches for a global RNG. It owns a [`RandomSource`]
//! and every draw (scheme roll, hue pick, black/white roll, saturation pick)
//! goes through it, in a fixed order. Swap the source to make sampling
//! reproducible.

use std::cmp::Ordering;

use rand::RngExt;

/// A uniform random source over floats, with index sampling derived from it.
pub trait RandomSource {
    /// A uniform draw in `[low, high)`.
    ///
    /// Returns `low` without drawing when the range is empty, inverted,
    /// or not finite.
    fn uniform(&mut self, low: f32, high: f32) -> f32;

    /// A uniform draw in `[0, 1)`.
    fn chance(&mut self) -> f32 {
        self.uniform(0.0, 1.0)
    }

    /// A uniform index in `[0, len)`: `floor(uniform(0, len))`.
    ///
    /// Returns 0 when `len` is 0; callers must not index with it then.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn index(&mut self, len: usize) -> usize {
        let i = self.uniform(0.0, len as f32) as usize;
        i.min(len.saturating_sub(1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        (**self).uniform(low, high)
    }

    fn chance(&mut self) -> f32 {
        (**self).chance()
    }

    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

/// True when `[low, high)` has nothing to draw from.
fn is_degenerate(low: f32, high: f32) -> bool {
    match low.partial_cmp(&high) {
        Some(Ordering::Less) => !(high - low).is_finite(),
        _ => true,
    }
}

// ---------------------------------------------------------------------------
// ThreadRandom — the thread-local `rand` generator
// ---------------------------------------------------------------------------

/// Draws from `rand`'s thread-local generator. Not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if is_degenerate(low, high) {
            return low;
        }
        rand::rng().random_range(low..high)
    }
}

// ---------------------------------------------------------------------------
// Xorshift32 — a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG. The same seed always yields the same palette.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// A zero seed is bumped to 1 (xorshift never leaves the zero state).
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

impl RandomSource for Xorshift32 {
    #[allow(clippy::cast_possible_truncation)]
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if is_degenerate(low, high) {
            return low;
        }
        let t = f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0);
        let v = f64::from(high - low).mul_add(t, f64::from(low)) as f32;
        // Narrowing to f32 can land exactly on `high`.
        if v < high { v } else { low }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
