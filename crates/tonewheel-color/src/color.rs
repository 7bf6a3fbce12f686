// SPDX-License-Identifier: MIT
//
// tonewheel color system — 8-bit RGBA values built from 0–255 HSB triples.
//
// Single-character variable names (r, g, b, h, s, v) are the standard
// convention in color conversion code.
#![allow(clippy::many_single_char_names)]
//
// Every channel, hue included, lives on the same 0–255 scale. The
// conversion is the classic six-sector HSB → RGB mapping:
//
//   hue ─► sector (0..6) + remainder ─► (p, q, t) ramps ─► RGB
//
// Channel values are truncated, not rounded, when they land in a `u8`.
// Brightness 0 is always black and saturation 0 is always a gray, no
// matter what the hue is.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound of every channel, hue included.
pub const LIMIT: f32 = 255.0;

// ─── Hsb ─────────────────────────────────────────────────────────────────────

/// A hue / saturation / brightness triple on the 0–255 scale.
///
/// This is what a palette generator actually samples. It is kept around
/// (instead of going straight to RGB) so that callers can inspect the
/// exact hue that was drawn, which the 8-bit round trip would blur.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsb {
    /// Hue: 0.0 to 255.0 (exclusive). Wraps around.
    pub hue: f32,

    /// Saturation: 0.0 (gray) to 255.0 (fully saturated).
    pub saturation: f32,

    /// Brightness: 0.0 (black) to 255.0 (full value).
    pub brightness: f32,
}

impl Hsb {
    /// Pure black. Hue is irrelevant.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self { hue, saturation, brightness }
    }

    /// Whether the hue of this triple has no visible effect
    /// (black, or a gray with zero saturation).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.brightness <= 0.0 || self.saturation <= 0.0
    }

    /// Resolve to an 8-bit color.
    #[inline]
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_hsb(self.hue, self.saturation, self.brightness)
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An 8-bit RGBA color.
///
/// # Examples
///
/// ```
/// use tonewheel_color::Color;
///
/// let red = Color::from_hsb(0.0, 255.0, 255.0);
/// assert_eq!(red, Color::rgb8(255, 0, 0));
///
/// let gray = Color::from_hsb(42.0, 0.0, 128.0);
/// assert_eq!(gray, Color::gray(128));
///
/// assert_eq!(Color::hex("#ff0000"), Some(red));
/// assert_eq!(red.to_hex(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    /// Create a color from 8-bit channels with alpha.
    #[inline]
    #[must_use]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque gray where all three channels are `value`.
    #[inline]
    #[must_use]
    pub const fn gray(value: u8) -> Self {
        Self::rgb8(value, value, value)
    }

    /// Pure black.
    pub const BLACK: Self = Self::gray(0);

    /// Pure white.
    pub const WHITE: Self = Self::gray(u8::MAX);

    /// Create an opaque color from a 0–255 HSB triple.
    ///
    /// Saturation and brightness are clamped to `0..=255`. The hue wraps,
    /// so `255.0` is the same as `0.0`. Never fails.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let saturation = clamp_channel(saturation);
        let brightness = clamp_channel(brightness);

        if brightness <= 0.0 {
            return Self::BLACK;
        }
        if saturation <= 0.0 {
            return Self::gray(to_u8(brightness));
        }

        let hue = if hue.is_finite() { hue.rem_euclid(LIMIT) } else { 0.0 };
        let hue_six = hue * 6.0 / LIMIT;
        let sector = hue_six.floor();
        let remainder = hue_six - sector;
        let s = saturation / LIMIT;

        let v = to_u8(brightness);
        let p = to_u8((1.0 - s) * brightness);
        let q = to_u8(s.mul_add(-remainder, 1.0) * brightness);
        let t = to_u8(s.mul_add(-(1.0 - remainder), 1.0) * brightness);

        // `sector` is in 0..=6 after the wrap above; 6 only through rounding.
        match sector as i32 {
            0 | 6 => Self::rgb8(v, t, p),
            1 => Self::rgb8(q, v, p),
            2 => Self::rgb8(p, v, t),
            3 => Self::rgb8(p, q, v),
            4 => Self::rgb8(t, p, v),
            _ => Self::rgb8(v, p, q),
        }
    }

    /// Create a color from a hex string.
    ///
    /// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without `#`).
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Whether this color is fully opaque.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    // ─── HSB Readback ────────────────────────────────────────────────────

    /// Convert back to a 0–255 HSB triple.
    ///
    /// Black reports `(0, 0, 0)`; grays report hue 0 and saturation 0.
    /// Hue is in `[0, 255)`.
    #[must_use]
    pub fn to_hsb(self) -> Hsb {
        let r = f32::from(self.r);
        let g = f32::from(self.g);
        let b = f32::from(self.b);

        let max = r.max(g).max(b);
        if max <= 0.0 {
            return Hsb::BLACK;
        }
        let min = r.min(g).min(b);
        let delta = max - min;
        if delta <= 0.0 {
            return Hsb::new(0.0, 0.0, max);
        }

        #[allow(clippy::float_cmp)]
        let mut hue = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        hue /= 6.0;
        if hue < 0.0 {
            hue += 1.0;
        }

        Hsb::new((hue * LIMIT).rem_euclid(LIMIT), LIMIT * delta / max, max)
    }

    /// Hue on the 0–255 scale. See [`Color::to_hsb`].
    #[inline]
    #[must_use]
    pub fn hue(self) -> f32 {
        self.to_hsb().hue
    }

    /// Saturation on the 0–255 scale. See [`Color::to_hsb`].
    #[inline]
    #[must_use]
    pub fn saturation(self) -> f32 {
        self.to_hsb().saturation
    }

    /// Brightness (the largest channel).
    #[inline]
    #[must_use]
    pub fn brightness(self) -> f32 {
        f32::from(self.r.max(self.g).max(self.b))
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Convert to hex string (`#rrggbb`, or `#rrggbbaa` if not opaque).
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b, a } = self;
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl From<Hsb> for Color {
    fn from(hsb: Hsb) -> Self {
        hsb.to_color()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Channel Helpers ─────────────────────────────────────────────────────────

/// Clamp a channel to `0..=255`, mapping NaN to 0.
#[inline]
fn clamp_channel(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, LIMIT) }
}

/// Truncate a 0–255 float into a `u8`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    clamp_channel(v) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a hex color string into a Color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RGBA
        4 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            let a = parse_hex_digit(bytes[3])?;
            Some(Color::rgba8(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        // #RRGGBBAA
        8 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            let a = parse_hex_byte(&bytes[6..8])?;
            Some(Color::rgba8(r, g, b, a))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    // ── HSB → RGB ────────────────────────────────────────────────────────

    #[test]
    fn primaries_from_hsb() {
        assert_eq!(Color::from_hsb(0.0, 255.0, 255.0), Color::rgb8(255, 0, 0));
        assert_eq!(Color::from_hsb(85.0, 255.0, 255.0), Color::rgb8(0, 255, 0));
        assert_eq!(Color::from_hsb(170.0, 255.0, 255.0), Color::rgb8(0, 0, 255));
    }

    #[test]
    fn zero_brightness_is_black_for_any_hue() {
        for hue in [0.0, 42.0, 128.0, 254.9] {
            assert_eq!(Color::from_hsb(hue, 255.0, 0.0), Color::BLACK);
        }
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(Color::from_hsb(100.0, 0.0, 128.0), Color::gray(128));
        assert_eq!(Color::from_hsb(100.0, 0.0, 255.0), Color::WHITE);
    }

    #[test]
    fn half_saturation_red() {
        assert_eq!(Color::from_hsb(0.0, 127.5, 200.0), Color::rgb8(200, 100, 100));
    }

    #[test]
    fn hue_wraps_at_limit() {
        assert_eq!(
            Color::from_hsb(255.0, 255.0, 255.0),
            Color::from_hsb(0.0, 255.0, 255.0)
        );
        assert_eq!(
            Color::from_hsb(-85.0, 255.0, 255.0),
            Color::from_hsb(170.0, 255.0, 255.0)
        );
    }

    #[test]
    fn out_of_range_channels_clamp() {
        assert_eq!(Color::from_hsb(0.0, 999.0, 999.0), Color::rgb8(255, 0, 0));
        assert_eq!(Color::from_hsb(0.0, -5.0, 128.0), Color::gray(128));
        assert_eq!(Color::from_hsb(f32::NAN, 255.0, 255.0), Color::rgb8(255, 0, 0));
    }

    #[test]
    fn hsb_into_color() {
        let c: Color = Hsb::new(0.0, 255.0, 255.0).into();
        assert_eq!(c, Color::rgb8(255, 0, 0));
    }

    #[test]
    fn achromatic_triples() {
        assert!(Hsb::BLACK.is_achromatic());
        assert!(Hsb::new(10.0, 0.0, 255.0).is_achromatic());
        assert!(!Hsb::new(10.0, 1.0, 255.0).is_achromatic());
    }

    // ── RGB → HSB ────────────────────────────────────────────────────────

    #[test]
    fn primaries_to_hsb() {
        let red = Color::rgb8(255, 0, 0).to_hsb();
        assert!(approx_eq(red.hue, 0.0, 1e-3));
        assert!(approx_eq(red.saturation, 255.0, 1e-3));
        assert!(approx_eq(red.brightness, 255.0, 1e-3));

        assert!(approx_eq(Color::rgb8(0, 255, 0).hue(), 85.0, 1e-3));
        assert!(approx_eq(Color::rgb8(0, 0, 255).hue(), 170.0, 1e-3));
    }

    #[test]
    fn magenta_hue_is_positive() {
        // r == max with b > g gives a negative raw hue that must wrap.
        let h = Color::rgb8(255, 0, 128).hue();
        assert!((0.0..LIMIT).contains(&h), "hue out of range: {h}");
        assert!(h > 200.0);
    }

    #[test]
    fn black_and_gray_readback() {
        assert_eq!(Color::BLACK.to_hsb(), Hsb::BLACK);
        let g = Color::gray(77).to_hsb();
        assert_eq!(g, Hsb::new(0.0, 0.0, 77.0));
    }

    #[test]
    fn brightness_is_max_channel() {
        assert!(approx_eq(Color::rgb8(10, 200, 30).brightness(), 200.0, 1e-6));
    }

    #[test]
    fn hsb_roundtrip_is_close() {
        for hue in [0.0_f32, 20.0, 60.0, 100.0, 140.0, 200.0, 240.0] {
            let back = Color::from_hsb(hue, 255.0, 255.0).to_hsb();
            assert!(
                approx_eq(back.hue, hue, 1.5),
                "hue {hue} came back as {}",
                back.hue
            );
        }
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        assert_eq!(Color::hex("#ff8000"), Some(Color::rgb8(255, 128, 0)));
    }

    #[test]
    fn hex_parsing_short() {
        assert_eq!(Color::hex("#f00"), Some(Color::rgb8(255, 0, 0)));
        assert_eq!(Color::hex("f008"), Some(Color::rgba8(255, 0, 0, 0x88)));
    }

    #[test]
    fn hex_parsing_with_alpha() {
        assert_eq!(Color::hex("#11223344"), Some(Color::rgba8(0x11, 0x22, 0x33, 0x44)));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert_eq!(Color::hex("#ggg"), None);
        assert_eq!(Color::hex(""), None);
        assert_eq!(Color::hex("#12345"), None);
    }

    #[test]
    fn hex_output() {
        assert_eq!(Color::rgb8(0x12, 0xab, 0x00).to_hex(), "#12ab00");
        assert_eq!(Color::rgba8(1, 2, 3, 4).to_hex(), "#01020304");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Color::rgb8(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":255}"#);
        let hsb: Hsb = serde_json::from_str(r#"{"hue":1.0,"saturation":2.0,"brightness":3.0}"#).unwrap();
        assert_eq!(hsb, Hsb::new(1.0, 2.0, 3.0));
    }
}
