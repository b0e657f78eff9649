//! 8-bit RGB, RGBA and HSV colors.
//!
//! The HSV conversions are the fast integer approximations: hue is split into
//! six regions of width 43 and every product is scaled back with `>> 8`.
//! A round trip is close, not exact.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use rand::Rng;

/// Stops of the heatmap ramp: black, blue, cyan, green, yellow, red, white.
const HEATMAP_STOPS: [Color; 7] = [
    Color::new(0, 0, 0),
    Color::new(0, 0, 255),
    Color::new(0, 255, 255),
    Color::new(0, 255, 0),
    Color::new(255, 255, 0),
    Color::new(255, 0, 0),
    Color::new(255, 255, 255),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// RGBA color with the same layout as four consecutive bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct ColorAlpha {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorHsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color `t` of the way from `self` to `other`.
    ///
    /// `t` is expected in `[0.0, 1.0]`; channels saturate outside it.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }

    /// Picks a color at a uniformly random point on the line to `other`.
    #[must_use]
    pub fn random_between<R: Rng + ?Sized>(self, other: Self, rng: &mut R) -> Self {
        self.lerp(other, rng.random::<f32>())
    }

    #[must_use]
    pub const fn with_alpha(self, a: u8) -> ColorAlpha {
        ColorAlpha::new(self.r, self.g, self.b, a)
    }
}

impl ColorAlpha {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Reinterprets the bits of a float as a color, for packing colors into
    /// float-only channels.
    #[must_use]
    pub fn from_f32(value: f32) -> Self {
        bytemuck::cast(value)
    }

    /// Inverse of [`ColorAlpha::from_f32`].
    #[must_use]
    pub fn to_f32(self) -> f32 {
        bytemuck::cast(self)
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            a: lerp_channel(self.a, other.a, t),
        }
    }

    #[must_use]
    pub fn random_between<R: Rng + ?Sized>(self, other: Self, rng: &mut R) -> Self {
        self.lerp(other, rng.random::<f32>())
    }
}

impl ColorHsv {
    #[must_use]
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl From<ColorAlpha> for Color {
    fn from(color: ColorAlpha) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for ColorAlpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for ColorHsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.h, self.s, self.v)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    (f32::from(from) + (f32::from(to) - f32::from(from)) * t) as u8
}

/// Converts HSV to RGB with integer arithmetic.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(hsv: ColorHsv) -> Color {
    if hsv.s == 0 {
        return Color::new(hsv.v, hsv.v, hsv.v);
    }

    let (h, s, v) = (u32::from(hsv.h), u32::from(hsv.s), u32::from(hsv.v));
    let region = h / 43;
    let remainder = (h - region * 43) * 6;

    // Each product is at most 255 * 255, so `>> 8` always fits in a u8
    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * remainder) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;

    match region {
        0 => Color::new(hsv.v, t, p),
        1 => Color::new(q, hsv.v, p),
        2 => Color::new(p, hsv.v, t),
        3 => Color::new(p, q, hsv.v),
        4 => Color::new(t, p, hsv.v),
        _ => Color::new(hsv.v, p, q),
    }
}

/// Converts RGB to HSV with integer arithmetic.
///
/// Hue wraps modulo 256 when the dominant channel is red and blue exceeds
/// green.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hsv(rgb: Color) -> ColorHsv {
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let max = rgb.r.max(rgb.g).max(rgb.b);

    if max == 0 {
        return ColorHsv::new(0, 0, 0);
    }

    let delta = i32::from(max - min);
    let s = (255 * delta / i32::from(max)) as u8;
    if s == 0 {
        return ColorHsv::new(0, 0, max);
    }

    let (r, g, b) = (i32::from(rgb.r), i32::from(rgb.g), i32::from(rgb.b));
    let h = if max == rgb.r {
        43 * (g - b) / delta
    } else if max == rgb.g {
        85 + 43 * (b - r) / delta
    } else {
        171 + 43 * (r - g) / delta
    };

    ColorHsv::new(h as u8, s, max)
}

/// A color between `from` and `to`, drawn with the thread-local generator.
///
/// Every channel moves by the same fraction, so the result lies on the
/// straight line between the two colors.
#[must_use]
pub fn random_color(from: Color, to: Color) -> Color {
    from.random_between(to, &mut rand::rng())
}

/// Maps `value` in `[0.0, 1.0]` onto a seven-stop heatmap ramp.
///
/// Values below the range (and NaN) are black, values at or above 1.0 white.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn heatmap(value: f32) -> Color {
    let last = HEATMAP_STOPS.len() - 1;
    if value.is_nan() || value < 0.0 {
        return HEATMAP_STOPS[0];
    }
    if value >= 1.0 {
        return HEATMAP_STOPS[last];
    }

    let scaled = value * last as f32;
    let lower = (scaled.floor() as usize).min(last - 1);
    let fraction = scaled - lower as f32;
    HEATMAP_STOPS[lower].lerp(HEATMAP_STOPS[lower + 1], fraction)
}
