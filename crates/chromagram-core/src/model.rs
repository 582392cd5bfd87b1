//! Color value types.
//!
//! All types are small `Copy` tuples with no identity beyond their values.
//! Conversions between them live in [`crate::color_management`]; the
//! methods here are shorthands for those pipelines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color_management::{color_space, gamut, polar, transfer};
use crate::error::{ColorError, Result};
use crate::hex;

/// A displayable 8-bit-per-channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integers, rejecting channels outside `0..=255`.
    pub fn try_new(r: i32, g: i32, b: i32) -> Result<Self> {
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
        })
    }

    /// Remove the sRGB gamma from each channel.
    pub fn to_linear(self) -> LinearRgb {
        LinearRgb::new(
            transfer::decode(self.r),
            transfer::decode(self.g),
            transfer::decode(self.b),
        )
    }

    pub fn to_oklab(self) -> Oklab {
        color_space::linear_srgb_to_oklab(self.to_linear())
    }

    pub fn to_oklch(self) -> Oklch {
        polar::lab_to_lch(self.to_oklab())
    }

    /// Canonical `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        hex::format(self)
    }
}

fn channel(name: &'static str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| ColorError::OutOfRange {
        channel: name,
        value,
    })
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        hex::parse(s)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(rgb: Rgb8) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

/// Linear-light sRGB.
///
/// In-gamut colors lie in `[0, 1]` per channel, but values are never clamped:
/// out-of-gamut OKLCH input and rounding error both produce legal values
/// outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Re-apply the sRGB gamma and quantize, clamping every channel.
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8::new(
            transfer::encode(self.r),
            transfer::encode(self.g),
            transfer::encode(self.b),
        )
    }

    /// Whether every channel lies in `[-epsilon, 1 + epsilon]`.
    pub fn is_within(self, epsilon: f64) -> bool {
        gamut::channels_within(self, epsilon)
    }

    pub fn to_oklab(self) -> Oklab {
        color_space::linear_srgb_to_oklab(self)
    }
}

impl From<[f64; 3]> for LinearRgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// OKLab: perceptual lightness `l` plus the signed opponent axes `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Linear sRGB without clamping.
    pub fn to_linear_srgb(self) -> LinearRgb {
        color_space::oklab_to_linear_srgb(self)
    }

    pub fn to_oklch(self) -> Oklch {
        polar::lab_to_lch(self)
    }
}

/// OKLCH: lightness, chroma and hue in degrees.
///
/// Values produced by this crate always have `c >= 0` and `h` in `[0, 360)`.
/// Values built by callers may carry any hue; it is reduced modulo 360 by the
/// trigonometry on the way back to OKLab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    pub fn to_oklab(self) -> Oklab {
        polar::lch_to_lab(self)
    }

    /// Linear sRGB without clamping.
    pub fn to_linear_srgb(self) -> LinearRgb {
        self.to_oklab().to_linear_srgb()
    }

    /// Nearest displayable color, clamping out-of-gamut channels.
    pub fn to_rgb8(self) -> Rgb8 {
        gamut::clamp_to_rgb8(self)
    }

    /// Gamut test with [`gamut::DEFAULT_GAMUT_EPSILON`].
    pub fn is_in_srgb_gamut(self) -> bool {
        gamut::is_in_srgb_gamut(self, gamut::DEFAULT_GAMUT_EPSILON)
    }
}
