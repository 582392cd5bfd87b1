//! The five conversion primitives exposed to extraction, visualization and
//! persistence code.
//!
//! ```text
//! rgb_to_oklch:  decode ─▶ LMS ─▶ ∛ ─▶ OKLab ─▶ polar
//! oklch_to_rgb:  polar⁻¹ ─▶ OKLab⁻¹ ─▶ ³ ─▶ LMS⁻¹ ─▶ encode + clamp
//! ```
//!
//! Every function is pure and holds no state, so bulk conversions can be
//! split across threads freely.

use crate::color_management::gamut;
use crate::error::Result;
use crate::hex;
use crate::model::{Oklch, Rgb8};

/// Convert an 8-bit sRGB color to OKLCH.
///
/// Channels are taken as wide integers so that caller bugs surface as
/// [`ColorError::OutOfRange`](crate::ColorError::OutOfRange) instead of being
/// clamped away.
pub fn rgb_to_oklch(r: i32, g: i32, b: i32) -> Result<Oklch> {
    Ok(Rgb8::try_new(r, g, b)?.to_oklch())
}

/// Convert OKLCH to 8-bit sRGB, clamping anything outside the sRGB gamut.
///
/// Never fails; every input yields a valid triple.
pub fn oklch_to_rgb(l: f64, c: f64, h: f64) -> Rgb8 {
    gamut::clamp_to_rgb8(Oklch::new(l, c, h))
}

/// Whether OKLCH `(l, c, h)` lies in the sRGB gamut with tolerance `epsilon`
/// on each linear channel. Pass [`DEFAULT_GAMUT_EPSILON`](crate::DEFAULT_GAMUT_EPSILON)
/// for the standard test.
pub fn is_in_srgb_gamut(l: f64, c: f64, h: f64, epsilon: f64) -> bool {
    gamut::is_in_srgb_gamut(Oklch::new(l, c, h), epsilon)
}

/// Format as `#RRGGBB`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    hex::format(Rgb8::new(r, g, b))
}

/// Parse `#RRGGBB` (either case).
pub fn hex_to_rgb(s: &str) -> Result<Rgb8> {
    hex::parse(s)
}
