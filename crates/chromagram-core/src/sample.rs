//! Histogram rows and their projection into OKLCH.
//!
//! Reading and writing rows is left to callers; these types only fix the
//! record shape (`Hex`, `R`, `G`, `B`, `Count`) and the OKLCH point shape
//! (`L`, `C`, `H`, `hex`, `count`) consumed by visualizations.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::color_management::polar;
use crate::error::{ColorError, Result};
use crate::hex;
use crate::model::{Oklch, Rgb8};

/// One histogram bucket: a color and how many pixels had it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCount {
    #[serde(rename = "Hex")]
    pub hex: String,
    #[serde(rename = "R")]
    pub r: u8,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "B")]
    pub b: u8,
    #[serde(rename = "Count")]
    pub count: u64,
}

impl ColorCount {
    pub fn new(rgb: Rgb8, count: u64) -> Self {
        Self {
            hex: rgb.to_hex(),
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            count,
        }
    }

    /// The row's color, checking that `hex` parses and agrees with R/G/B.
    pub fn rgb(&self) -> Result<Rgb8> {
        let parsed = hex::parse(&self.hex)?;
        if parsed != Rgb8::new(self.r, self.g, self.b) {
            return Err(ColorError::MalformedHex(self.hex.clone()));
        }
        Ok(parsed)
    }
}

/// A histogram row placed in OKLCH, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OklchPoint {
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "H")]
    pub h: f64,
    pub hex: String,
    pub count: u64,
}

impl OklchPoint {
    pub fn from_count(row: &ColorCount) -> Result<Self> {
        let rgb = row.rgb()?;
        let lch = rgb.to_oklch();
        Ok(Self {
            l: round_to(lch.l, 4),
            c: round_to(lch.c, 4),
            h: polar::normalize_hue(round_to(lch.h, 2)),
            hex: rgb.to_hex(),
            count: row.count,
        })
    }

    pub fn oklch(&self) -> Oklch {
        Oklch::new(self.l, self.c, self.h)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Inclusive L/C/H window. The hue range wraps through 0° when its start is
/// greater than its end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OklchFilter {
    pub lightness: RangeInclusive<f64>,
    pub chroma: RangeInclusive<f64>,
    pub hue: RangeInclusive<f64>,
}

impl OklchFilter {
    pub fn contains(&self, lch: &Oklch) -> bool {
        self.lightness.contains(&lch.l)
            && self.chroma.contains(&lch.c)
            && polar::hue_in_range(lch.h, *self.hue.start(), *self.hue.end())
    }
}

impl Default for OklchFilter {
    /// Passes every color sRGB can produce.
    fn default() -> Self {
        Self {
            lightness: 0.0..=1.0,
            chroma: 0.0..=0.4,
            hue: 0.0..=360.0,
        }
    }
}
