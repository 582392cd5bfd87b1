//! OKLab ↔ OKLCH polar transform and hue helpers.

use crate::model::{Oklab, Oklch};

/// Chroma below which a color counts as achromatic and reports hue 0.
///
/// Grays come out of the published matrices with a chroma on the order of
/// 1e-8 rather than exactly 0. The smallest chroma step between two distinct
/// 8-bit colors is several orders of magnitude larger.
pub const ACHROMATIC_CHROMA: f64 = 1e-6;

/// Reduce a hue angle in degrees into `[0, 360)`.
///
/// Non-finite input yields NaN.
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360.0
    if h >= 360.0 { 0.0 } else { h }
}

/// Whether hue `h` lies within the inclusive arc from `lo` to `hi`.
///
/// When `lo > hi` the arc wraps through 0°, so `hue_in_range(350.0, 340.0, 20.0)`
/// holds.
pub fn hue_in_range(h: f64, lo: f64, hi: f64) -> bool {
    if lo <= hi {
        h >= lo && h <= hi
    } else {
        h >= lo || h <= hi
    }
}

/// Cartesian (a, b) to polar (C, H).
pub fn lab_to_lch(lab: Oklab) -> Oklch {
    let c = lab.a.hypot(lab.b);
    let h = if c < ACHROMATIC_CHROMA {
        0.0
    } else {
        normalize_hue(lab.b.atan2(lab.a).to_degrees())
    };
    Oklch::new(lab.l, c, h)
}

/// Polar (C, H) to Cartesian (a, b). Any hue is accepted, including when
/// `C = 0`.
pub fn lch_to_lab(lch: Oklch) -> Oklab {
    let (sin, cos) = lch.h.to_radians().sin_cos();
    Oklab::new(lch.l, lch.c * cos, lch.c * sin)
}
