//! sRGB gamut test, gamut-safe clamping, and the maximum in-gamut chroma search.
//!
//! The gamut test works on unclamped linear sRGB: a color is inside when all
//! three channels lie in `[-ε, 1 + ε]`. The same ε applies to every channel
//! without per-channel scaling.

use crate::config::GamutConfig;
use crate::model::{LinearRgb, Oklch, Rgb8};

/// Default tolerance of the gamut test, absorbing floating-point round-trip error.
pub const DEFAULT_GAMUT_EPSILON: f64 = 1e-6;

pub(crate) fn channels_within(rgb: LinearRgb, epsilon: f64) -> bool {
    let lo = -epsilon;
    let hi = 1.0 + epsilon;
    rgb.to_array().iter().all(|&c| lo <= c && c <= hi)
}

/// Whether `lch` maps to a color inside the sRGB cube.
///
/// Never clamps. NaN input is reported as out of gamut.
pub fn is_in_srgb_gamut(lch: Oklch, epsilon: f64) -> bool {
    channels_within(lch.to_linear_srgb(), epsilon)
}

/// Convert to 8-bit sRGB, clamping each channel into `0..=255`.
///
/// Total over all inputs: out-of-gamut colors land on the nearest face of the
/// sRGB cube per channel, which can shift their hue.
pub fn clamp_to_rgb8(lch: Oklch) -> Rgb8 {
    let linear = lch.to_linear_srgb();
    if !channels_within(linear, DEFAULT_GAMUT_EPSILON) {
        tracing::trace!(
            l = lch.l,
            c = lch.c,
            h = lch.h,
            "clamping out-of-gamut color to sRGB"
        );
    }
    linear.to_rgb8()
}

/// Largest chroma at lightness `l` and hue `h` that stays inside sRGB.
///
/// Bisects `[0, config.max_chroma]` for `config.search_iterations` steps using
/// the configured epsilon, so the result undershoots the true boundary by at
/// most `max_chroma / 2^iterations`. Returns 0 when even the achromatic color
/// at `l` is outside gamut, i.e. when `l` lies outside `[0, 1]`.
pub fn max_srgb_chroma(l: f64, h: f64, config: &GamutConfig) -> f64 {
    let inside = |c: f64| is_in_srgb_gamut(Oklch::new(l, c, h), config.epsilon);

    if !inside(0.0) {
        return 0.0;
    }
    if inside(config.max_chroma) {
        return config.max_chroma;
    }

    let (mut lo, mut hi) = (0.0, config.max_chroma);
    for _ in 0..config.search_iterations {
        let mid = 0.5 * (lo + hi);
        if inside(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    tracing::trace!(l, h, chroma = lo, "max in-gamut chroma");
    lo
}
