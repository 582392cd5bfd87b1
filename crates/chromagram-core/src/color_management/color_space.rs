//! 3x3 matrix transforms between linear sRGB and OKLab.
//!
//! # Reference
//! Björn Ottosson, "A perceptual color space for image processing" (2020),
//! <https://bottosson.github.io/posts/oklab/>. The four matrices below are the
//! published constants, copied digit for digit.

use crate::model::{LinearRgb, Oklab};

/// A 3x3 color matrix for linear color space conversions, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

impl ColorMatrix {
    /// Returns the identity matrix (no-op transform).
    pub const fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Apply this matrix to a column vector.
    #[inline]
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        let [row1, row2, row3] = &self.0;
        [
            row1[0] * v[0] + row1[1] * v[1] + row1[2] * v[2],
            row2[0] * v[0] + row2[1] * v[1] + row2[2] * v[2],
            row3[0] * v[0] + row3[1] * v[1] + row3[2] * v[2],
        ]
    }

    /// Matrix product `self × rhs`.
    pub fn compose(&self, rhs: &Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.0[i][0] * rhs.0[0][j]
                    + self.0[i][1] * rhs.0[1][j]
                    + self.0[i][2] * rhs.0[2][j];
            }
        }
        Self(out)
    }
}

/// Linear sRGB → LMS cone response.
#[rustfmt::skip]
pub const LINEAR_SRGB_TO_LMS: ColorMatrix = ColorMatrix([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Cube-rooted LMS → OKLab.
#[rustfmt::skip]
pub const LMS_TO_OKLAB: ColorMatrix = ColorMatrix([
    [0.2104542553,  0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050,  0.4505937099],
    [0.0259040371,  0.7827717662, -0.8086757660],
]);

/// OKLab → cube-rooted LMS.
#[rustfmt::skip]
pub const OKLAB_TO_LMS: ColorMatrix = ColorMatrix([
    [1.0,  0.3963377774,  0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

/// LMS → linear sRGB.
#[rustfmt::skip]
pub const LMS_TO_LINEAR_SRGB: ColorMatrix = ColorMatrix([
    [ 4.0767416621, -3.3077115913,  0.2309699292],
    [-1.2684380046,  2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147,  1.7076147010],
]);

/// Convert linear sRGB to OKLab. No clamping.
///
/// LMS goes negative only for out-of-gamut or perturbed input; the cube root
/// keeps the sign there instead of producing NaN.
pub fn linear_srgb_to_oklab(rgb: LinearRgb) -> Oklab {
    let [l, m, s] = LINEAR_SRGB_TO_LMS.apply(rgb.to_array());
    let [lightness, a, b] = LMS_TO_OKLAB.apply([l.cbrt(), m.cbrt(), s.cbrt()]);
    Oklab::new(lightness, a, b)
}

/// Convert OKLab to linear sRGB. No clamping: out-of-gamut colors produce
/// channels outside `[0, 1]`.
pub fn oklab_to_linear_srgb(lab: Oklab) -> LinearRgb {
    let [l, m, s] = OKLAB_TO_LMS.apply([lab.l, lab.a, lab.b]);
    // x³ keeps the sign of x.
    let [r, g, b] = LMS_TO_LINEAR_SRGB.apply([l * l * l, m * m * m, s * s * s]);
    LinearRgb::new(r, g, b)
}
