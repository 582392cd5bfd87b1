//! sRGB transfer function (gamma decode/encode) and 8-bit channel quantization.
//!
//! Transfer functions convert between non-linear (encoded) and linear light
//! values. The 8-bit helpers add the normalization to and from `0..=255`.

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f64) -> f64;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f64) -> f64;
}

// ---------------------------------------------------------------------------
// sRGB (IEC 61966-2-1)
// ---------------------------------------------------------------------------

/// sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// to_linear:   V <= 0.04045 → V / 12.92
///              V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// from_linear: L <= 0.0031308 → L × 12.92
///              L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
///
/// Neither direction clamps. Encoding a negative linear value takes the
/// linear segment and stays negative.
#[derive(Debug, Clone, Copy)]
pub struct SrgbTransfer;

impl SrgbTransfer {
    const DECODE_CUT: f64 = 0.04045;
    const ENCODE_CUT: f64 = 0.0031308;
    const SLOPE: f64 = 12.92;
    const OFFSET: f64 = 0.055;
    const SCALE: f64 = 1.055;
    const GAMMA: f64 = 2.4;
}

impl TransferFunction for SrgbTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        if encoded <= Self::DECODE_CUT {
            encoded / Self::SLOPE
        } else {
            ((encoded + Self::OFFSET) / Self::SCALE).powf(Self::GAMMA)
        }
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        if linear <= Self::ENCODE_CUT {
            linear * Self::SLOPE
        } else {
            Self::SCALE * linear.powf(Self::GAMMA.recip()) - Self::OFFSET
        }
    }
}

/// Decode an 8-bit sRGB channel into linear light.
#[inline]
pub fn decode(channel: u8) -> f64 {
    SrgbTransfer.to_linear(f64::from(channel) / 255.0)
}

/// Encode linear light into an 8-bit sRGB channel.
///
/// Out-of-range and non-finite input saturates: anything below black
/// becomes 0, anything above white becomes 255, NaN becomes 0.
#[inline]
pub fn encode(linear: f64) -> u8 {
    let encoded = SrgbTransfer.to_encoded(linear);
    // `as` saturates and maps NaN to 0.
    (encoded * 255.0).round().clamp(0.0, 255.0) as u8
}
