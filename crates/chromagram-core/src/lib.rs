//! Chromagram Core — color conversion engine for perceptual color histograms.
//!
//! Converts between 8-bit sRGB and OKLCH using Björn Ottosson's OKLab model,
//! tests OKLCH colors against the sRGB gamut, and clamps them into it. No I/O,
//! image decoding, or rendering; every function is pure.
//!
//! ```
//! use chromagram_core::{oklch_to_rgb, rgb_to_oklch};
//!
//! let red = rgb_to_oklch(255, 0, 0)?;
//! assert!((red.h - 29.23).abs() < 0.01);
//! assert_eq!(oklch_to_rgb(red.l, red.c, red.h).to_hex(), "#FF0000");
//! # Ok::<(), chromagram_core::ColorError>(())
//! ```

pub mod color_management;
pub mod config;
pub mod convert;
pub mod error;
pub mod hex;
pub mod model;
pub mod sample;

// Re-exports for convenience.
pub use color_management::gamut::{DEFAULT_GAMUT_EPSILON, max_srgb_chroma};
pub use config::GamutConfig;
pub use convert::{hex_to_rgb, is_in_srgb_gamut, oklch_to_rgb, rgb_to_hex, rgb_to_oklch};
pub use error::{ColorError, ConfigError};
pub use model::{LinearRgb, Oklab, Oklch, Rgb8};
pub use sample::{ColorCount, OklchFilter, OklchPoint};
