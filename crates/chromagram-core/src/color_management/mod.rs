//! Color management — sRGB transfer function, OKLab matrices, OKLCH polar
//! transform, and sRGB gamut logic.

pub mod color_space;
pub mod gamut;
pub mod polar;
pub mod transfer;
