/// Errors raised by the conversion functions.
///
/// Both kinds are caller errors. Conversions from OKLCH never fail, so they
/// return plain values instead of a `Result`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("{channel} channel {value} is outside 0..=255")]
    OutOfRange { channel: &'static str, value: i32 },
    #[error("malformed hex color {0:?}, expected #RRGGBB")]
    MalformedHex(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid gamut config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("gamut epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),
    #[error("chroma search bound must be finite and positive, got {0}")]
    InvalidChromaBound(f64),
    #[error("chroma search needs at least one iteration")]
    InvalidIterations,
}

pub type Result<T, E = ColorError> = std::result::Result<T, E>;
