//! Gamut test and chroma search configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::color_management::gamut::{self, DEFAULT_GAMUT_EPSILON};
use crate::error::ConfigError;
use crate::model::Oklch;

/// Default upper bound of the chroma search. sRGB peaks around 0.32 (blue).
const DEFAULT_MAX_CHROMA: f64 = 0.4;
/// Default bisection steps, a resolution of 0.4 / 2^20 ≈ 4e-7.
const DEFAULT_SEARCH_ITERATIONS: u32 = 20;

const ENV_EPSILON: &str = "CHROMAGRAM_GAMUT_EPSILON";
const ENV_MAX_CHROMA: &str = "CHROMAGRAM_MAX_CHROMA";
const ENV_SEARCH_ITERATIONS: &str = "CHROMAGRAM_SEARCH_ITERATIONS";

/// Tolerances for the sRGB gamut test and the maximum-chroma search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamutConfig {
    /// Slack on both ends of each linear channel's `[0, 1]` range.
    #[serde(default = "GamutConfig::default_epsilon")]
    pub epsilon: f64,
    /// Upper end of the chroma interval bisected by
    /// [`max_srgb_chroma`](crate::color_management::gamut::max_srgb_chroma).
    #[serde(default = "GamutConfig::default_max_chroma")]
    pub max_chroma: f64,
    #[serde(default = "GamutConfig::default_search_iterations")]
    pub search_iterations: u32,
}

impl GamutConfig {
    fn default_epsilon() -> f64 {
        DEFAULT_GAMUT_EPSILON
    }

    fn default_max_chroma() -> f64 {
        DEFAULT_MAX_CHROMA
    }

    fn default_search_iterations() -> u32 {
        DEFAULT_SEARCH_ITERATIONS
    }

    /// Parse a JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(?config, "loaded gamut config");
        Ok(config)
    }

    /// Defaults, overridden by `CHROMAGRAM_GAMUT_EPSILON`,
    /// `CHROMAGRAM_MAX_CHROMA` and `CHROMAGRAM_SEARCH_ITERATIONS`.
    ///
    /// Overrides that do not parse or fail validation are skipped with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        override_from_env(&mut config, ENV_EPSILON, |c, v: f64| c.epsilon = v);
        override_from_env(&mut config, ENV_MAX_CHROMA, |c, v: f64| c.max_chroma = v);
        override_from_env(&mut config, ENV_SEARCH_ITERATIONS, |c, v: u32| {
            c.search_iterations = v;
        });

        tracing::debug!(?config, "gamut config from environment");
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        if !self.max_chroma.is_finite() || self.max_chroma <= 0.0 {
            return Err(ConfigError::InvalidChromaBound(self.max_chroma));
        }
        if self.search_iterations == 0 {
            return Err(ConfigError::InvalidIterations);
        }
        Ok(())
    }

    /// Gamut test with this configuration's epsilon.
    pub fn contains(&self, lch: Oklch) -> bool {
        gamut::is_in_srgb_gamut(lch, self.epsilon)
    }

    /// Largest in-gamut chroma at `l` and `h` under this configuration.
    pub fn max_chroma_at(&self, l: f64, h: f64) -> f64 {
        gamut::max_srgb_chroma(l, h, self)
    }
}

impl Default for GamutConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_GAMUT_EPSILON,
            max_chroma: DEFAULT_MAX_CHROMA,
            search_iterations: DEFAULT_SEARCH_ITERATIONS,
        }
    }
}

/// Apply one environment override, keeping the current value when the
/// variable is unset, unparsable, or makes the config invalid.
fn override_from_env<T: FromStr>(
    config: &mut GamutConfig,
    name: &str,
    set: impl FnOnce(&mut GamutConfig, T),
) {
    let Ok(raw) = std::env::var(name) else {
        return;
    };
    let Ok(value) = raw.trim().parse::<T>() else {
        tracing::warn!("ignoring {name}={raw:?}: not a number");
        return;
    };

    let mut candidate = config.clone();
    set(&mut candidate, value);
    match candidate.validate() {
        Ok(()) => *config = candidate,
        Err(e) => tracing::warn!("ignoring {name}: {e}"),
    }
}
