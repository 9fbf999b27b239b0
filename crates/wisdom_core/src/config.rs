//! Spin configuration, loaded once at startup from TOML.
//!
//! ```toml
//! duration_ms = 3000
//! min_spins = 4.0
//! max_spins = 7.0
//! easing_power = 6
//! seed = 42
//! ```
//!
//! Every field is optional; missing fields take the defaults below.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::{Easing, DEFAULT_POWER};
use crate::error::{WheelError, WheelResult};

/// Default spin animation length.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Default lower bound on full turns per spin (inclusive).
pub const DEFAULT_MIN_SPINS: f64 = 4.0;

/// Default upper bound on full turns per spin (exclusive).
pub const DEFAULT_MAX_SPINS: f64 = 7.0;

/// Tunable spin parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinConfig {
    /// Animation length in milliseconds.
    pub duration_ms: u64,
    /// Minimum full turns per spin (inclusive).
    pub min_spins: f64,
    /// Maximum full turns per spin (exclusive).
    pub max_spins: f64,
    /// Exponent of the ease-out curve.
    pub easing_power: u32,
    /// Seed for reproducible spins. Entropy-seeded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            min_spins: DEFAULT_MIN_SPINS,
            max_spins: DEFAULT_MAX_SPINS,
            easing_power: DEFAULT_POWER,
            seed: None,
        }
    }
}

impl SpinConfig {
    /// Parses and validates a config TOML document.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or values rejected by [`SpinConfig::validate`].
    pub fn from_toml_str(source: &str) -> WheelResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, does not parse, or is invalid.
    pub fn load(path: impl AsRef<Path>) -> WheelResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| WheelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Serializes the config back to TOML.
    ///
    /// # Errors
    ///
    /// Only fails if a float is not representable in TOML.
    pub fn to_toml_string(&self) -> WheelResult<String> {
        toml::to_string(self).map_err(|e| WheelError::InvalidConfig(e.to_string()))
    }

    /// Checks the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> WheelResult<()> {
        if self.duration_ms == 0 {
            return Err(WheelError::InvalidConfig("duration_ms must be > 0".into()));
        }
        if !self.min_spins.is_finite() || !self.max_spins.is_finite() {
            return Err(WheelError::InvalidConfig("spin bounds must be finite".into()));
        }
        if self.min_spins < 0.0 {
            return Err(WheelError::InvalidConfig("min_spins must be >= 0".into()));
        }
        if self.min_spins >= self.max_spins {
            return Err(WheelError::InvalidConfig(format!(
                "min_spins ({}) must be < max_spins ({})",
                self.min_spins, self.max_spins
            )));
        }
        if self.easing_power == 0 {
            return Err(WheelError::InvalidConfig("easing_power must be > 0".into()));
        }
        Ok(())
    }

    /// Animation length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Ease-out curve for the configured exponent. A power of one is linear.
    #[must_use]
    pub fn easing(&self) -> Easing {
        match self.easing_power {
            1 => Easing::Linear,
            power => Easing::PowerOut(power),
        }
    }
}
