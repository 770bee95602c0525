//! Tracker configuration.
//!
//! Optional TOML file with the check delays and the odds used by the
//! random progress source. Missing sections fall back to the defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub timings: Timings,
    pub odds: Odds,
}

/// Delays between the phases of one check cycle, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Submit until results are fabricated
    pub check_delay_ms: u64,
    /// Results fabricated until the panel is shown
    pub reveal_delay_ms: u64,
    /// Reset pressed until the form is cleared
    pub reset_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            check_delay_ms: 1500,
            reveal_delay_ms: 300,
            reset_delay_ms: 300,
        }
    }
}

impl Timings {
    /// Every delay set to zero. Used for headless runs.
    pub fn instant() -> Self {
        Self {
            check_delay_ms: 0,
            reveal_delay_ms: 0,
            reset_delay_ms: 0,
        }
    }

    pub fn check_delay(&self) -> Duration {
        Duration::from_millis(self.check_delay_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

/// Probability that the random source marks a milestone completed.
/// Install and registration are always completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Odds {
    pub deposit: f64,
    pub trading: f64,
}

impl Default for Odds {
    fn default() -> Self {
        Self {
            deposit: 0.7,
            trading: 0.4,
        }
    }
}

impl TrackerConfig {
    /// Load config from a specific path.
    /// Returns the default config if the file doesn't exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| TrackerError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject odds outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<()> {
        check_probability("deposit", self.odds.deposit)?;
        check_probability("trading", self.odds.trading)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TrackerError::InvalidProbability { name, value })
    }
}
