//! Runtime configuration: grid zone, round-trip tolerance, worker threads.
//!
//! Loaded from JSON, then optionally overridden from the environment.

use std::env;

use serde::{Deserialize, Serialize};

use crate::coord::Zone;
use crate::error::ConfigError;
use crate::grid::validator::DEFAULT_TOLERANCE_M;
use crate::grid::{NationalGrid, RoundTripValidator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed national grid zone. Deserialization rejects numbers outside 1..=60.
    pub zone: Zone,
    /// Round-trip tolerance in metres.
    pub tolerance_m: f64,
    /// Worker threads for batch runs; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zone: NationalGrid::etrs_tm35fin().zone(),
            tolerance_m: DEFAULT_TOLERANCE_M,
            threads: None,
        }
    }
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `TMGRID_ZONE`, `TMGRID_TOLERANCE_M` and `TMGRID_THREADS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup` (an environment-like key/value source).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TMGRID_ZONE") {
            let zone: u8 = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("TMGRID_ZONE: {v:?}")))?;
            self.zone = Zone::new(zone)?;
        }
        if let Some(v) = lookup("TMGRID_TOLERANCE_M") {
            self.tolerance_m = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("TMGRID_TOLERANCE_M: {v:?}")))?;
        }
        if let Some(v) = lookup("TMGRID_THREADS") {
            let threads = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("TMGRID_THREADS: {v:?}")))?;
            self.threads = Some(threads);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance_m.is_finite() || self.tolerance_m <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tolerance_m must be a positive number, got {}",
                self.tolerance_m
            )));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::Invalid("threads must be at least 1".into()));
        }
        Ok(())
    }

    pub fn national_grid(&self) -> NationalGrid {
        NationalGrid::new(self.zone)
    }

    pub fn validator(&self) -> RoundTripValidator {
        RoundTripValidator::new(self.tolerance_m)
    }
}
