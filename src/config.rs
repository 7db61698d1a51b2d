// src/config.rs
//! Generator configuration: defaults, validation, and JSON loading.
//!
//! A config file may set any subset of the recognised options; missing ones
//! fall back to the defaults.
//!
//! ```json
//! { "size": 12, "weight_range": 50, "rng_seed": 1234 }
//! ```

use crate::error::MapGenError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_SIZE: i32 = 10;
pub const DEFAULT_WEIGHT_RANGE: i32 = 50;
/// Largest accepted grid, in cells (a 4096 x 4096 map).
pub const MAX_GRID_AREA: usize = 1 << 24;

/// Options accepted by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Grid side length.
    pub size: i32,
    /// Exclusive upper bound of the random per-cell weight.
    #[serde(alias = "weightRange")]
    pub weight_range: i32,
    /// Fixed RNG seed for reproducible maps. `None` seeds from the OS.
    #[serde(alias = "rngSeed")]
    pub rng_seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            size: DEFAULT_SIZE,
            weight_range: DEFAULT_WEIGHT_RANGE,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] MapGenError),
}

impl GeneratorConfig {
    pub fn new(size: i32, weight_range: i32, rng_seed: Option<u64>) -> Self {
        GeneratorConfig {
            size,
            weight_range,
            rng_seed,
        }
    }

    /// Checks that the grid size and weight range are both at least 1 and
    /// that the grid holds no more than [`MAX_GRID_AREA`] cells.
    pub fn validate(&self) -> Result<(), MapGenError> {
        if self.size < 1 {
            return Err(MapGenError::invalid(format!(
                "size must be at least 1, got {}",
                self.size
            )));
        }
        let area = usize::try_from(self.size)
            .ok()
            .and_then(|size| size.checked_mul(size));
        match area {
            Some(area) if area <= MAX_GRID_AREA => {}
            _ => {
                return Err(MapGenError::invalid(format!(
                    "size {} exceeds the maximum grid area of {} cells",
                    self.size, MAX_GRID_AREA
                )))
            }
        }
        if self.weight_range < 1 {
            return Err(MapGenError::invalid(format!(
                "weight_range must be at least 1, got {}",
                self.weight_range
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
