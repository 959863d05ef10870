// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, OutputConfig, PageRankConfig, WalkrankToml};
use crate::error::{RankError, Result};
use crate::rank::DistanceNorm;
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `walkrank.toml` from the current directory, falling back to
    /// defaults when it is absent.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        io::load_toml_config(&mut config, path)?;
        Ok(config)
    }

    /// Applies TOML text onto this config.
    ///
    /// # Errors
    /// Returns error on malformed TOML or mistyped fields.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content)
    }

    /// # Errors
    /// `InvalidConfiguration` if any engine or output setting is out of range.
    pub fn validate(&self) -> Result<()> {
        self.pagerank.validate()?;
        if self.output.precision == 0 {
            return Err(RankError::InvalidConfiguration(
                "precision must be at least 1".into(),
            ));
        }
        if self.output.max_nodes == Some(0) {
            return Err(RankError::InvalidConfiguration(
                "max_nodes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl PageRankConfig {
    /// Fixed-budget run: exactly `iterations` rounds.
    #[must_use]
    pub fn fixed(iterations: usize, damping_factor: f64) -> Self {
        Self {
            damping_factor,
            iterations,
            tolerance: None,
            norm: DistanceNorm::L1,
        }
    }

    #[must_use]
    pub fn with_damping(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64, norm: DistanceNorm) -> Self {
        self.tolerance = Some(tolerance);
        self.norm = norm;
        self
    }

    /// # Errors
    /// `InvalidConfiguration` for a damping factor outside `[0, 1]`, a zero
    /// iteration count, or a tolerance that is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping_factor)?;
        if self.iterations == 0 {
            return Err(RankError::InvalidConfiguration(
                "iterations must be at least 1".into(),
            ));
        }
        if let Some(tol) = self.tolerance {
            if !(tol.is_finite() && tol > 0.0) {
                return Err(RankError::InvalidConfiguration(format!(
                    "tolerance must be a positive number, got {tol}"
                )));
            }
        }
        Ok(())
    }
}

/// # Errors
/// `InvalidConfiguration` unless `0 <= damping <= 1`. NaN is rejected.
pub fn validate_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(RankError::InvalidConfiguration(format!(
            "damping factor must be within [0, 1], got {damping}"
        )))
    }
}
