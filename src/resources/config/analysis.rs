use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::utils::{
    ConfigError, DEFAULT_CONVERGENCE_TOLERANCE, DEFAULT_MAX_SCHUR_ITERATIONS,
    DEFAULT_PAIRING_TOLERANCE, GRAVITY,
};

/// Settings for the stability pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Gravitational acceleration used in the θ columns (m/s²).
    pub gravity: f64,
    pub eigen: EigenSolverConfig,
}

/// Configuration for the eigen solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenSolverConfig {
    /// Maximum number of Schur (and SVD) iterations before reporting non-convergence
    pub max_iterations: usize,
    /// Convergence tolerance of the iterative decompositions
    pub convergence_tolerance: f64,
    /// Imaginary parts below this (relative to |λ|) are treated as real roots,
    /// and conjugate partners must agree to within it.
    pub pairing_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            eigen: EigenSolverConfig::default(),
        }
    }
}

impl Default for EigenSolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_SCHUR_ITERATIONS,
            convergence_tolerance: DEFAULT_CONVERGENCE_TOLERANCE,
            pairing_tolerance: DEFAULT_PAIRING_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: AnalysisConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading analysis config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        self.eigen.validate()
    }
}

impl EigenSolverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // nalgebra treats zero as "iterate until converged"
        if self.max_iterations == 0 {
            return Err(ConfigError::ValidationError(
                "eigen.max_iterations must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("eigen.convergence_tolerance", self.convergence_tolerance),
            ("eigen.pairing_tolerance", self.pairing_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
