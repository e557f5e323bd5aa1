use nalgebra::DMatrix;
use std::fmt;
use std::io;
use thiserror::Error;

/// Which set of linearized equations a result or failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    Longitudinal,
    LateralDirectional,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Longitudinal => write!(f, "longitudinal"),
            Axis::LateralDirectional => write!(f, "lateral-directional"),
        }
    }
}

/// Invalid or missing physical inputs. Never defaulted away.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid trim condition: {field} = {value} ({reason})")]
    InvalidTrimCondition {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Dynamic pressure {supplied} Pa is inconsistent with 1/2 rho u^2 = {expected} Pa")]
    InconsistentDynamicPressure { supplied: f64, expected: f64 },

    #[error("Missing derivative: {name}")]
    MissingDerivative { name: &'static str },

    #[error("Derivative {name} is not finite: {value}")]
    NonFiniteDerivative { name: &'static str, value: f64 },

    #[error("Mode characterization requires a complex eigenvalue, got real root {real}")]
    RealEigenvalue { real: f64 },

    #[error("Unexpected {axis} mode structure: {detail}")]
    UnexpectedModeStructure { axis: Axis, detail: String },
}

/// Eigen-decomposition failures, carrying the offending matrix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericalError {
    #[error("Schur decomposition did not converge within {iterations} iterations for matrix {matrix}")]
    NoConvergence {
        iterations: usize,
        matrix: DMatrix<f64>,
    },

    #[error("Matrix contains non-finite entries: {matrix}")]
    NonFiniteMatrix { matrix: DMatrix<f64> },

    #[error("Complex eigenvalue {re} + {im}j has no conjugate partner")]
    UnpairedComplexEigenvalue { re: f64, im: f64 },

    #[error("Could not extract an eigenvector for eigenvalue {re} + {im}j")]
    EigenvectorFailed { re: f64, im: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StabilityError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Numerical error: {0}")]
    Numerical(#[from] NumericalError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid analysis configuration: {0}")]
    ValidationError(String),
}
