use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::Eigenvalue;

/// Classical dynamic modes of a conventional aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    ShortPeriod,
    Phugoid,
    DutchRoll,
    Roll,
    Spiral,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::ShortPeriod => "short period",
            Mode::Phugoid => "phugoid",
            Mode::DutchRoll => "dutch roll",
            Mode::Roll => "roll",
            Mode::Spiral => "spiral",
        };
        write!(f, "{}", name)
    }
}

/// Handling-qualities parameters of an oscillatory mode σ ± jω.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeParameters {
    /// The eigenvalue with positive imaginary part.
    pub eigenvalue: Eigenvalue,
    /// ζ = -σ / ωn
    pub damping_ratio: f64,
    /// ωn = |λ| (rad/s)
    pub natural_frequency: f64,
    /// T = 2π / ω (s)
    pub period: f64,
    /// t½ = ln 2 / |σ| (s); infinite for neutral stability. Time to double when σ > 0.
    pub time_to_half: f64,
    /// N½ = t½ / T
    pub cycles_to_half: f64,
}

impl ModeParameters {
    pub fn is_stable(&self) -> bool {
        self.eigenvalue.is_stable()
    }
}

/// A non-oscillatory (real-root) mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AperiodicMode {
    pub eigenvalue: f64,
    /// τ = 1 / |λ| (s); infinite for a zero root.
    pub time_constant: f64,
    /// ln 2 / |λ| (s): time to half amplitude when convergent, to double when divergent.
    pub time_to_half_or_double: f64,
}

impl AperiodicMode {
    pub fn from_eigenvalue(eigenvalue: f64) -> Self {
        let rate = eigenvalue.abs();
        let (time_constant, time_to_half_or_double) = if rate == 0.0 {
            (f64::INFINITY, f64::INFINITY)
        } else {
            (1.0 / rate, std::f64::consts::LN_2 / rate)
        };
        Self {
            eigenvalue,
            time_constant,
            time_to_half_or_double,
        }
    }

    pub fn is_stable(&self) -> bool {
        self.eigenvalue < 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalModes {
    pub short_period: ModeParameters,
    pub phugoid: ModeParameters,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralModes {
    pub dutch_roll: ModeParameters,
    pub roll: AperiodicMode,
    pub spiral: AperiodicMode,
}
