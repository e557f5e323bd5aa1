use serde::{Deserialize, Serialize};

use crate::components::{
    AerodynamicCoefficientSet, DimensionalDerivativeSet, EigenResult, LateralModes,
    LongitudinalModes, StateSpaceModel, TrimCondition,
};

/// State-space model of one axis with its mode-ordered eigenstructure.
///
/// Longitudinal eigen order: [short period ±, phugoid ±].
/// Lateral-directional eigen order: [dutch roll ±, roll, spiral].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisAnalysis {
    pub model: StateSpaceModel,
    pub eigen: EigenResult,
}

/// Complete linear stability analysis of one flight condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityAnalysis {
    pub derivatives: DimensionalDerivativeSet,
    pub longitudinal: AxisAnalysis,
    pub lateral: AxisAnalysis,
    pub longitudinal_modes: LongitudinalModes,
    pub lateral_modes: LateralModes,
}

impl StabilityAnalysis {
    /// True when every mode decays.
    pub fn is_stable(&self) -> bool {
        self.longitudinal_modes.short_period.is_stable()
            && self.longitudinal_modes.phugoid.is_stable()
            && self.lateral_modes.dutch_roll.is_stable()
            && self.lateral_modes.roll.is_stable()
            && self.lateral_modes.spiral.is_stable()
    }
}

/// A named flight condition for batch analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightCase {
    pub name: String,
    pub trim: TrimCondition,
    pub coefficients: AerodynamicCoefficientSet,
}

impl FlightCase {
    pub fn new(
        name: impl Into<String>,
        trim: TrimCondition,
        coefficients: AerodynamicCoefficientSet,
    ) -> Self {
        Self {
            name: name.into(),
            trim,
            coefficients,
        }
    }
}
