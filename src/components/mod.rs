pub mod aero_coef;
pub mod analysis;
pub mod derivatives;
pub mod eigen;
pub mod geometry;
pub mod mass;
pub mod modes;
pub mod propulsion;
pub mod state_space;
pub mod trim;

pub use aero_coef::{
    AerodynamicCoefficientSet, DragCoefficients, LiftCoefficients, PitchCoefficients,
    RollCoefficients, SideForceCoefficients, ThrustCoefficients, YawCoefficients,
};
pub use analysis::{AxisAnalysis, FlightCase, StabilityAnalysis};
pub use derivatives::{DimensionalDerivativeSet, LateralDerivatives, LongitudinalDerivatives};
pub use eigen::{EigenPair, EigenResult, Eigenvalue};
pub use geometry::AircraftGeometry;
pub use mass::MassModel;
pub use modes::{AperiodicMode, LateralModes, LongitudinalModes, Mode, ModeParameters};
pub use propulsion::PropulsionRegime;
pub use state_space::{
    StateSpaceModel, LATERAL_CONTROLS, LATERAL_STATES, LONGITUDINAL_CONTROLS,
    LONGITUDINAL_STATES,
};
pub use trim::TrimCondition;
