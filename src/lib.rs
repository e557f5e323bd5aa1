pub mod components;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{
    AerodynamicCoefficientSet, DimensionalDerivativeSet, EigenResult, Eigenvalue, FlightCase,
    ModeParameters, PropulsionRegime, StabilityAnalysis, StateSpaceModel, TrimCondition,
};
pub use resources::AnalysisConfig;
pub use systems::FlightDynamicsPipeline;
pub use utils::{ConfigError, DomainError, NumericalError, StabilityError};
