pub mod derivatives;
pub mod eigen;
pub mod modes;
pub mod pipeline;
pub mod state_matrix;

pub use derivatives::{
    compute_derivatives, lateral_derivatives, longitudinal_derivatives, ConstantMassFlow,
    ConstantPower, ConstantThrust, Ramjet, ThrustModel,
};
pub use eigen::solve_eigen;
pub use modes::{characterize, classify_lateral, classify_longitudinal};
pub use pipeline::FlightDynamicsPipeline;
pub use state_matrix::{build_lateral, build_longitudinal, PrimedLateralDerivatives};
