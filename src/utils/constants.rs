pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_SEA_LEVEL_SPEED_OF_SOUND: f64 = 340.294; // m/s

// Eigen solver defaults
pub const DEFAULT_MAX_SCHUR_ITERATIONS: usize = 1000;
pub const DEFAULT_CONVERGENCE_TOLERANCE: f64 = f64::EPSILON;
pub const DEFAULT_PAIRING_TOLERANCE: f64 = 1e-8; // relative to |lambda|

/// Relative mismatch allowed between a supplied q0 and 1/2 rho0 u0^2.
pub const DYNAMIC_PRESSURE_TOLERANCE: f64 = 1e-3;
