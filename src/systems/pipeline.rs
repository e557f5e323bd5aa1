use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::components::{
    AerodynamicCoefficientSet, AxisAnalysis, FlightCase, StabilityAnalysis, TrimCondition,
};
use crate::resources::AnalysisConfig;
use crate::systems::{
    build_lateral, build_longitudinal, classify_lateral, classify_longitudinal,
    compute_derivatives, solve_eigen,
};
use crate::utils::{rad_to_deg, ConfigError, StabilityError};

/// Runs derivatives -> state matrices -> eigenstructure -> modes for both axes.
///
/// Holds only configuration, so one pipeline can analyze any number of
/// flight conditions, including concurrently.
#[derive(Debug, Clone, Default)]
pub struct FlightDynamicsPipeline {
    config: AnalysisConfig,
}

impl FlightDynamicsPipeline {
    /// Builds a pipeline from a validated configuration.
    ///
    /// # Errors
    /// `ConfigError::ValidationError` when the gravity or eigen-solver settings
    /// are out of range, e.g. a zero iteration bound.
    pub fn new(config: AnalysisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(
        &self,
        trim: &TrimCondition,
        coeffs: &AerodynamicCoefficientSet,
    ) -> Result<StabilityAnalysis, StabilityError> {
        debug!(
            "Analyzing trim: u0={:.2} m/s, M={:.3}, gamma={:.2}°, regime={}",
            trim.airspeed,
            trim.mach,
            rad_to_deg(trim.flight_path_angle),
            coeffs.propulsion
        );

        let derivatives = compute_derivatives(trim, coeffs)?;
        let gravity = self.config.gravity;

        let lon_model = build_longitudinal(&derivatives.longitudinal, trim, gravity)?;
        let lat_model = build_lateral(&derivatives.lateral, trim, gravity)?;

        let lon_eigen = solve_eigen(&lon_model.a, &self.config.eigen)?;
        let lat_eigen = solve_eigen(&lat_model.a, &self.config.eigen)?;

        let (lon_eigen, longitudinal_modes) = classify_longitudinal(&lon_eigen)?;
        let (lat_eigen, lateral_modes) = classify_lateral(&lat_eigen)?;

        info!(
            "Stability analysis complete:\n\
            Short period: wn={:.4} rad/s, zeta={:.4}, T={:.3} s\n\
            Phugoid: wn={:.4} rad/s, zeta={:.4}, T={:.2} s\n\
            Dutch roll: wn={:.4} rad/s, zeta={:.4}\n\
            Roll: lambda={:.4}, Spiral: lambda={:.5}",
            longitudinal_modes.short_period.natural_frequency,
            longitudinal_modes.short_period.damping_ratio,
            longitudinal_modes.short_period.period,
            longitudinal_modes.phugoid.natural_frequency,
            longitudinal_modes.phugoid.damping_ratio,
            longitudinal_modes.phugoid.period,
            lateral_modes.dutch_roll.natural_frequency,
            lateral_modes.dutch_roll.damping_ratio,
            lateral_modes.roll.eigenvalue,
            lateral_modes.spiral.eigenvalue,
        );

        Ok(StabilityAnalysis {
            derivatives,
            longitudinal: AxisAnalysis {
                model: lon_model,
                eigen: lon_eigen,
            },
            lateral: AxisAnalysis {
                model: lat_model,
                eigen: lat_eigen,
            },
            longitudinal_modes,
            lateral_modes,
        })
    }

    /// Analyzes independent flight cases in parallel, preserving input order.
    ///
    /// A failing case is logged and reported in place; it does not abort the batch.
    pub fn analyze_batch(
        &self,
        cases: &[FlightCase],
    ) -> Vec<(String, Result<StabilityAnalysis, StabilityError>)> {
        info!("Running batch stability analysis for {} cases", cases.len());

        cases
            .par_iter()
            .map(|case| {
                let result = self.analyze(&case.trim, &case.coefficients);
                if let Err(e) = &result {
                    error!("Flight case '{}' failed: {}", case.name, e);
                }
                (case.name.clone(), result)
            })
            .collect()
    }
}
