use approx::assert_relative_eq;
use flight_stability::{components::PropulsionRegime, FlightDynamicsPipeline};

use crate::common::{assert_mode_eq, mode_summary, twin_otter::*, twin_otter_case};

#[test]
fn test_constant_power_light_twin() {
    let case = twin_otter_case();
    assert_eq!(case.coefficients.propulsion, PropulsionRegime::ConstantPower);

    let analysis = FlightDynamicsPipeline::default()
        .analyze(&case.trim, &case.coefficients)
        .unwrap();

    assert_mode_eq(&analysis.longitudinal_modes.short_period, SHORT_PERIOD, 1e-4);
    assert_mode_eq(&analysis.longitudinal_modes.phugoid, PHUGOID, 1e-3);
    assert_mode_eq(&analysis.lateral_modes.dutch_roll, DUTCH_ROLL, 1e-4);
    assert_relative_eq!(analysis.lateral_modes.roll.eigenvalue, ROLL, max_relative = 1e-4);
    assert_relative_eq!(analysis.lateral_modes.spiral.eigenvalue, SPIRAL, max_relative = 1e-4);
}

#[test]
fn test_heavily_damped_short_period() {
    let case = twin_otter_case();
    let analysis = FlightDynamicsPipeline::default()
        .analyze(&case.trim, &case.coefficients)
        .unwrap();

    let sp = mode_summary(&analysis.longitudinal_modes.short_period);
    assert!(sp.damping_ratio > 0.35 && sp.damping_ratio < 1.3);
    assert!(analysis.longitudinal_modes.short_period.cycles_to_half < 1.0);
}
