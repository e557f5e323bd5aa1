use approx::assert_relative_eq;
use flight_stability::{
    components::{AerodynamicCoefficientSet, PropulsionRegime, TrimCondition},
    systems::compute_derivatives,
    FlightDynamicsPipeline,
};
use pretty_assertions::assert_eq;

use crate::common::{assert_mode_eq, boeing_747, boeing_747_case, boeing_747_regime_sweep};

fn with_speed_dependent_thrust() -> (TrimCondition, AerodynamicCoefficientSet) {
    let case = boeing_747_case();
    let mut coeffs = case.coefficients;
    coeffs.thrust.k_v = 5.0e3;
    (case.trim, coeffs)
}

#[test]
fn test_regime_only_changes_thrust_terms() {
    let (trim, coeffs) = with_speed_dependent_thrust();
    let baseline = compute_derivatives(&trim, &coeffs).unwrap();

    for regime in PropulsionRegime::ALL {
        let derivs = compute_derivatives(&trim, &coeffs.with_propulsion(regime)).unwrap();
        assert_eq!(derivs.propulsion, regime);
        assert_eq!(derivs.lateral, baseline.lateral);

        let mut lon = derivs.longitudinal;
        lon.x_u = baseline.longitudinal.x_u;
        lon.x_delta_t = baseline.longitudinal.x_delta_t;
        assert_eq!(lon, baseline.longitudinal, "regime {}", regime);
    }
}

#[test]
fn test_thrust_derivative_differs_per_regime() {
    let (trim, coeffs) = with_speed_dependent_thrust();
    let values: Vec<f64> = PropulsionRegime::ALL
        .iter()
        .map(|&regime| {
            compute_derivatives(&trim, &coeffs.with_propulsion(regime))
                .unwrap()
                .longitudinal
                .x_delta_t
        })
        .collect();

    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            assert!(values[i] != values[j], "regimes {} and {} coincide", i, j);
        }
    }
    // Ramjet thrust does not fall with speed, so its control power has the largest magnitude
    assert!(values.iter().all(|&v| v >= values[3]));
}

#[test]
fn test_only_constant_power_changes_speed_damping() {
    let (trim, coeffs) = with_speed_dependent_thrust();
    let x_u = |regime| {
        compute_derivatives(&trim, &coeffs.with_propulsion(regime))
            .unwrap()
            .longitudinal
            .x_u
    };

    let thrust = x_u(PropulsionRegime::ConstantThrust);
    assert_eq!(x_u(PropulsionRegime::ConstantMassFlow), thrust);
    assert_eq!(x_u(PropulsionRegime::Ramjet), thrust);
    let power = x_u(PropulsionRegime::ConstantPower);
    assert_relative_eq!(power, -0.0096568607, max_relative = 1e-6);
    // Level flight: constant power adds one more CD0 of speed damping
    let qs_mu = trim.dynamic_pressure * trim.geometry.wing_area
        / (trim.mass.mass * trim.airspeed);
    assert_relative_eq!(power - thrust, -qs_mu * coeffs.drag.c_d_0, max_relative = 1e-9);
}

#[test]
fn test_constant_power_phugoid() {
    let case = boeing_747_case();
    let analysis = FlightDynamicsPipeline::default()
        .analyze(
            &case.trim,
            &case.coefficients.with_propulsion(PropulsionRegime::ConstantPower),
        )
        .unwrap();

    assert_mode_eq(
        &analysis.longitudinal_modes.phugoid,
        boeing_747::PHUGOID_CONSTANT_POWER,
        1e-3,
    );
    // Speed damping barely touches the short period
    assert_mode_eq(
        &analysis.longitudinal_modes.short_period,
        boeing_747::SHORT_PERIOD,
        1e-2,
    );
}

#[test]
fn test_every_regime_yields_identical_lateral_modes() {
    let pipeline = FlightDynamicsPipeline::default();
    let analyses: Vec<_> = boeing_747_regime_sweep()
        .iter()
        .map(|case| pipeline.analyze(&case.trim, &case.coefficients).unwrap())
        .collect();

    for analysis in &analyses[1..] {
        assert_eq!(analysis.lateral, analyses[0].lateral);
        assert_eq!(analysis.lateral_modes, analyses[0].lateral_modes);
    }
}
