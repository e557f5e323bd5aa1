use approx::assert_relative_eq;
use flight_stability::{
    components::{LATERAL_STATES, LONGITUDINAL_STATES},
    systems::{build_longitudinal, compute_derivatives, solve_eigen},
    resources::EigenSolverConfig,
    utils::GRAVITY,
    FlightDynamicsPipeline,
};
use pretty_assertions::assert_eq;

use crate::common::{
    assert_conjugate_pair, assert_eigenvectors_valid, assert_mode_eq, assert_state_space_valid,
    boeing_747::*, boeing_747_case,
};

#[test]
fn test_short_period_matches_published_values() {
    let case = boeing_747_case();
    let analysis = FlightDynamicsPipeline::default()
        .analyze(&case.trim, &case.coefficients)
        .unwrap();
    let sp = analysis.longitudinal_modes.short_period;

    // Both figures within 2% of the textbook short period
    assert_mode_eq(&sp, PUBLISHED_SHORT_PERIOD, 0.02);
    assert_mode_eq(&sp, SHORT_PERIOD, 1e-4);
    assert_relative_eq!(sp.period, SHORT_PERIOD_PERIOD, max_relative = 1e-4);
    assert_relative_eq!(sp.time_to_half, SHORT_PERIOD_TIME_TO_HALF, max_relative = 1e-4);
}

#[test]
fn test_full_analysis_against_fixtures() {
    let case = boeing_747_case();
    let analysis = FlightDynamicsPipeline::default()
        .analyze(&case.trim, &case.coefficients)
        .unwrap();

    assert_mode_eq(&analysis.longitudinal_modes.short_period, SHORT_PERIOD, 1e-4);
    assert_mode_eq(&analysis.longitudinal_modes.phugoid, PHUGOID, 1e-3);
    assert_mode_eq(&analysis.lateral_modes.dutch_roll, DUTCH_ROLL, 1e-3);
    assert_relative_eq!(analysis.lateral_modes.roll.eigenvalue, ROLL, max_relative = 1e-4);
    assert_relative_eq!(analysis.lateral_modes.spiral.eigenvalue, SPIRAL, max_relative = 1e-3);
    assert!(analysis.is_stable());
}

#[test]
fn test_eigenstructure_invariants() {
    let case = boeing_747_case();
    let analysis = FlightDynamicsPipeline::default()
        .analyze(&case.trim, &case.coefficients)
        .unwrap();

    for axis in [&analysis.longitudinal, &analysis.lateral] {
        assert_state_space_valid(&axis.model);
        assert_eigenvectors_valid(&axis.eigen);
        assert_relative_eq!(
            axis.eigen.sum_of_real_parts(),
            axis.model.trace(),
            max_relative = 1e-6
        );
    }

    let lon = analysis.longitudinal.eigen.eigenvalues();
    assert_conjugate_pair(lon[0], lon[1]);
    assert_conjugate_pair(lon[2], lon[3]);
    assert!(lon[0].im > lon[2].im);

    let lat = analysis.lateral.eigen.eigenvalues();
    assert_conjugate_pair(lat[0], lat[1]);
    assert!(lat[2].is_real() && lat[3].is_real());
    assert!(lat[2].re.abs() > lat[3].re.abs());
}

#[test]
fn test_state_ordering_labels() {
    let case = boeing_747_case();
    let analysis = FlightDynamicsPipeline::default()
        .analyze(&case.trim, &case.coefficients)
        .unwrap();
    assert_eq!(analysis.longitudinal.model.state_names(), LONGITUDINAL_STATES);
    assert_eq!(analysis.lateral.model.state_names(), LATERAL_STATES);
    assert_eq!(
        analysis.lateral.model.control_names(),
        ["delta_a", "delta_r"]
    );
}

#[test]
fn test_components_compose_like_the_pipeline() {
    let case = boeing_747_case();
    let derivatives = compute_derivatives(&case.trim, &case.coefficients).unwrap();
    let model = build_longitudinal(&derivatives.longitudinal, &case.trim, GRAVITY).unwrap();
    let eigen = solve_eigen(&model.a, &EigenSolverConfig::default()).unwrap();

    let analysis = FlightDynamicsPipeline::default()
        .analyze(&case.trim, &case.coefficients)
        .unwrap();
    assert_eq!(analysis.derivatives, derivatives);
    assert_eq!(analysis.longitudinal.model, model);

    let mut from_solver = eigen.eigenvalues().map(|l| (l.re, l.im));
    let mut from_pipeline = analysis
        .longitudinal
        .eigen
        .eigenvalues()
        .map(|l| (l.re, l.im));
    from_solver.sort_by(|a, b| a.partial_cmp(b).unwrap());
    from_pipeline.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(from_solver, from_pipeline);
}
