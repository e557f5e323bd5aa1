use approx::assert_relative_eq;
use flight_stability::components::{EigenResult, Eigenvalue, ModeParameters, StateSpaceModel};

use super::ModeFixture;

/// Assert that a state-space model is complete and finite
#[track_caller]
pub fn assert_state_space_valid(model: &StateSpaceModel) {
    assert!(model.is_finite(), "State-space model contains non-finite values");
    // Last row is the kinematic θ̇ = q or φ̇ = p + r tanθ equation
    assert_eq!(model.a[(3, 0)], 0.0);
    assert_eq!(model.a[(3, 3)], 0.0);
}

#[track_caller]
pub fn assert_conjugate_pair(upper: Eigenvalue, lower: Eigenvalue) {
    assert!(upper.im > 0.0, "Expected positive frequency first, got {:?}", upper);
    assert_eq!(upper.conj(), lower, "Roots are not an exact conjugate pair");
}

/// Assert every eigenvector is finite and normalized to a unit pivot
#[track_caller]
pub fn assert_eigenvectors_valid(eigen: &EigenResult) {
    for pair in &eigen.pairs {
        assert!(
            pair.vector.iter().all(|x| x.is_finite()),
            "Eigenvector for {:?} contains non-finite values",
            pair.value
        );
        assert_relative_eq!(pair.vector.amax(), 1.0, epsilon = 1e-9);
    }
}

#[track_caller]
pub fn assert_mode_eq(mode: &ModeParameters, expected: ModeFixture, max_relative: f64) {
    assert_relative_eq!(
        mode.natural_frequency,
        expected.natural_frequency,
        max_relative = max_relative
    );
    assert_relative_eq!(
        mode.damping_ratio,
        expected.damping_ratio,
        max_relative = max_relative
    );
}
