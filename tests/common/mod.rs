mod assertions;
mod fixtures;

// Re-export
pub use assertions::{
    assert_conjugate_pair, assert_eigenvectors_valid, assert_mode_eq, assert_state_space_valid,
};

pub use fixtures::*;
