use nalgebra::{Matrix4, Matrix4x2};
use serde::{Deserialize, Serialize};

use crate::utils::Axis;

pub const LONGITUDINAL_STATES: [&str; 4] = ["u", "w", "q", "theta"];
pub const LONGITUDINAL_CONTROLS: [&str; 2] = ["delta_t", "delta_e"];
pub const LATERAL_STATES: [&str; 4] = ["beta", "p", "r", "phi"];
pub const LATERAL_CONTROLS: [&str; 2] = ["delta_a", "delta_r"];

/// Linear model ẋ = A x + B u for one axis.
///
/// Longitudinal state order is [u, w, q, θ] with controls [δt, δe];
/// lateral-directional state order is [β, p, r, φ] with controls [δa, δr].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSpaceModel {
    pub axis: Axis,
    pub a: Matrix4<f64>,
    pub b: Matrix4x2<f64>,
}

impl StateSpaceModel {
    pub fn new(axis: Axis, a: Matrix4<f64>, b: Matrix4x2<f64>) -> Self {
        Self { axis, a, b }
    }

    pub fn state_names(&self) -> [&'static str; 4] {
        match self.axis {
            Axis::Longitudinal => LONGITUDINAL_STATES,
            Axis::LateralDirectional => LATERAL_STATES,
        }
    }

    pub fn control_names(&self) -> [&'static str; 2] {
        match self.axis {
            Axis::Longitudinal => LONGITUDINAL_CONTROLS,
            Axis::LateralDirectional => LATERAL_CONTROLS,
        }
    }

    /// Sum of the eigenvalues.
    pub fn trace(&self) -> f64 {
        self.a.trace()
    }

    pub fn is_finite(&self) -> bool {
        self.a.iter().chain(self.b.iter()).all(|v| v.is_finite())
    }
}
