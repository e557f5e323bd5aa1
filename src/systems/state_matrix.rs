use nalgebra::{Matrix4, Matrix4x2};
use serde::{Deserialize, Serialize};

use crate::components::{
    LateralDerivatives, LongitudinalDerivatives, StateSpaceModel, TrimCondition,
};
use crate::utils::{Axis, DomainError};

/// Lateral-directional moment derivatives with the Ixz product of inertia folded in.
///
/// L' = (L + i1·N) / (1 - i1·i2), N' = (i2·L + N) / (1 - i1·i2)
/// with i1 = Ixz/Ixx and i2 = Ixz/Izz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimedLateralDerivatives {
    pub l_beta: f64,
    pub l_p: f64,
    pub l_r: f64,
    pub n_beta: f64,
    pub n_p: f64,
    pub n_r: f64,
    pub l_delta_a: f64,
    pub l_delta_r: f64,
    pub n_delta_a: f64,
    pub n_delta_r: f64,
}

impl PrimedLateralDerivatives {
    pub fn new(derivs: &LateralDerivatives, trim: &TrimCondition) -> Self {
        let (i1, i2) = trim.mass.coupling_ratios();
        let denom = 1.0 - i1 * i2;
        let l = |l: f64, n: f64| (l + i1 * n) / denom;
        let n = |l: f64, n: f64| (i2 * l + n) / denom;

        Self {
            l_beta: l(derivs.l_beta, derivs.n_beta),
            l_p: l(derivs.l_p, derivs.n_p),
            l_r: l(derivs.l_r, derivs.n_r),
            n_beta: n(derivs.l_beta, derivs.n_beta),
            n_p: n(derivs.l_p, derivs.n_p),
            n_r: n(derivs.l_r, derivs.n_r),
            l_delta_a: l(derivs.l_delta_a, derivs.n_delta_a),
            l_delta_r: l(derivs.l_delta_r, derivs.n_delta_r),
            n_delta_a: n(derivs.l_delta_a, derivs.n_delta_a),
            n_delta_r: n(derivs.l_delta_r, derivs.n_delta_r),
        }
    }
}

/// Assembles the longitudinal model ẋ = A x + B u with x = [u, w, q, θ] and
/// u = [δt, δe].
///
/// The Zẇ term is solved out of the w equation and substituted into the q
/// equation, so every entry of rows 1 and 2 carries it.
pub fn build_longitudinal(
    derivs: &LongitudinalDerivatives,
    trim: &TrimCondition,
    gravity: f64,
) -> Result<StateSpaceModel, DomainError> {
    derivs.validate()?;

    let u0 = trim.airspeed;
    let theta0 = trim.pitch_angle();
    let g_cos = gravity * theta0.cos();
    let g_sin = gravity * theta0.sin();

    let w_scale = 1.0 / (1.0 - derivs.z_w_dot);
    let k = derivs.m_w_dot * w_scale;

    let a = Matrix4::new(
        derivs.x_u,
        derivs.x_w,
        derivs.x_q,
        -g_cos,
        derivs.z_u * w_scale,
        derivs.z_w * w_scale,
        (derivs.z_q + u0) * w_scale,
        -g_sin * w_scale,
        derivs.m_u + k * derivs.z_u,
        derivs.m_w + k * derivs.z_w,
        derivs.m_q + k * (derivs.z_q + u0),
        -k * g_sin,
        0.0,
        0.0,
        1.0,
        0.0,
    );

    let b = Matrix4x2::new(
        derivs.x_delta_t,
        derivs.x_delta_e,
        derivs.z_delta_t * w_scale,
        derivs.z_delta_e * w_scale,
        derivs.m_delta_t + k * derivs.z_delta_t,
        derivs.m_delta_e + k * derivs.z_delta_e,
        0.0,
        0.0,
    );

    Ok(StateSpaceModel::new(Axis::Longitudinal, a, b))
}

/// Assembles the lateral-directional model with x = [β, p, r, φ] and
/// u = [δa, δr].
///
/// Takes unprimed derivatives; the Ixz coupling is applied here exactly once.
pub fn build_lateral(
    derivs: &LateralDerivatives,
    trim: &TrimCondition,
    gravity: f64,
) -> Result<StateSpaceModel, DomainError> {
    derivs.validate()?;

    let u0 = trim.airspeed;
    let theta0 = trim.pitch_angle();
    let primed = PrimedLateralDerivatives::new(derivs, trim);

    let a = Matrix4::new(
        derivs.y_beta / u0,
        derivs.y_p / u0,
        derivs.y_r / u0 - 1.0,
        gravity * theta0.cos() / u0,
        primed.l_beta,
        primed.l_p,
        primed.l_r,
        0.0,
        primed.n_beta,
        primed.n_p,
        primed.n_r,
        0.0,
        0.0,
        1.0,
        theta0.tan(),
        0.0,
    );

    let b = Matrix4x2::new(
        derivs.y_delta_a / u0,
        derivs.y_delta_r / u0,
        primed.l_delta_a,
        primed.l_delta_r,
        primed.n_delta_a,
        primed.n_delta_r,
        0.0,
        0.0,
    );

    Ok(StateSpaceModel::new(Axis::LateralDirectional, a, b))
}
