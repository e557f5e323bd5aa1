use serde::{Deserialize, Serialize};

use crate::components::PropulsionRegime;
use crate::utils::DomainError;

/// Dimensional longitudinal stability and control derivatives.
///
/// Force derivatives are per unit mass (X/m, Z/m), moment derivatives per unit
/// inertia (M/Iyy). `x_w_dot`, `x_q` and `x_delta_e` are zero by modelling
/// assumption, not for lack of data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalDerivatives {
    pub x_u: f64,
    pub x_w: f64,
    pub x_w_dot: f64,
    pub x_q: f64,
    pub z_u: f64,
    pub z_w: f64,
    pub z_w_dot: f64,
    pub z_q: f64,
    pub m_u: f64,
    pub m_w: f64,
    pub m_w_dot: f64,
    pub m_q: f64,
    pub x_delta_t: f64,
    pub x_delta_e: f64,
    pub z_delta_t: f64,
    pub z_delta_e: f64,
    pub m_delta_t: f64,
    pub m_delta_e: f64,
}

/// Dimensional lateral-directional stability and control derivatives.
///
/// Unprimed: rolling and yawing moments are divided by Ixx and Izz only, the
/// Ixz coupling is applied when the state matrix is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralDerivatives {
    pub y_beta: f64,
    pub y_p: f64,
    pub y_r: f64,
    pub l_beta: f64,
    pub l_p: f64,
    pub l_r: f64,
    pub n_beta: f64,
    pub n_p: f64,
    pub n_r: f64,
    pub y_delta_a: f64,
    pub y_delta_r: f64,
    pub l_delta_a: f64,
    pub l_delta_r: f64,
    pub n_delta_a: f64,
    pub n_delta_r: f64,
}

/// All derivatives for one trim condition and coefficient set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionalDerivativeSet {
    /// Regime the thrust derivatives were evaluated for.
    pub propulsion: PropulsionRegime,
    pub longitudinal: LongitudinalDerivatives,
    pub lateral: LateralDerivatives,
}

impl LongitudinalDerivatives {
    pub fn named(&self) -> [(&'static str, f64); 18] {
        [
            ("x_u", self.x_u),
            ("x_w", self.x_w),
            ("x_w_dot", self.x_w_dot),
            ("x_q", self.x_q),
            ("z_u", self.z_u),
            ("z_w", self.z_w),
            ("z_w_dot", self.z_w_dot),
            ("z_q", self.z_q),
            ("m_u", self.m_u),
            ("m_w", self.m_w),
            ("m_w_dot", self.m_w_dot),
            ("m_q", self.m_q),
            ("x_delta_t", self.x_delta_t),
            ("x_delta_e", self.x_delta_e),
            ("z_delta_t", self.z_delta_t),
            ("z_delta_e", self.z_delta_e),
            ("m_delta_t", self.m_delta_t),
            ("m_delta_e", self.m_delta_e),
        ]
    }

    /// Fails on the first NaN (missing) or infinite entry.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_named(&self.named())
    }
}

impl LateralDerivatives {
    pub fn named(&self) -> [(&'static str, f64); 15] {
        [
            ("y_beta", self.y_beta),
            ("y_p", self.y_p),
            ("y_r", self.y_r),
            ("l_beta", self.l_beta),
            ("l_p", self.l_p),
            ("l_r", self.l_r),
            ("n_beta", self.n_beta),
            ("n_p", self.n_p),
            ("n_r", self.n_r),
            ("y_delta_a", self.y_delta_a),
            ("y_delta_r", self.y_delta_r),
            ("l_delta_a", self.l_delta_a),
            ("l_delta_r", self.l_delta_r),
            ("n_delta_a", self.n_delta_a),
            ("n_delta_r", self.n_delta_r),
        ]
    }

    /// Fails on the first NaN (missing) or infinite entry.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_named(&self.named())
    }
}

impl DimensionalDerivativeSet {
    pub fn validate(&self) -> Result<(), DomainError> {
        self.longitudinal.validate()?;
        self.lateral.validate()
    }
}

fn check_named(named: &[(&'static str, f64)]) -> Result<(), DomainError> {
    for &(name, value) in named {
        if value.is_nan() {
            return Err(DomainError::MissingDerivative { name });
        }
        if value.is_infinite() {
            return Err(DomainError::NonFiniteDerivative { name, value });
        }
    }
    Ok(())
}
