use tracing::debug;

use crate::components::{
    AerodynamicCoefficientSet, DimensionalDerivativeSet, DragCoefficients, LateralDerivatives,
    LiftCoefficients, LongitudinalDerivatives, PropulsionRegime, ThrustCoefficients,
    TrimCondition,
};
use crate::utils::{mass_parameter, DomainError};

// --- Pure Calculation Logic ---
//
// Each function maps the trim condition and the coefficients it needs to one
// dimensional derivative. Force derivatives are per unit mass, moment
// derivatives per unit inertia. Callers validate the trim condition first.

fn mu(trim: &TrimCondition) -> f64 {
    mass_parameter(
        trim.density,
        trim.geometry.wing_area,
        trim.mass.mass,
        trim.geometry.mac,
    )
}

/// q0 S / (m u0), the common factor of the longitudinal force derivatives.
fn force_speed_factor(trim: &TrimCondition) -> f64 {
    trim.dynamic_pressure * trim.geometry.wing_area / (trim.mass.mass * trim.airspeed)
}

// Longitudinal stability derivatives

/// Xu for constant thrust (also used by the constant-mass-flow and ramjet regimes).
pub fn x_u_constant_thrust(trim: &TrimCondition, c_d_0: f64, c_d_mach: f64) -> f64 {
    -force_speed_factor(trim) * (2.0 * c_d_0 + trim.mach * c_d_mach)
}

/// Xu for constant power, thrust falling as 1/u.
pub fn x_u_constant_power(trim: &TrimCondition, c_d_0: f64, c_d_mach: f64, c_l_0: f64) -> f64 {
    -force_speed_factor(trim)
        * (3.0 * c_d_0 + c_l_0 * trim.flight_path_angle.tan() + trim.mach * c_d_mach)
}

pub fn x_w(trim: &TrimCondition, c_l_0: f64, c_d_alpha: f64) -> f64 {
    force_speed_factor(trim) * (c_l_0 - c_d_alpha)
}

pub fn z_u(trim: &TrimCondition, c_l_0: f64, c_l_mach: f64) -> f64 {
    let m2 = trim.mach.powi(2);
    -force_speed_factor(trim) * (2.0 * c_l_0 + m2 * c_l_mach / (1.0 - m2))
}

pub fn z_w(trim: &TrimCondition, c_d_0: f64, c_l_alpha: f64) -> f64 {
    -force_speed_factor(trim) * (c_d_0 + c_l_alpha)
}

/// Dimensionless: Zẇ enters the state equation as 1 / (1 - Zẇ).
pub fn z_w_dot(trim: &TrimCondition, c_l_alpha_dot: f64) -> f64 {
    -c_l_alpha_dot / (2.0 * mu(trim))
}

pub fn z_q(trim: &TrimCondition, c_l_q: f64) -> f64 {
    -trim.airspeed * c_l_q / (2.0 * mu(trim))
}

pub fn m_u(trim: &TrimCondition, c_m_mach: f64) -> f64 {
    trim.dynamic_pressure * trim.geometry.wing_area * trim.geometry.mac * trim.mach * c_m_mach
        / (trim.mass.iyy * trim.airspeed)
}

pub fn m_w(trim: &TrimCondition, c_m_alpha: f64) -> f64 {
    trim.dynamic_pressure * trim.geometry.wing_area * trim.geometry.mac * c_m_alpha
        / (trim.mass.iyy * trim.airspeed)
}

pub fn m_w_dot(trim: &TrimCondition, c_m_alpha_dot: f64) -> f64 {
    trim.density * trim.geometry.wing_area * trim.geometry.mac.powi(2) * c_m_alpha_dot
        / (4.0 * trim.mass.iyy)
}

pub fn m_q(trim: &TrimCondition, c_m_q: f64) -> f64 {
    trim.density * trim.airspeed * trim.geometry.wing_area * trim.geometry.mac.powi(2) * c_m_q
        / (4.0 * trim.mass.iyy)
}

// Longitudinal control derivatives

/// -q0 S (CTfix + kv u0^-n) / m, with n set by how thrust scales with speed.
fn thrust_control(trim: &TrimCondition, c_t_fix: f64, k_v: f64, speed_exponent: i32) -> f64 {
    -trim.dynamic_pressure * trim.geometry.wing_area
        * (c_t_fix + k_v * trim.airspeed.powi(-speed_exponent))
        / trim.mass.mass
}

pub fn x_delta_t_constant_thrust(trim: &TrimCondition, c_t_fix: f64, k_v: f64) -> f64 {
    thrust_control(trim, c_t_fix, k_v, 2)
}

pub fn x_delta_t_constant_power(trim: &TrimCondition, c_t_fix: f64, k_v: f64) -> f64 {
    thrust_control(trim, c_t_fix, k_v, 3)
}

pub fn x_delta_t_constant_mass_flow(trim: &TrimCondition, c_t_fix: f64, k_v: f64) -> f64 {
    thrust_control(trim, c_t_fix, k_v, 1)
}

pub fn x_delta_t_ramjet(trim: &TrimCondition, c_t_fix: f64, k_v: f64) -> f64 {
    thrust_control(trim, c_t_fix, k_v, 0)
}

pub fn z_delta_t(trim: &TrimCondition, c_l_delta_t: f64) -> f64 {
    -trim.dynamic_pressure * trim.geometry.wing_area * c_l_delta_t / trim.mass.mass
}

pub fn z_delta_e(trim: &TrimCondition, c_l_delta_e: f64) -> f64 {
    -trim.dynamic_pressure * trim.geometry.wing_area * c_l_delta_e / trim.mass.mass
}

pub fn m_delta_t(trim: &TrimCondition, c_m_delta_t: f64) -> f64 {
    trim.dynamic_pressure * trim.geometry.wing_area * trim.geometry.mac * c_m_delta_t
        / trim.mass.iyy
}

pub fn m_delta_e(trim: &TrimCondition, c_m_delta_e: f64) -> f64 {
    trim.dynamic_pressure * trim.geometry.wing_area * trim.geometry.mac * c_m_delta_e
        / trim.mass.iyy
}

// Lateral-directional derivatives

/// Side force per unit mass due to sideslip (or a control deflection).
pub fn y_beta(trim: &TrimCondition, c_y: f64) -> f64 {
    trim.dynamic_pressure * trim.geometry.wing_area * c_y / trim.mass.mass
}

/// Side force per unit mass due to a rate (p or r).
pub fn y_rate(trim: &TrimCondition, c_y: f64) -> f64 {
    trim.dynamic_pressure * trim.geometry.wing_area * trim.geometry.wing_span * c_y
        / (2.0 * trim.airspeed * trim.mass.mass)
}

/// q0 S b C / I for an angle or a control deflection.
fn moment_static(trim: &TrimCondition, coefficient: f64, inertia: f64) -> f64 {
    trim.dynamic_pressure * trim.geometry.wing_area * trim.geometry.wing_span * coefficient
        / inertia
}

/// q0 S b (b / 2u0) C / I for a rate.
fn moment_rate(trim: &TrimCondition, coefficient: f64, inertia: f64) -> f64 {
    let span = trim.geometry.wing_span;
    trim.dynamic_pressure * trim.geometry.wing_area * span * (span / (2.0 * trim.airspeed))
        * coefficient
        / inertia
}

pub fn l_beta(trim: &TrimCondition, c_l_beta: f64) -> f64 {
    moment_static(trim, c_l_beta, trim.mass.ixx)
}

pub fn l_rate(trim: &TrimCondition, c_l: f64) -> f64 {
    moment_rate(trim, c_l, trim.mass.ixx)
}

pub fn n_beta(trim: &TrimCondition, c_n_beta: f64) -> f64 {
    moment_static(trim, c_n_beta, trim.mass.izz)
}

pub fn n_rate(trim: &TrimCondition, c_n: f64) -> f64 {
    moment_rate(trim, c_n, trim.mass.izz)
}

// --- Propulsion regimes ---

/// Speed-dependent thrust terms of one propulsion regime.
pub trait ThrustModel {
    fn x_u(
        &self,
        trim: &TrimCondition,
        drag: &DragCoefficients,
        lift: &LiftCoefficients,
    ) -> f64;

    fn x_delta_t(&self, trim: &TrimCondition, thrust: &ThrustCoefficients) -> f64;
}

pub struct ConstantThrust;
pub struct ConstantPower;
pub struct ConstantMassFlow;
pub struct Ramjet;

impl ThrustModel for ConstantThrust {
    fn x_u(&self, trim: &TrimCondition, drag: &DragCoefficients, _: &LiftCoefficients) -> f64 {
        x_u_constant_thrust(trim, drag.c_d_0, drag.c_d_mach)
    }

    fn x_delta_t(&self, trim: &TrimCondition, thrust: &ThrustCoefficients) -> f64 {
        x_delta_t_constant_thrust(trim, thrust.c_t_fix, thrust.k_v)
    }
}

impl ThrustModel for ConstantPower {
    fn x_u(&self, trim: &TrimCondition, drag: &DragCoefficients, lift: &LiftCoefficients) -> f64 {
        x_u_constant_power(trim, drag.c_d_0, drag.c_d_mach, lift.c_l_0)
    }

    fn x_delta_t(&self, trim: &TrimCondition, thrust: &ThrustCoefficients) -> f64 {
        x_delta_t_constant_power(trim, thrust.c_t_fix, thrust.k_v)
    }
}

impl ThrustModel for ConstantMassFlow {
    fn x_u(&self, trim: &TrimCondition, drag: &DragCoefficients, _: &LiftCoefficients) -> f64 {
        x_u_constant_thrust(trim, drag.c_d_0, drag.c_d_mach)
    }

    fn x_delta_t(&self, trim: &TrimCondition, thrust: &ThrustCoefficients) -> f64 {
        x_delta_t_constant_mass_flow(trim, thrust.c_t_fix, thrust.k_v)
    }
}

impl ThrustModel for Ramjet {
    fn x_u(&self, trim: &TrimCondition, drag: &DragCoefficients, _: &LiftCoefficients) -> f64 {
        x_u_constant_thrust(trim, drag.c_d_0, drag.c_d_mach)
    }

    fn x_delta_t(&self, trim: &TrimCondition, thrust: &ThrustCoefficients) -> f64 {
        x_delta_t_ramjet(trim, thrust.c_t_fix, thrust.k_v)
    }
}

impl PropulsionRegime {
    pub fn thrust_model(&self) -> &'static dyn ThrustModel {
        match self {
            PropulsionRegime::ConstantThrust => &ConstantThrust,
            PropulsionRegime::ConstantPower => &ConstantPower,
            PropulsionRegime::ConstantMassFlow => &ConstantMassFlow,
            PropulsionRegime::Ramjet => &Ramjet,
        }
    }
}

// --- Derivative set assembly ---

pub fn longitudinal_derivatives(
    trim: &TrimCondition,
    coeffs: &AerodynamicCoefficientSet,
) -> LongitudinalDerivatives {
    let drag = &coeffs.drag;
    let lift = &coeffs.lift;
    let pitch = &coeffs.pitch;
    let thrust_model = coeffs.propulsion.thrust_model();

    LongitudinalDerivatives {
        x_u: thrust_model.x_u(trim, drag, lift),
        x_w: x_w(trim, lift.c_l_0, drag.c_d_alpha),
        // Neglected: drag response to ẇ and q
        x_w_dot: 0.0,
        x_q: 0.0,
        z_u: z_u(trim, lift.c_l_0, lift.c_l_mach),
        z_w: z_w(trim, drag.c_d_0, lift.c_l_alpha),
        z_w_dot: z_w_dot(trim, lift.c_l_alpha_dot),
        z_q: z_q(trim, lift.c_l_q),
        m_u: m_u(trim, pitch.c_m_mach),
        m_w: m_w(trim, pitch.c_m_alpha),
        m_w_dot: m_w_dot(trim, pitch.c_m_alpha_dot),
        m_q: m_q(trim, pitch.c_m_q),
        x_delta_t: thrust_model.x_delta_t(trim, &coeffs.thrust),
        // Elevator drag neglected
        x_delta_e: 0.0,
        z_delta_t: z_delta_t(trim, lift.c_l_delta_t),
        z_delta_e: z_delta_e(trim, lift.c_l_delta_e),
        m_delta_t: m_delta_t(trim, pitch.c_m_delta_t),
        m_delta_e: m_delta_e(trim, pitch.c_m_delta_e),
    }
}

pub fn lateral_derivatives(
    trim: &TrimCondition,
    coeffs: &AerodynamicCoefficientSet,
) -> LateralDerivatives {
    let side = &coeffs.side_force;
    let roll = &coeffs.roll;
    let yaw = &coeffs.yaw;

    LateralDerivatives {
        y_beta: y_beta(trim, side.c_y_beta),
        y_p: y_rate(trim, side.c_y_p),
        y_r: y_rate(trim, side.c_y_r),
        l_beta: l_beta(trim, roll.c_l_beta),
        l_p: l_rate(trim, roll.c_l_p),
        l_r: l_rate(trim, roll.c_l_r),
        n_beta: n_beta(trim, yaw.c_n_beta),
        n_p: n_rate(trim, yaw.c_n_p),
        n_r: n_rate(trim, yaw.c_n_r),
        y_delta_a: y_beta(trim, side.c_y_delta_a),
        y_delta_r: y_beta(trim, side.c_y_delta_r),
        l_delta_a: l_beta(trim, roll.c_l_delta_a),
        l_delta_r: l_beta(trim, roll.c_l_delta_r),
        n_delta_a: n_beta(trim, yaw.c_n_delta_a),
        n_delta_r: n_beta(trim, yaw.c_n_delta_r),
    }
}

/// Computes every dimensional derivative for the coefficient set's propulsion regime.
///
/// # Errors
/// `DomainError::InvalidTrimCondition` / `InconsistentDynamicPressure` when the
/// trim condition would make a formula divide by zero, and
/// `MissingDerivative` / `NonFiniteDerivative` when a coefficient was NaN or
/// the result overflowed.
pub fn compute_derivatives(
    trim: &TrimCondition,
    coeffs: &AerodynamicCoefficientSet,
) -> Result<DimensionalDerivativeSet, DomainError> {
    trim.validate()?;

    let derivatives = DimensionalDerivativeSet {
        propulsion: coeffs.propulsion,
        longitudinal: longitudinal_derivatives(trim, coeffs),
        lateral: lateral_derivatives(trim, coeffs),
    };
    derivatives.validate()?;

    debug!(
        "Derivatives ({}): Xu={:.6} Zw={:.6} Mw={:.6} Mq={:.6} Lp={:.6} Nr={:.6}",
        coeffs.propulsion,
        derivatives.longitudinal.x_u,
        derivatives.longitudinal.z_w,
        derivatives.longitudinal.m_w,
        derivatives.longitudinal.m_q,
        derivatives.lateral.l_p,
        derivatives.lateral.n_r,
    );

    Ok(derivatives)
}
