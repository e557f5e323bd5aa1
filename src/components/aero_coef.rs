use serde::{Deserialize, Serialize};

use crate::components::PropulsionRegime;

/// Dimensionless stability and control derivatives at the trim point, plus the
/// propulsion regime that selects the speed-dependent thrust terms.
///
/// Rate derivatives use the usual normalisations: q̂ = q c / (2 u0),
/// α̇̂ = α̇ c / (2 u0), p̂ = p b / (2 u0), r̂ = r b / (2 u0). Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AerodynamicCoefficientSet {
    pub drag: DragCoefficients,
    pub lift: LiftCoefficients,
    pub pitch: PitchCoefficients,
    pub thrust: ThrustCoefficients,
    pub side_force: SideForceCoefficients,
    pub roll: RollCoefficients,
    pub yaw: YawCoefficients,
    #[serde(default)]
    pub propulsion: PropulsionRegime,
}

/// Drag coefficients at trim
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragCoefficients {
    /// Trim drag coefficient (Cd0).
    pub c_d_0: f64,
    /// Drag slope with angle of attack (CdAlpha0).
    pub c_d_alpha: f64,
    /// Drag slope with Mach number (CdM0).
    pub c_d_mach: f64,
}

/// Lift coefficients at trim
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftCoefficients {
    /// Trim lift coefficient (Cl0).
    pub c_l_0: f64,
    /// Lift curve slope (ClAlpha0).
    pub c_l_alpha: f64,
    /// Lift due to angle-of-attack rate (ClAlpha_dot0).
    pub c_l_alpha_dot: f64,
    /// Lift slope with Mach number (ClM0).
    pub c_l_mach: f64,
    /// Lift due to pitch rate (ClQ0).
    pub c_l_q: f64,
    /// Lift due to throttle (ClDeltaT).
    pub c_l_delta_t: f64,
    /// Lift due to elevator deflection (ClDeltaE).
    pub c_l_delta_e: f64,
}

/// Pitching moment coefficients at trim
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchCoefficients {
    /// Static stability (CmAlpha0).
    pub c_m_alpha: f64,
    /// Moment due to angle-of-attack rate (CmAlpha_dot0).
    pub c_m_alpha_dot: f64,
    /// Moment slope with Mach number (Cm_m0).
    pub c_m_mach: f64,
    /// Pitch damping (Cmq).
    pub c_m_q: f64,
    /// Moment due to throttle (CmDeltaT).
    pub c_m_delta_t: f64,
    /// Elevator effectiveness (CmDeltaE).
    pub c_m_delta_e: f64,
}

/// Thrust model coefficients
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrustCoefficients {
    /// Thrust coefficient at the fixed point u = u0, δT = 1 (CTfix).
    pub c_t_fix: f64,
    /// Scale factor of the speed effect on thrust (kv).
    pub k_v: f64,
}

/// Side force coefficients
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideForceCoefficients {
    pub c_y_beta: f64,
    pub c_y_p: f64,
    pub c_y_r: f64,
    pub c_y_delta_a: f64,
    pub c_y_delta_r: f64,
}

/// Rolling moment coefficients
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollCoefficients {
    /// Dihedral effect (CLBeta).
    pub c_l_beta: f64,
    /// Roll damping (CLP).
    pub c_l_p: f64,
    pub c_l_r: f64,
    pub c_l_delta_a: f64,
    pub c_l_delta_r: f64,
}

/// Yawing moment coefficients
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YawCoefficients {
    /// Weathercock stability (CNBeta).
    pub c_n_beta: f64,
    pub c_n_p: f64,
    /// Yaw damping (CNR).
    pub c_n_r: f64,
    pub c_n_delta_a: f64,
    pub c_n_delta_r: f64,
}

impl AerodynamicCoefficientSet {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        drag: DragCoefficients,
        lift: LiftCoefficients,
        pitch: PitchCoefficients,
        thrust: ThrustCoefficients,
        side_force: SideForceCoefficients,
        roll: RollCoefficients,
        yaw: YawCoefficients,
        propulsion: PropulsionRegime,
    ) -> Self {
        Self {
            drag,
            lift,
            pitch,
            thrust,
            side_force,
            roll,
            yaw,
            propulsion,
        }
    }

    /// Same coefficients, different propulsion regime.
    pub fn with_propulsion(mut self, propulsion: PropulsionRegime) -> Self {
        self.propulsion = propulsion;
        self
    }

    /// Boeing 747-class cruise at Mach 0.8, 40 000 ft (stability axes).
    pub fn boeing_747_cruise() -> Self {
        Self::new(
            DragCoefficients::boeing_747_cruise(),
            LiftCoefficients::boeing_747_cruise(),
            PitchCoefficients::boeing_747_cruise(),
            ThrustCoefficients::boeing_747_cruise(),
            SideForceCoefficients::boeing_747_cruise(),
            RollCoefficients::boeing_747_cruise(),
            YawCoefficients::boeing_747_cruise(),
            PropulsionRegime::ConstantThrust,
        )
    }

    /// DHC-6 Twin Otter linearized at 60 m/s, sea level.
    pub fn twin_otter_cruise() -> Self {
        Self::new(
            DragCoefficients::twin_otter_cruise(),
            LiftCoefficients::twin_otter_cruise(),
            PitchCoefficients::twin_otter_cruise(),
            ThrustCoefficients::twin_otter_cruise(),
            SideForceCoefficients::twin_otter_cruise(),
            RollCoefficients::twin_otter_cruise(),
            YawCoefficients::twin_otter_cruise(),
            PropulsionRegime::ConstantPower,
        )
    }
}

impl DragCoefficients {
    pub fn boeing_747_cruise() -> Self {
        Self {
            c_d_0: 0.043,
            c_d_alpha: 0.435,
            c_d_mach: 0.025,
        }
    }

    // Trim values at alpha ≈ 4.5 deg of the nonlinear polar
    pub fn twin_otter_cruise() -> Self {
        Self {
            c_d_0: 0.137,
            c_d_alpha: 0.604,
            c_d_mach: 0.0,
        }
    }
}

impl LiftCoefficients {
    pub fn boeing_747_cruise() -> Self {
        Self {
            c_l_0: 0.654,
            c_l_alpha: 4.920,
            c_l_alpha_dot: 5.896,
            c_l_mach: 0.05,
            c_l_q: 5.921,
            c_l_delta_t: 0.0,
            c_l_delta_e: 0.3586,
        }
    }

    pub fn twin_otter_cruise() -> Self {
        Self {
            c_l_0: 0.556,
            c_l_alpha: 4.370,
            c_l_alpha_dot: 0.0,
            c_l_mach: 0.0,
            c_l_q: 25.05,
            c_l_delta_t: 0.0,
            c_l_delta_e: 0.291,
        }
    }
}

impl PitchCoefficients {
    // Mach slope and Cmq reproduce the Xu, Zu, Mu and q-row entries of
    // Etkin's 747 state matrix at this flight condition
    pub fn boeing_747_cruise() -> Self {
        Self {
            c_m_alpha: -1.023,
            c_m_alpha_dot: -6.314,
            c_m_mach: 0.143,
            c_m_q: -24.0,
            c_m_delta_t: 0.0,
            c_m_delta_e: -1.444,
        }
    }

    pub fn twin_otter_cruise() -> Self {
        Self {
            c_m_alpha: -1.419,
            c_m_alpha_dot: 0.0,
            c_m_mach: 0.0,
            c_m_q: -27.95,
            c_m_delta_t: 0.0,
            c_m_delta_e: -1.626,
        }
    }
}

impl ThrustCoefficients {
    pub fn boeing_747_cruise() -> Self {
        Self {
            c_t_fix: 0.043,
            k_v: 0.0,
        }
    }

    pub fn twin_otter_cruise() -> Self {
        Self {
            c_t_fix: 0.137,
            k_v: 0.0,
        }
    }
}

impl SideForceCoefficients {
    pub fn boeing_747_cruise() -> Self {
        Self {
            c_y_beta: -0.8771,
            c_y_p: 0.0,
            c_y_r: 0.0,
            c_y_delta_a: 0.0,
            c_y_delta_r: 0.1146,
        }
    }

    pub fn twin_otter_cruise() -> Self {
        Self {
            c_y_beta: -0.885,
            c_y_p: -0.090,
            c_y_r: 1.697,
            c_y_delta_a: -0.051,
            c_y_delta_r: -0.193,
        }
    }
}

impl RollCoefficients {
    pub fn boeing_747_cruise() -> Self {
        Self {
            c_l_beta: -0.2797,
            c_l_p: -0.3295,
            c_l_r: 0.304,
            c_l_delta_a: 0.0135,
            c_l_delta_r: 0.0,
        }
    }

    pub fn twin_otter_cruise() -> Self {
        Self {
            c_l_beta: -0.112,
            c_l_p: -0.413,
            c_l_r: 0.191,
            c_l_delta_a: 0.206,
            c_l_delta_r: 0.116,
        }
    }
}

impl YawCoefficients {
    pub fn boeing_747_cruise() -> Self {
        Self {
            c_n_beta: 0.1946,
            c_n_p: -0.04073,
            c_n_r: -0.2737,
            c_n_delta_a: 0.0018,
            c_n_delta_r: -0.1129,
        }
    }

    pub fn twin_otter_cruise() -> Self {
        Self {
            c_n_beta: 0.088,
            c_n_p: -0.043,
            c_n_r: -0.426,
            c_n_delta_a: 0.023,
            c_n_delta_r: -0.087,
        }
    }
}
