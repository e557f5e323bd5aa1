use serde::{Deserialize, Serialize};

use crate::components::{AircraftGeometry, MassModel};
use crate::utils::{
    approx_eq_relative, dynamic_pressure, DomainError, DYNAMIC_PRESSURE_TOLERANCE,
    ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_SPEED_OF_SOUND,
};

/// The steady reference flight state the equations are linearized about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimCondition {
    /// Air density rho0 (kg/m³).
    pub density: f64,
    /// Trim airspeed u0 (m/s).
    pub airspeed: f64,
    /// Dynamic pressure q0 (Pa).
    pub dynamic_pressure: f64,
    /// Mach number M0.
    pub mach: f64,
    /// Flight-path angle gamma0 (rad). Stability axes, so theta0 = gamma0.
    pub flight_path_angle: f64,
    pub geometry: AircraftGeometry,
    pub mass: MassModel,
}

impl TrimCondition {
    /// Creates a trim condition with q0 derived from density and airspeed.
    pub fn new(
        density: f64,
        airspeed: f64,
        mach: f64,
        flight_path_angle: f64,
        geometry: AircraftGeometry,
        mass: MassModel,
    ) -> Self {
        Self {
            density,
            airspeed,
            dynamic_pressure: dynamic_pressure(density, airspeed),
            mach,
            flight_path_angle,
            geometry,
            mass,
        }
    }

    /// Overrides q0 with an independently supplied value (e.g. from a data sheet).
    pub fn with_dynamic_pressure(mut self, dynamic_pressure: f64) -> Self {
        self.dynamic_pressure = dynamic_pressure;
        self
    }

    /// Reference pitch attitude theta0 (rad).
    #[inline]
    pub fn pitch_angle(&self) -> f64 {
        self.flight_path_angle
    }

    /// Checks every field the derivative formulas divide by or rely on.
    pub fn validate(&self) -> Result<(), DomainError> {
        let positive = [
            ("density", self.density),
            ("airspeed", self.airspeed),
            ("dynamic_pressure", self.dynamic_pressure),
            ("wing_area", self.geometry.wing_area),
            ("wing_span", self.geometry.wing_span),
            ("mac", self.geometry.mac),
            ("mass", self.mass.mass),
            ("ixx", self.mass.ixx),
            ("iyy", self.mass.iyy),
            ("izz", self.mass.izz),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(DomainError::InvalidTrimCondition {
                    field,
                    value,
                    reason: "must be positive and finite",
                });
            }
        }

        if !self.mach.is_finite() || self.mach < 0.0 {
            return Err(DomainError::InvalidTrimCondition {
                field: "mach",
                value: self.mach,
                reason: "must be non-negative and finite",
            });
        }
        // Zu carries a M²/(1 - M²) compressibility term.
        if (1.0 - self.mach.powi(2)).abs() < 1e-6 {
            return Err(DomainError::InvalidTrimCondition {
                field: "mach",
                value: self.mach,
                reason: "sonic trim is singular",
            });
        }

        let gamma = self.flight_path_angle;
        if !gamma.is_finite() || gamma.abs() >= std::f64::consts::FRAC_PI_2 {
            return Err(DomainError::InvalidTrimCondition {
                field: "flight_path_angle",
                value: gamma,
                reason: "must lie strictly between -pi/2 and pi/2",
            });
        }

        let ixz = self.mass.ixz;
        if !ixz.is_finite() || ixz.powi(2) >= self.mass.ixx * self.mass.izz {
            return Err(DomainError::InvalidTrimCondition {
                field: "ixz",
                value: ixz,
                reason: "Ixz² must be smaller than Ixx·Izz",
            });
        }

        let expected = dynamic_pressure(self.density, self.airspeed);
        if !approx_eq_relative(self.dynamic_pressure, expected, DYNAMIC_PRESSURE_TOLERANCE) {
            return Err(DomainError::InconsistentDynamicPressure {
                supplied: self.dynamic_pressure,
                expected,
            });
        }

        Ok(())
    }

    /// Boeing 747-class cruise: Mach 0.8 at 40 000 ft, level flight.
    pub fn boeing_747_cruise() -> Self {
        Self::new(
            0.3045,
            235.9,
            0.8,
            0.0,
            AircraftGeometry::boeing_747(),
            MassModel::boeing_747(),
        )
    }

    /// DHC-6 Twin Otter: 60 m/s level flight at sea level.
    pub fn twin_otter_cruise() -> Self {
        let airspeed = 60.0;
        Self::new(
            ISA_SEA_LEVEL_DENSITY,
            airspeed,
            airspeed / ISA_SEA_LEVEL_SPEED_OF_SOUND,
            0.0,
            AircraftGeometry::twin_otter(),
            MassModel::twin_otter(),
        )
    }
}
