use serde::{Deserialize, Serialize};

/// Mass and inertia properties about the body axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Total mass of the aircraft (kg).
    pub mass: f64,
    /// Roll moment of inertia (kg·m²).
    pub ixx: f64,
    /// Pitch moment of inertia (kg·m²).
    pub iyy: f64,
    /// Yaw moment of inertia (kg·m²).
    pub izz: f64,
    /// Product of inertia between the x and z axes (kg·m²).
    pub ixz: f64,
}

impl MassModel {
    /// Creates a new `MassModel` instance with specified mass and inertia components.
    ///
    /// # Arguments
    /// * `mass` - Total mass of the aircraft (kg).
    /// * `ixx` - Moment of inertia about the x-axis (kg·m²).
    /// * `iyy` - Moment of inertia about the y-axis (kg·m²).
    /// * `izz` - Moment of inertia about the z-axis (kg·m²).
    /// * `ixz` - Product of inertia between the x and z axes (kg·m²).
    pub fn new(mass: f64, ixx: f64, iyy: f64, izz: f64, ixz: f64) -> Self {
        Self {
            mass,
            ixx,
            iyy,
            izz,
            ixz,
        }
    }

    /// Roll/yaw coupling ratios (Ixz/Ixx, Ixz/Izz).
    pub fn coupling_ratios(&self) -> (f64, f64) {
        (self.ixz / self.ixx, self.ixz / self.izz)
    }

    pub fn twin_otter() -> Self {
        Self::new(4874.8, 28366.4, 32852.8, 52097.3, 1384.3)
    }

    pub fn boeing_747() -> Self {
        Self::new(2.83176e5, 0.247e8, 0.449e8, 0.673e8, -0.212e7)
    }
}
