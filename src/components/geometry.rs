use serde::{Deserialize, Serialize};

/// Reference geometry used to dimensionalize the aerodynamic coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// The reference wing area S (m²).
    pub wing_area: f64,
    /// The wingspan b (m).
    pub wing_span: f64,
    /// The mean aerodynamic chord c (m).
    pub mac: f64,
}

impl AircraftGeometry {
    /// Creates a new `AircraftGeometry` instance with the specified parameters.
    ///
    /// # Arguments
    /// * `wing_area` - The reference wing area (m²).
    /// * `wing_span` - The wing span (m).
    /// * `mac` - The mean aerodynamic chord (m).
    pub fn new(wing_area: f64, wing_span: f64, mac: f64) -> Self {
        AircraftGeometry {
            wing_area,
            wing_span,
            mac,
        }
    }

    pub fn twin_otter() -> Self {
        Self::new(39.0, 19.8, 1.98)
    }

    pub fn boeing_747() -> Self {
        Self::new(511.0, 59.64, 8.324)
    }
}
